//! Corruption and legacy-format handling.

use tablekit_container::{CONTAINER_VERSION, ContainerError, MAGIC, decode, encode_at, obfuscate};
use tablekit_model::{DataSource, TableParams};

fn encoded_sample() -> Vec<u8> {
    let mut source = DataSource::with_timestamp(42);
    source
        .add_table("cfg", TableParams::named("Config"))
        .unwrap();
    encode_at(&mut source, 42).unwrap()
}

#[test]
fn flipping_any_magic_byte_fails_with_format_error() {
    let bytes = encoded_sample();
    for position in 0..4 {
        let mut corrupted = bytes.clone();
        corrupted[position] ^= 0xFF;
        let err = decode(&corrupted).unwrap_err();
        assert!(
            matches!(err, ContainerError::Format(_)),
            "byte {position}: expected Format error, got {err:?}"
        );
    }
}

#[test]
fn truncation_fails_with_format_error() {
    let bytes = encoded_sample();
    for truncated_len in [bytes.len() - 1, 12, 11, 0] {
        let err = decode(&bytes[..truncated_len]).unwrap_err();
        assert!(
            matches!(err, ContainerError::Format(_)),
            "len {truncated_len}: expected Format error, got {err:?}"
        );
    }
}

#[test]
fn trailing_garbage_fails_with_format_error() {
    let mut bytes = encoded_sample();
    bytes.push(0);
    assert!(matches!(
        decode(&bytes).unwrap_err(),
        ContainerError::Format(_)
    ));
}

#[test]
fn future_version_fails_with_version_error() {
    let mut bytes = encoded_sample();
    bytes[4..8].copy_from_slice(&(CONTAINER_VERSION + 1).to_be_bytes());
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        ContainerError::Version { version, .. } if version == CONTAINER_VERSION + 1
    ));
}

#[test]
fn garbage_payload_fails_with_parse_error() {
    let mut bytes = encoded_sample();
    // Valid framing, payload that de-obfuscates to non-JSON.
    for byte in &mut bytes[12..] {
        *byte = 0xA5;
    }
    assert!(matches!(
        decode(&bytes).unwrap_err(),
        ContainerError::Parse(_)
    ));
}

#[test]
fn legacy_little_endian_container_is_readable() {
    let mut source = DataSource::with_timestamp(7);
    source
        .add_table("cfg", TableParams::named("Config"))
        .unwrap();

    // Reframe the canonical payload under a little-endian header, the way
    // the oldest files on disk were written.
    let json = serde_json::to_vec(&source).unwrap();
    let mut payload = json;
    obfuscate::apply_key(&mut payload);

    let mut legacy = Vec::with_capacity(12 + payload.len());
    legacy.extend_from_slice(&MAGIC.to_le_bytes());
    legacy.extend_from_slice(&1u32.to_le_bytes());
    legacy.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    legacy.extend_from_slice(&payload);

    let restored = decode(&legacy).unwrap();
    assert_eq!(restored, source);
}
