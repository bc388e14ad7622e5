//! Repeating-key XOR payload transform.
//!
//! Obfuscation only, not a security boundary: the key is a fixed constant
//! embedded in every reader. The transform is its own inverse, so one
//! function serves both directions. Preserved bit-for-bit for
//! compatibility with existing container files.

/// Fixed obfuscation key shared by all historical container variants.
pub const OBFUSCATION_KEY: &[u8] = b"table_tool_2024";

/// Apply the repeating-key XOR transform in place.
pub fn apply_key(data: &mut [u8]) {
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= OBFUSCATION_KEY[i % OBFUSCATION_KEY.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_its_own_inverse() {
        let original = b"{\"hello\":\"world\"}".to_vec();
        let mut data = original.clone();
        apply_key(&mut data);
        assert_ne!(data, original);
        apply_key(&mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn key_repeats_past_its_length() {
        let mut data = vec![0u8; OBFUSCATION_KEY.len() + 3];
        apply_key(&mut data);
        assert_eq!(data[OBFUSCATION_KEY.len()], OBFUSCATION_KEY[0]);
        assert_eq!(data[OBFUSCATION_KEY.len() + 2], OBFUSCATION_KEY[2]);
    }
}
