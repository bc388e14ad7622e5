//! Container encode/decode round-trip tests.

use proptest::prelude::*;
use serde_json::json;

use tablekit_container::{decode, encode_at, read_container, write_container};
use tablekit_model::{DataSource, FieldDef, TableDataItem, TableDef, TableParams};

fn sample_source() -> DataSource {
    let mut source = DataSource::with_timestamp(1_700_000_000_000);
    let mut table = TableDef::new(0, "Items");
    table.export_path = "config/item".to_owned();
    table.desc = "item definitions".to_owned();
    table.add_field(FieldDef::number("id", "Id")).unwrap();
    table.add_field(FieldDef::string("name", "Name")).unwrap();
    table.set_item(
        "1",
        TableDataItem {
            index: 0,
            info: json!({ "id": 1, "name": "Sword" }),
        },
    );
    table.set_item(
        "2",
        TableDataItem {
            index: 1,
            info: json!({ "id": 2, "name": "Shield" }),
        },
    );
    source.insert_table("items", table).unwrap();
    source
}

#[test]
fn roundtrip_reproduces_source() {
    let mut source = sample_source();
    let bytes = encode_at(&mut source, 1_700_000_000_500).unwrap();
    let restored = decode(&bytes).unwrap();
    assert_eq!(restored, source);
}

#[test]
fn encode_restamps_updated_at_only() {
    let mut source = sample_source();
    let created = source.created_at;
    let bytes = encode_at(&mut source, 1_800_000_000_000).unwrap();
    let restored = decode(&bytes).unwrap();
    assert_eq!(restored.created_at, created);
    assert_eq!(restored.updated_at, 1_800_000_000_000);
}

#[test]
fn payload_bytes_are_obfuscated() {
    let mut source = sample_source();
    let bytes = encode_at(&mut source, 0).unwrap();
    let payload = &bytes[12..];
    // The JSON body always starts with '{'; the obfuscated payload must not.
    assert_ne!(payload[0], b'{');
    let needle = b"Sword";
    assert!(
        !payload
            .windows(needle.len())
            .any(|window| window == needle),
        "plaintext leaked into the payload"
    );
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.table");

    let mut source = sample_source();
    write_container(&path, &mut source).unwrap();
    let restored = read_container(&path).unwrap();
    assert_eq!(restored, source);
}

proptest! {
    #[test]
    fn roundtrip_holds_for_arbitrary_tables(
        table_keys in proptest::collection::btree_set("[a-z][a-z0-9_]{0,7}", 0..4),
        record_count in 0usize..6,
        stamp in 0i64..2_000_000_000_000,
    ) {
        let mut source = DataSource::with_timestamp(0);
        for (table_pos, key) in table_keys.iter().enumerate() {
            let mut table = TableDef::new(table_pos as i64, key.clone());
            table.add_field(FieldDef::number("id", "Id")).unwrap();
            table.add_field(FieldDef::string("label", "Label")).unwrap();
            for record in 0..record_count {
                table.set_item(
                    record.to_string(),
                    TableDataItem {
                        index: record as i64,
                        info: json!({ "id": record, "label": format!("{key}-{record}") }),
                    },
                );
            }
            source.insert_table(key.clone(), table).unwrap();
        }

        let bytes = encode_at(&mut source, stamp).unwrap();
        let restored = decode(&bytes).unwrap();
        prop_assert_eq!(restored, source);
    }
}
