pub mod error;
pub mod field;
pub mod source;

pub use error::{ModelError, Result};
pub use field::{
    ARRAY_ELEMENT_KEY, FieldDef, FieldKind, RewardValue, SelectOption, SelectValue,
    SelectValueType,
};
pub use source::{
    DATA_SOURCE_VERSION, DataSource, ExportSettings, TableDataItem, TableDef, TableParams,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_serializes_camel_case() {
        let mut source = DataSource::with_timestamp(1_700_000_000_000);
        source
            .add_table("items", TableParams::named("Items"))
            .expect("add table");
        source.export_settings = Some(ExportSettings {
            json_root: Some("assets/config".to_owned()),
            ts_root: None,
        });
        source.sync_interface = Some(true);
        let json = serde_json::to_value(&source).expect("serialize source");
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["version"], 1);
        assert_eq!(json["data"]["items"]["exportPath"], "");
        assert_eq!(json["data"]["items"]["separateExport"], false);
        assert_eq!(json["exportSettings"]["jsonRoot"], "assets/config");
        assert_eq!(json["syncInterface"], true);
        let round: DataSource = serde_json::from_value(json).expect("deserialize source");
        assert_eq!(round, source);
    }
}
