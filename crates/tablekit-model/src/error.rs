use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A table, field, or record key already exists at the given scope.
    #[error("duplicate {scope} key: {key:?}")]
    DuplicateKey { scope: &'static str, key: String },
    #[error("table not found: {key:?}")]
    TableNotFound { key: String },
    #[error("field not found: {key:?}")]
    FieldNotFound { key: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
