use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferError {
    /// The sample has no entries to infer a schema from.
    #[error("cannot infer a schema: {0}")]
    EmptyInput(&'static str),
    /// The sample (or its representative record) is not a usable shape.
    #[error("unsupported sample shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, InferError>;
