use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerError {
    /// Malformed, undersized, or truncated container framing.
    #[error("invalid container format: {0}")]
    Format(String),
    /// Container written by a newer codec than this reader supports.
    #[error("unsupported container version {version} (reader supports up to {supported})")]
    Version { version: u32, supported: u32 },
    /// Payload decoded but is not valid JSON for a data source.
    #[error("invalid container payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContainerError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;
