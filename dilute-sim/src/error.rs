use thiserror::Error;

/// Errors raised by the cluster engine and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Crystal-type selector other than SC, BCC or FCC.
    #[error("unknown type of crystal '{0}', expected 'SC', 'BCC' or 'FCC'")]
    UnknownCrystalType(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<validator::ValidationErrors> for Error {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
