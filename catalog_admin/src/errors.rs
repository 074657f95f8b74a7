use thiserror::Error;

/// The unified error type for the `catalog_admin` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A failed exchange with the backend collection API.
    #[error("client error: {0}")]
    Client(#[from] crate::client::ClientError),

    /// A draft was rejected by the schema's validation rules.
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validate::ValidationError),

    /// An error related to configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl From<shared_utils::env::ConfigError> for Error {
    fn from(err: shared_utils::env::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
