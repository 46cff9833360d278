//! Crate-wide error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackplaneError {
    #[error("config error: {0}")]
    Config(String),

    #[error("malformed redis uri: {source}")]
    InvalidUri {
        #[source]
        source: url::ParseError,
    },

    #[error("cannot read credential file {}: {source}", .path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logger error: {0}")]
    Logger(String),
}

impl From<url::ParseError> for BackplaneError {
    fn from(source: url::ParseError) -> Self {
        Self::InvalidUri { source }
    }
}
