//! Top-level error type.
//!
//! Every failure the caller can see. The front end reports all of them with
//! the same generic alert; the variants exist for logging and tests.

use crate::arrivals::MalformedRowError;
use crate::config::ConfigError;
use crate::transport::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("malformed arrival document: {0}")]
    MalformedRow(#[from] MalformedRowError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
