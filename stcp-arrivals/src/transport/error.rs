//! Transport error types.

/// Errors from a fetch that was not superseded.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed (offline, DNS, connection reset, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not the JSON shape we expected
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },
}
