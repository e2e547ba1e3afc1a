//! Client configuration.

use std::time::Duration;

/// Default metadata endpoint (lines, directions and stops).
pub const DEFAULT_LINES_URL: &str = "https://www.stcp.pt/pt/itinerarium/callservice.php";

/// Default arrival widget endpoint.
pub const DEFAULT_WIDGET_URL: &str = "https://www.stcp.pt/pt/widget/post.php";

/// Widget identifier the arrival endpoint expects in its `uid` parameter.
pub const DEFAULT_WIDGET_UID: &str = "d72242190a22274321cacf9eadc7ec5f";

/// Errors in the client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint could not be parsed as an absolute URL
    #[error("invalid URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// Configuration for the STCP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Metadata endpoint
    pub lines_url: String,
    /// Arrival widget endpoint
    pub widget_url: String,
    /// Widget uid sent with every arrival request
    pub widget_uid: String,
    /// Request timeout. `None` means a stalled request waits until the
    /// transport itself gives up.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config pointing at the production STCP endpoints.
    pub fn new() -> Self {
        Self {
            lines_url: DEFAULT_LINES_URL.to_string(),
            widget_url: DEFAULT_WIDGET_URL.to_string(),
            widget_uid: DEFAULT_WIDGET_UID.to_string(),
            timeout: None,
        }
    }

    /// Set a custom metadata endpoint (for testing).
    pub fn with_lines_url(mut self, url: impl Into<String>) -> Self {
        self.lines_url = url.into();
        self
    }

    /// Set a custom arrival widget endpoint (for testing).
    pub fn with_widget_url(mut self, url: impl Into<String>) -> Self {
        self.widget_url = url.into();
        self
    }

    pub fn with_widget_uid(mut self, uid: impl Into<String>) -> Self {
        self.widget_uid = uid.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
