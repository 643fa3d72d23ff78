//! Client configuration

/// Client configuration for connecting to the loan-tracking server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `UMMID_API_URL` selects the server, falling back to the local
    /// development endpoint. `UMMID_API_TIMEOUT` is in seconds.
    pub fn from_env() -> Self {
        let base_url = std::env::var("UMMID_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let timeout = std::env::var("UMMID_API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
