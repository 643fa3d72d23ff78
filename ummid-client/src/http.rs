//! HTTP transport for network calls to the loan-tracking server

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for making network requests to the loan-tracking server.
///
/// Holds no token: authenticated calls receive the bearer token per
/// request, read from the session store at the start of each operation.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn auth_header(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(token) = token {
            req = req.header(reqwest::header::AUTHORIZATION, Self::auth_header(token));
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    /// Make a GET request whose response body may be empty
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ClientResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(token) = token {
            req = req.header(reqwest::header::AUTHORIZATION, Self::auth_header(token));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }

        let text = resp.text().await?;
        if text.trim().is_empty() || text.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&text).map(Some).map_err(Into::into)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);

        if let Some(token) = token {
            req = req.header(reqwest::header::AUTHORIZATION, Self::auth_header(token));
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }

        resp.json().await.map_err(Into::into)
    }

    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}
