use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::Parameters,
    remote::{Files, Headers, HttpClient, RequestClient},
};

/// Header carrying the API token. The service expects the literal name
/// `Bearer` with the raw token as value.
pub const AUTH_HEADER: &str = "Bearer";

/// Authenticated transport: adds the token header to every request and
/// delegates to the wrapped client.
#[derive(Clone)]
pub struct RestClient {
    client: Arc<dyn HttpClient>,
    token: String,
}

impl RestClient {
    /// Wraps `client`, or a default [`RequestClient`] when `None`.
    pub fn new(token: impl Into<String>, client: Option<Arc<dyn HttpClient>>) -> Self {
        Self {
            client: client.unwrap_or_else(|| Arc::new(RequestClient::new())),
            token: token.into(),
        }
    }

    /// Token header first, then caller headers on top of it.
    fn merge_headers(&self, headers: Option<Headers>) -> Headers {
        let mut merged = Headers::new();
        merged.insert(AUTH_HEADER.to_string(), self.token.clone());
        if let Some(headers) = headers {
            merged.extend(headers);
        }
        merged
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpClient for RestClient {
    async fn post(
        &self,
        endpoint: &str,
        parameters: Parameters,
        files: Option<Files>,
        headers: Option<Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        let headers = self.merge_headers(headers);
        self.client
            .post(endpoint, parameters, files, Some(headers))
            .await
    }
}
