use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::{ImagineConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error::Result,
    models::{Parameters, Status},
    remote::{
        multipart::{encode, FileOptions, Multipart},
        Files, Headers, HttpClient,
    },
};

#[cfg(feature = "rest")]
use crate::{error::ImagineError, remote::MultipartPart};

#[cfg(feature = "rest")]
type Engine = reqwest::Client;

/// Never constructed: the HTTP engine needs the `rest` feature.
#[cfg(not(feature = "rest"))]
enum Engine {}

/// Default transport: multipart POSTs against the Imagine API with reqwest.
///
/// When the HTTP engine cannot be loaded, every call answers with
/// `Status::ModuleNotFound` and a diagnostic body instead of failing.
pub struct RequestClient {
    engine: std::result::Result<Engine, String>,
    base_url: String,
    timeout: Duration,
    file_options: FileOptions,
}

impl RequestClient {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &ImagineConfig) -> Self {
        Self::with_settings(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn with_settings(base_url: &str, timeout: Duration) -> Self {
        let engine = load_engine(timeout);
        if let Err(reason) = &engine {
            log::warn!("HTTP engine unavailable: {}", reason);
        }

        Self {
            engine,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            file_options: FileOptions::default(),
        }
    }

    pub fn with_file_options(mut self, file_options: FileOptions) -> Self {
        self.file_options = file_options;
        self
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_ok()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for RequestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rest")]
fn load_engine(timeout: Duration) -> std::result::Result<Engine, String> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Module reqwest could not be loaded: {}", e))
}

#[cfg(not(feature = "rest"))]
fn load_engine(_timeout: Duration) -> std::result::Result<Engine, String> {
    Err("Module reqwest could not be loaded. Enable the `rest` feature of imaginesdk \
         or provide your own HttpClient implementation."
        .to_string())
}

#[cfg(feature = "rest")]
async fn send(
    engine: &Engine,
    url: &str,
    multipart: Multipart,
    headers: Option<Headers>,
    timeout: Duration,
) -> Result<(u16, Vec<u8>)> {
    let mut form = reqwest::multipart::Form::new();
    for (name, part) in multipart {
        form = match part {
            MultipartPart::Form { value } => form.text(name, value),
            MultipartPart::File {
                file_name,
                bytes,
                content_type,
            } => {
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| {
                        ImagineError::RequestError(format!(
                            "Invalid content type '{}': {}",
                            content_type, e
                        ))
                    })?;
                form.part(name, part)
            }
        };
    }

    let mut request = engine.post(url).timeout(timeout).multipart(form);
    for (name, value) in headers.unwrap_or_default() {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ImagineError::RequestError(format!("Imagine request failed: {}", e)))?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| ImagineError::RequestError(format!("Failed to read response body: {}", e)))?;

    Ok((status, body.to_vec()))
}

#[cfg(not(feature = "rest"))]
async fn send(
    engine: &Engine,
    _url: &str,
    _multipart: Multipart,
    _headers: Option<Headers>,
    _timeout: Duration,
) -> Result<(u16, Vec<u8>)> {
    match *engine {}
}

#[async_trait]
impl HttpClient for RequestClient {
    async fn post(
        &self,
        endpoint: &str,
        parameters: Parameters,
        files: Option<Files>,
        headers: Option<Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        let engine = match &self.engine {
            Ok(engine) => engine,
            Err(reason) => {
                log::warn!("Skipping POST {}: {}", endpoint, reason);
                return Ok((Status::ModuleNotFound.code(), reason.clone().into_bytes()));
            }
        };

        let url = format!("{}{}", self.base_url, endpoint);
        let multipart = encode(&parameters, files.as_ref(), &self.file_options)?;

        log::debug!("POST {} with {} part(s)", url, multipart.len());
        send(engine, &url, multipart, headers, self.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{opt, parameter_builder};

    fn unavailable() -> RequestClient {
        RequestClient {
            engine: Err("Module reqwest could not be loaded.".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            file_options: FileOptions::default(),
        }
    }

    #[tokio::test]
    async fn missing_engine_returns_synthetic_status() {
        let client = unavailable();
        assert!(!client.is_available());

        let parameters = parameter_builder([("prompt", opt(Some("a cat")))]);
        let (status, body) = client
            .post("/generations", parameters, None, None)
            .await
            .unwrap();

        assert_eq!(status, 1000);
        assert_eq!(Status::from(status), Status::ModuleNotFound);
        assert_eq!(body, b"Module reqwest could not be loaded.".to_vec());
    }

    #[test]
    fn defaults_use_public_base_url_and_timeout() {
        let client = RequestClient::new();
        assert_eq!(client.base_url(), "https://api.vyro.ai/v1/imagine/api");
        assert_eq!(client.timeout(), Duration::from_secs(180));
    }

    #[test]
    fn config_overrides_are_applied() {
        let config = ImagineConfig::new()
            .with_base_url("http://localhost:8080/api/")
            .with_timeout_secs(5);
        let client = RequestClient::from_config(&config);
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[cfg(not(feature = "rest"))]
    #[test]
    fn engine_is_unavailable_without_rest_feature() {
        assert!(!RequestClient::new().is_available());
    }
}
