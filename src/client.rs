use std::sync::Arc;

use crate::{
    config::ImagineConfig,
    error::{ImagineError, Result},
    features::{
        GenerationsHandler, GuidedGenerationsHandler, InPaintingHandler, RemixHandler,
        SuperResolutionHandler, VariationsHandler,
    },
    models::{
        GenerationsRequest, GuidedGenerationsRequest, Image, InPaintingRequest, RemixRequest,
        Response, SuperResolutionRequest, VariationsRequest,
    },
    remote::{HttpClient, RequestClient, RestClient},
};

/// Entry point of the SDK. One method per Imagine capability; every method
/// returns a [`Response`] whose status tells whether an image came back.
///
/// ```no_run
/// use imaginesdk::{GenerationsRequest, GenerationsStyle, Imagine};
///
/// # async fn run() -> imaginesdk::Result<()> {
/// let client = Imagine::new("my-token");
/// let response = client
///     .generations(&GenerationsRequest::new("a cat").with_style(GenerationsStyle::Realistic))
///     .await?;
/// if let Some(image) = response.data() {
///     image.as_file("cat.png")?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Imagine {
    client: Arc<dyn HttpClient>,
}

impl Imagine {
    /// Uses the default reqwest transport.
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_transport(RestClient::new(token, None))
    }

    /// Routes every request through `client`; the token header is still added.
    pub fn with_client(token: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self::from_transport(RestClient::new(token, Some(client)))
    }

    pub fn from_config(config: &ImagineConfig) -> Result<Self> {
        config.validate()?;
        let token = config
            .token
            .clone()
            .ok_or_else(|| ImagineError::ConfigError("API token is required".into()))?;

        let inner: Arc<dyn HttpClient> = Arc::new(RequestClient::from_config(config));
        Ok(Self::from_transport(RestClient::new(token, Some(inner))))
    }

    fn from_transport(client: RestClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn generations(&self, request: &GenerationsRequest) -> Result<Response<Image>> {
        GenerationsHandler::new(self.client.clone()).call(request).await
    }

    /// Variations of an image. Uses the same styles as [`Imagine::generations`].
    pub async fn variations(&self, request: &VariationsRequest) -> Result<Response<Image>> {
        VariationsHandler::new(self.client.clone()).call(request).await
    }

    pub async fn guided_generations(
        &self,
        request: &GuidedGenerationsRequest,
    ) -> Result<Response<Image>> {
        GuidedGenerationsHandler::new(self.client.clone())
            .call(request)
            .await
    }

    pub async fn image_remix(&self, request: &RemixRequest) -> Result<Response<Image>> {
        RemixHandler::new(self.client.clone()).call(request).await
    }

    pub async fn in_painting(&self, request: &InPaintingRequest) -> Result<Response<Image>> {
        InPaintingHandler::new(self.client.clone()).call(request).await
    }

    pub async fn super_resolution(
        &self,
        request: &SuperResolutionRequest,
    ) -> Result<Response<Image>> {
        SuperResolutionHandler::new(self.client.clone())
            .call(request)
            .await
    }
}

impl std::fmt::Debug for Imagine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Imagine").finish_non_exhaustive()
    }
}
