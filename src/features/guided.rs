use std::sync::Arc;

use crate::{
    error::Result,
    features::{dispatch, load_files},
    models::{
        opt, parameter_builder, require, GuidedGenerationsRequest, Image, RequiredFields, Response,
    },
    remote::HttpClient,
};

/// Generation guided by a reference image.
#[derive(Clone)]
pub struct GuidedGenerationsHandler {
    client: Arc<dyn HttpClient>,
}

impl GuidedGenerationsHandler {
    pub const ENDPOINT: &'static str = "/generations/guided";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &GuidedGenerationsRequest) -> Result<Response<Image>> {
        RequiredFields::new()
            .field("prompt", &request.prompt)
            .field("image", &request.image)
            .check()?;

        let parameters = parameter_builder([
            ("prompt", opt(request.prompt.clone())),
            ("style_id", opt(Some(request.style.id()))),
            ("negative_prompt", opt(request.neg_prompt.clone())),
            ("aspect_ratio", opt(request.aspect_ratio.map(|r| r.as_str()))),
            ("seed", opt(request.seed)),
            ("steps", opt(request.steps)),
            ("generation_bias", opt(request.generation_bias)),
            ("artistic_noise", opt(request.artistic_noise)),
            ("aesthetic_weight", opt(request.aesthetic_weight)),
        ]);

        let files = load_files(&[("image", require("image", &request.image)?)]).await?;

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, Some(files)).await
    }
}
