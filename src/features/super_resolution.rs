use std::sync::Arc;

use crate::{
    error::Result,
    features::{dispatch, load_files},
    models::{
        opt, parameter_builder, require, Image, RequiredFields, Response, SuperResolutionRequest,
    },
    remote::HttpClient,
};

#[derive(Clone)]
pub struct SuperResolutionHandler {
    client: Arc<dyn HttpClient>,
}

impl SuperResolutionHandler {
    pub const ENDPOINT: &'static str = "/upscale/";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &SuperResolutionRequest) -> Result<Response<Image>> {
        RequiredFields::new().field("image", &request.image).check()?;

        let parameters = parameter_builder([(
            "model_version",
            opt(Some(request.model_version.as_str())),
        )]);

        let files = load_files(&[("image", require("image", &request.image)?)]).await?;

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, Some(files)).await
    }
}
