use std::sync::Arc;

use crate::{
    error::Result,
    features::{dispatch, load_files},
    models::{opt, parameter_builder, require, Image, RemixRequest, RequiredFields, Response},
    remote::HttpClient,
};

/// Restyles an image while following its structure through a control guide.
#[derive(Clone)]
pub struct RemixHandler {
    client: Arc<dyn HttpClient>,
}

impl RemixHandler {
    pub const ENDPOINT: &'static str = "/edits/remix";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &RemixRequest) -> Result<Response<Image>> {
        RequiredFields::new()
            .field("prompt", &request.prompt)
            .field("image", &request.image)
            .check()?;

        let parameters = parameter_builder([
            ("prompt", opt(request.prompt.clone())),
            ("style_id", opt(Some(request.style.id()))),
            ("control", opt(Some(request.control.as_str()))),
            ("seed", opt(request.seed)),
            ("strength", opt(request.strength)),
            ("steps", opt(request.steps)),
            ("cfg", opt(request.cfg)),
            ("negative_prompt", opt(request.neg_prompt.clone())),
        ]);

        let files = load_files(&[("image", require("image", &request.image)?)]).await?;

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, Some(files)).await
    }
}
