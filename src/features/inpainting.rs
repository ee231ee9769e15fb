use std::sync::Arc;

use crate::{
    error::Result,
    features::{dispatch, load_files},
    models::{opt, parameter_builder, require, Image, InPaintingRequest, RequiredFields, Response},
    remote::HttpClient,
};

/// Repaints the masked area of an image from a prompt.
#[derive(Clone)]
pub struct InPaintingHandler {
    client: Arc<dyn HttpClient>,
}

impl InPaintingHandler {
    pub const ENDPOINT: &'static str = "/edits/inpaint";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &InPaintingRequest) -> Result<Response<Image>> {
        RequiredFields::new()
            .field("prompt", &request.prompt)
            .field("image", &request.image)
            .field("mask", &request.mask)
            .check()?;

        let parameters = parameter_builder([
            ("prompt", opt(request.prompt.clone())),
            ("model_version", opt(Some(request.model_version.as_str()))),
        ]);

        let files = load_files(&[
            ("image", require("image", &request.image)?),
            ("mask", require("mask", &request.mask)?),
        ])
        .await?;

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, Some(files)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ImagineError,
        models::{ImageSource, ParamValue},
        remote::testing::RecordingClient,
    };

    #[tokio::test]
    async fn uploads_image_and_mask() {
        let client = Arc::new(RecordingClient::new(200, b"FILLED".to_vec()));
        let handler = InPaintingHandler::new(client.clone());

        let request = InPaintingRequest::new(vec![1u8], vec![2u8], "a red door");
        let image = handler.call(&request).await.unwrap().get_or_throw().unwrap();

        assert_eq!(image.bytes(), b"FILLED");
        let call = client.last_call();
        assert_eq!(call.endpoint, "/edits/inpaint");
        assert_eq!(call.parameters["model_version"], ParamValue::Text("1".into()));
        let files = call.files.unwrap();
        assert_eq!(files["image"], vec![1]);
        assert_eq!(files["mask"], vec![2]);
    }

    #[tokio::test]
    async fn missing_mask_is_reported() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = InPaintingHandler::new(client.clone());

        let request = InPaintingRequest {
            prompt: Some("a red door".into()),
            image: Some(ImageSource::Bytes(vec![1])),
            ..Default::default()
        };
        let err = handler.call(&request).await.unwrap_err();

        assert!(matches!(err, ImagineError::MissingParameters(names) if names == vec!["mask"]));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn unreadable_mask_sends_nothing() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = InPaintingHandler::new(client.clone());

        let request = InPaintingRequest::new(vec![1u8], "/no/such/mask.png", "a red door");
        assert!(matches!(
            handler.call(&request).await,
            Err(ImagineError::IoError { .. })
        ));
        assert_eq!(client.call_count(), 0);
    }
}
