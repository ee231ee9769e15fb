use std::sync::Arc;

use crate::{
    error::Result,
    features::{dispatch, load_files},
    models::{opt, parameter_builder, require, Image, RequiredFields, Response, VariationsRequest},
    remote::HttpClient,
};

/// Variations of an existing image, steered by a prompt.
#[derive(Clone)]
pub struct VariationsHandler {
    client: Arc<dyn HttpClient>,
}

impl VariationsHandler {
    pub const ENDPOINT: &'static str = "/generations/variations";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &VariationsRequest) -> Result<Response<Image>> {
        RequiredFields::new()
            .field("prompt", &request.prompt)
            .field("image", &request.image)
            .check()?;

        let parameters = parameter_builder([
            ("prompt", opt(request.prompt.clone())),
            ("style_id", opt(Some(request.style.id()))),
            ("cfg", opt(request.cfg)),
            ("seed", opt(request.seed)),
            ("strength", opt(request.strength)),
            ("steps", opt(request.steps)),
            ("negative_prompt", opt(request.neg_prompt.clone())),
        ]);

        let files = load_files(&[("image", require("image", &request.image)?)]).await?;

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, Some(files)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ImagineError,
        models::{GenerationsStyle, ImageSource, ParamValue, Status},
        remote::testing::RecordingClient,
    };

    #[tokio::test]
    async fn uploads_image_with_parameters() {
        let client = Arc::new(RecordingClient::new(200, b"VARIANT".to_vec()));
        let handler = VariationsHandler::new(client.clone());

        let request = VariationsRequest::new(vec![7u8, 7, 7], "same but blue")
            .with_style(GenerationsStyle::Anime)
            .with_strength(2);
        let response = handler.call(&request).await.unwrap();

        assert_eq!(response.get_or_throw().unwrap().into_bytes(), b"VARIANT".to_vec());
        let call = client.last_call();
        assert_eq!(call.endpoint, "/generations/variations");
        assert_eq!(call.parameters.len(), 3);
        assert_eq!(call.parameters["style_id"], ParamValue::Int(21));
        assert_eq!(call.parameters["strength"], ParamValue::Int(2));
        assert_eq!(call.files.unwrap()["image"], vec![7, 7, 7]);
    }

    #[tokio::test]
    async fn reports_every_missing_field() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = VariationsHandler::new(client.clone());

        let err = handler.call(&VariationsRequest::default()).await.unwrap_err();

        assert!(matches!(
            err,
            ImagineError::MissingParameters(names) if names == vec!["prompt", "image"]
        ));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn unreadable_image_aborts_before_sending() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = VariationsHandler::new(client.clone());

        let request = VariationsRequest::new(ImageSource::from("/no/such/image.jpg"), "x");
        let err = handler.call(&request).await.unwrap_err();

        assert!(matches!(err, ImagineError::IoError { .. }));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let client = Arc::new(RecordingClient::new(500, Vec::new()));
        let handler = VariationsHandler::new(client);

        let response = handler
            .call(&VariationsRequest::new(vec![1u8], "x"))
            .await
            .unwrap();

        assert_eq!(response.status(), Status::InternalServerError);
        assert!(response.data().is_none());
    }
}
