use std::sync::Arc;

use crate::{
    error::Result,
    features::dispatch,
    models::{opt, parameter_builder, GenerationsRequest, Image, Response, RequiredFields},
    remote::HttpClient,
};

/// Text-to-image generation.
#[derive(Clone)]
pub struct GenerationsHandler {
    client: Arc<dyn HttpClient>,
}

impl GenerationsHandler {
    pub const ENDPOINT: &'static str = "/generations";

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn call(&self, request: &GenerationsRequest) -> Result<Response<Image>> {
        RequiredFields::new().field("prompt", &request.prompt).check()?;

        let parameters = parameter_builder([
            ("style_id", opt(Some(request.style.id()))),
            ("prompt", opt(request.prompt.clone())),
            ("aspect_ratio", opt(request.aspect_ratio.map(|r| r.as_str()))),
            ("negative_prompt", opt(request.neg_prompt.clone())),
            ("cfg", opt(request.cfg)),
            ("seed", opt(request.seed)),
            ("steps", opt(request.steps)),
            ("high_res_results", opt(request.high_res_results)),
        ]);

        dispatch(self.client.as_ref(), Self::ENDPOINT, parameters, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ImagineError,
        models::{AspectRatio, GenerationsStyle, ParamValue, Status},
        remote::testing::RecordingClient,
    };

    #[tokio::test]
    async fn sends_only_present_fields() {
        let client = Arc::new(RecordingClient::new(200, b"PNGDATA".to_vec()));
        let handler = GenerationsHandler::new(client.clone());

        let request = GenerationsRequest::new("a cat").with_style(GenerationsStyle::ImagineV1);
        let response = handler.call(&request).await.unwrap();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.data().unwrap().bytes(), b"PNGDATA");

        let call = client.last_call();
        assert_eq!(call.endpoint, "/generations");
        assert!(call.files.is_none());
        assert_eq!(call.parameters.len(), 2);
        assert_eq!(call.parameters["prompt"], ParamValue::Text("a cat".into()));
        assert_eq!(call.parameters["style_id"], ParamValue::Int(27));
    }

    #[tokio::test]
    async fn optional_fields_use_wire_names() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = GenerationsHandler::new(client.clone());

        let request = GenerationsRequest::new("a dog")
            .with_aspect_ratio(AspectRatio::SixteenNine)
            .with_neg_prompt("blurry")
            .with_cfg(7.5)
            .with_seed(42)
            .with_steps(30)
            .with_high_res_results(1);
        handler.call(&request).await.unwrap();

        let parameters = client.last_call().parameters;
        assert_eq!(parameters.len(), 8);
        assert_eq!(parameters["aspect_ratio"], ParamValue::Text("16:9".into()));
        assert_eq!(parameters["negative_prompt"], ParamValue::Text("blurry".into()));
        assert_eq!(parameters["cfg"], ParamValue::Float(7.5));
        assert_eq!(parameters["seed"], ParamValue::Int(42));
        assert_eq!(parameters["steps"], ParamValue::Int(30));
        assert_eq!(parameters["high_res_results"], ParamValue::Int(1));
    }

    #[tokio::test]
    async fn missing_prompt_never_reaches_transport() {
        let client = Arc::new(RecordingClient::new(200, Vec::new()));
        let handler = GenerationsHandler::new(client.clone());

        let err = handler.call(&GenerationsRequest::default()).await.unwrap_err();

        assert!(matches!(err, ImagineError::MissingParameters(names) if names == vec!["prompt"]));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn non_ok_status_yields_empty_envelope() {
        let client = Arc::new(RecordingClient::new(429, b"slow down".to_vec()));
        let handler = GenerationsHandler::new(client);

        let response = handler.call(&GenerationsRequest::new("a cat")).await.unwrap();

        assert_eq!(response.status(), Status::TooManyRequests);
        assert!(response.data().is_none());
    }

    #[tokio::test]
    async fn unknown_status_is_preserved() {
        let client = Arc::new(RecordingClient::new(404, Vec::new()));
        let handler = GenerationsHandler::new(client);

        let response = handler.call(&GenerationsRequest::new("a cat")).await.unwrap();

        assert_eq!(response.status().code(), 404);
        assert!(response.into_data().is_none());
    }
}
