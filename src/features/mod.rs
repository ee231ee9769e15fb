pub mod generations;
pub mod guided;
pub mod inpainting;
pub mod remix;
pub mod super_resolution;
pub mod variations;

pub use generations::GenerationsHandler;
pub use guided::GuidedGenerationsHandler;
pub use inpainting::InPaintingHandler;
pub use remix::RemixHandler;
pub use super_resolution::SuperResolutionHandler;
pub use variations::VariationsHandler;

use uuid::Uuid;

use crate::{
    error::Result,
    logger::Timer,
    models::{Image, ImageSource, Parameters, Response, Status},
    remote::{Files, HttpClient},
};

/// Reads every input image. Nothing is sent if one of them fails.
pub(crate) async fn load_files(sources: &[(&'static str, &ImageSource)]) -> Result<Files> {
    let mut files = Files::new();
    for (name, source) in sources {
        files.insert(name.to_string(), source.load().await?);
    }
    Ok(files)
}

/// Sends one request and wraps the outcome. Only a 200 carries an image.
pub(crate) async fn dispatch(
    client: &dyn HttpClient,
    endpoint: &'static str,
    parameters: Parameters,
    files: Option<Files>,
) -> Result<Response<Image>> {
    let request_id = Uuid::new_v4();
    log::debug!(
        "[req:{}] POST {} fields={:?} files={:?}",
        request_id,
        endpoint,
        parameters.keys().collect::<Vec<_>>(),
        files.as_ref().map(|f| f.keys().collect::<Vec<_>>()).unwrap_or_default()
    );

    let timer = Timer::new(endpoint);
    let (status_code, content) = client.post(endpoint, parameters, files, None).await?;
    let status = Status::from(status_code);

    if !status.is_ok() {
        log::warn!(
            "[req:{}] {} answered {} after {}ms",
            request_id,
            endpoint,
            status,
            timer.elapsed().as_millis()
        );
        if status == Status::ModuleNotFound {
            log::warn!("[req:{}] {}", request_id, String::from_utf8_lossy(&content));
        }
        return Ok(Response::failure(status));
    }

    log::info!(
        "[req:{}] {} returned {} bytes in {}ms",
        request_id,
        endpoint,
        content.len(),
        timer.elapsed().as_millis()
    );
    Ok(Response::success(Image::new(content)))
}
