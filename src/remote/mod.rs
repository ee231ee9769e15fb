pub mod multipart;
pub mod request_client;
pub mod rest_client;

use std::collections::BTreeMap;

use crate::{error::Result, models::Parameters};
use async_trait::async_trait;

pub use multipart::{Multipart, MultipartPart};
pub use request_client::RequestClient;
pub use rest_client::RestClient;

/// Named binary payloads sent as file parts.
pub type Files = BTreeMap<String, Vec<u8>>;

pub type Headers = BTreeMap<String, String>;

/// HTTP transport used by every operation. Implement this to route requests
/// through your own client, proxy or test double.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Posts `parameters` and `files` as multipart/form-data to `endpoint`
    /// and returns the status code with the raw response body.
    async fn post(
        &self,
        endpoint: &str,
        parameters: Parameters,
        files: Option<Files>,
        headers: Option<Headers>,
    ) -> Result<(u16, Vec<u8>)>;
}
