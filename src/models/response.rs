use crate::{
    error::{ImagineError, Result},
    models::Status,
};

/// Uniform result of every API call: the payload when the server answered
/// 200, otherwise only the status.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    data: Option<T>,
    status: Status,
}

impl<T> Response<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: Status::Ok,
        }
    }

    /// A response without payload. Passing `Status::Ok` here is a logic error;
    /// the envelope never claims success without data.
    pub fn failure(status: impl Into<Status>) -> Self {
        let status = status.into();
        debug_assert!(!status.is_ok(), "failure envelope built with OK status");
        Self { data: None, status }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn get_or_throw(self) -> Result<T> {
        let status = self.status;
        self.data.ok_or(ImagineError::MissingData(status))
    }

    pub fn get_or_else(self, default: T) -> T {
        self.data.unwrap_or(default)
    }
}
