use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a call, as reported by the server or synthesized locally.
///
/// `ModuleNotFound` never comes from the server: the default transport
/// reports it when its HTTP engine is unavailable. Codes outside the known
/// set are kept in `Unknown` so that the caller still sees what the server
/// sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum Status {
    Ok,
    BadRequest,
    Unauthorized,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
    NotEnoughTokens,
    ModuleNotFound,
    Unknown(u16),
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::UnprocessableEntity => 422,
            Status::TooManyRequests => 429,
            Status::InternalServerError => 500,
            Status::ServiceUnavailable => 503,
            Status::NotEnoughTokens => 424,
            Status::ModuleNotFound => 1000,
            Status::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "BAD_REQUEST",
            Status::Unauthorized => "UNAUTHORIZED",
            Status::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Status::TooManyRequests => "TOO_MANY_REQUESTS",
            Status::InternalServerError => "INTERNAL_SERVER_ERROR",
            Status::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Status::NotEnoughTokens => "NOT_ENOUGH_TOKENS",
            Status::ModuleNotFound => "MODULE_NOT_FOUND",
            Status::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        match code {
            200 => Status::Ok,
            400 => Status::BadRequest,
            401 => Status::Unauthorized,
            422 => Status::UnprocessableEntity,
            429 => Status::TooManyRequests,
            500 => Status::InternalServerError,
            503 => Status::ServiceUnavailable,
            424 => Status::NotEnoughTokens,
            1000 => Status::ModuleNotFound,
            other => Status::Unknown(other),
        }
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}
