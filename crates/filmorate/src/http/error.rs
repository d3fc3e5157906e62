//! HTTP adapter mapping for registry errors.
//!
//! Registry errors stay HTTP-agnostic; this module turns them into a status
//! code and a `{"code", "message"}` JSON body.

use crate::film_actor::FilmError;
use crate::user_actor::UserError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Machine-readable error category, serialized in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body is malformed or fails validation.
    InvalidRequest,
    /// The addressed entity does not exist.
    NotFound,
    /// A registry could not be reached.
    ServiceUnavailable,
}

/// Error payload returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl From<FilmError> for ApiError {
    fn from(err: FilmError) -> Self {
        let code = match &err {
            FilmError::Validation(_) => ErrorCode::InvalidRequest,
            FilmError::NotFound(_) => ErrorCode::NotFound,
            FilmError::ActorCommunication(_) => {
                error!(error = %err, "film registry unreachable");
                ErrorCode::ServiceUnavailable
            }
        };
        Self::new(code, err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let code = match &err {
            UserError::Validation(_) => ErrorCode::InvalidRequest,
            UserError::NotFound(_) => ErrorCode::NotFound,
            UserError::ActorCommunication(_) => {
                error!(error = %err, "user registry unreachable");
                ErrorCode::ServiceUnavailable
            }
        };
        Self::new(code, err.to_string())
    }
}

/// Reports an unreadable JSON body as `invalid_request`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    ApiError::invalid_request(err.to_string()).into()
}
