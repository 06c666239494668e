use crate::dtos::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const MALFORMED_INPUT_MESSAGE: &str = "Invalid JSON format in the request body";
pub const INVALID_ARGUMENTS_MESSAGE: &str = "Please provide valid numbers in the request body.";
pub const COMPUTATION_ERROR_MESSAGE: &str = "Internal Server Error";

/// Ways a calculation request can fail.
///
/// The carried string is diagnostic detail for logs only; clients receive
/// [`ApiError::public_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("computation failed: {0}")]
    ComputationError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::InvalidArguments(_) => StatusCode::BAD_REQUEST,
            Self::ComputationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => MALFORMED_INPUT_MESSAGE,
            Self::InvalidArguments(_) => INVALID_ARGUMENTS_MESSAGE,
            Self::ComputationError(_) => COMPUTATION_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
