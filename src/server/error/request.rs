use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Request input that is missing or could not be parsed, answered with 400.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request body is missing the user_id field or is not valid JSON")]
    MissingUserId,
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingUserId => error_response(
                StatusCode::BAD_REQUEST,
                "user_id is required in request body",
            ),
            Self::InvalidPath(reason) => error_response(StatusCode::BAD_REQUEST, &reason),
        }
    }
}
