//! Error types for the holonet server.
//!
//! This module provides the typed error model for every request path. Errors are grouped
//! by domain (malformed requests, missing resources) and all of them
//! implement `IntoResponse`, so handlers can return `Result<_, Error>` and have the
//! status code and JSON body chosen at the HTTP boundary only.

pub mod config;
pub mod not_found;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{not_found::NotFoundError, request::RequestError},
};

/// Main error type for the holonet server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow propagation with `?` from repositories and services.
///
/// # Error Categories
/// - Request errors (missing or malformed input, 400)
/// - Not found errors (missing users, planets, people or favorites, 404)
/// - Everything else (database and I/O failures, 500)
#[derive(Error, Debug)]
pub enum Error {
    /// The request is missing required input or could not be parsed.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// A referenced entity or favorite does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For missing or malformed request input
/// - 404 Not Found - For missing users, planets, people or favorites
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RequestError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message, so database
/// details and internal state never reach the response body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
