use axum::http::Uri;

use crate::server::error::{not_found::NotFoundError, Error};

/// Fallback handler for requests that match no route.
pub async fn route_not_found(uri: Uri) -> Error {
    Error::NotFoundError(NotFoundError::Route(uri.path().to_string()))
}
