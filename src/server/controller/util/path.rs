use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{request::RequestError, Error};

/// Integer resource ID taken from the request path.
///
/// Wraps [`Path`] so a non-numeric ID is answered with the same JSON error body as every
/// other error instead of axum's plain-text rejection.
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| RequestError::InvalidPath(rejection.body_text()))?;

        Ok(Self(id))
    }
}
