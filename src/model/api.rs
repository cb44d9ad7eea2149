use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for requests that only report their outcome
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human-readable outcome
    pub message: String,
}

/// Every documented route served by the API
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    /// Route paths as documented in the OpenAPI spec
    pub endpoints: Vec<String>,
}
