//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use holonet::server::{model::app::AppState, startup::build_router};
use holonet_test_utils::TestContext;

/// Reads a response body and parses it as JSON.
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Extension methods on [`TestContext`] for driving the full application router.
pub trait TestContextExt {
    /// Builds the application router backed by the test database.
    fn router(&self) -> axum::Router;
}

impl TestContextExt for TestContext {
    fn router(&self) -> axum::Router {
        build_router(self.to_app_state::<AppState>())
    }
}
