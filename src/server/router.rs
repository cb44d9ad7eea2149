//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa so the generated OpenAPI document always
//! matches the served routes. Swagger UI is served at `/docs` and the root path lists
//! the documented endpoints.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{
        controller::{self, util::not_found::route_not_found},
        model::app::AppState,
    },
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /people`, `GET /people/{id}` - Browse characters
/// - `GET /planets`, `GET /planets/{id}` - Browse planets
/// - `GET /users`, `GET /users/{id}` - Browse users
/// - `GET /users/favorites` - Favorites of the current user
/// - `POST /favorite/planet/{planet_id}`, `DELETE /favorite/planet/{planet_id}`
/// - `POST /favorite/people/{people_id}`, `DELETE /favorite/people/{people_id}`
/// - `GET /` - Sitemap of the endpoints above
///
/// The OpenAPI specification is available at `/docs/openapi.json`. Unmatched requests get
/// a JSON 404 body like every other error.
///
/// # Returns
/// A `Router<AppState>` that still needs its state applied.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "People API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::get_all_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_people,
            controller::favorite::delete_favorite_people
        ))
        .split_for_parts();

    let endpoints: Vec<String> = api.paths.paths.keys().cloned().collect();

    routes
        .route(
            "/",
            get(move || {
                let endpoints = endpoints.clone();
                async move { Json(SitemapDto { endpoints }) }
            }),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .fallback(route_not_found)
}
