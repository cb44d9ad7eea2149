use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        controller::util::path::ResourceId,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for these routes
pub static PLANET_TAG: &str = "planet";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving all planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ResourceId(planet_id): ResourceId,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetService::new(&state.db).get_planet(planet_id).await? else {
        return Err(NotFoundError::Planet(planet_id).into());
    };

    Ok((StatusCode::OK, Json(planet)))
}
