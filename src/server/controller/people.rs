use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, people::PeopleDto},
    server::{
        controller::util::path::ResourceId,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::people::PeopleService,
    },
};

/// OpenAPI tag for these routes
pub static PEOPLE_TAG: &str = "people";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving all people", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PeopleService::new(&state.db).get_all_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PeopleDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    ResourceId(people_id): ResourceId,
) -> Result<impl IntoResponse, Error> {
    let Some(person) = PeopleService::new(&state.db).get_person(people_id).await? else {
        return Err(NotFoundError::Person(people_id).into());
    };

    Ok((StatusCode::OK, Json(person)))
}
