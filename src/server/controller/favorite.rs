use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{AddFavoriteDto, FavoritePeopleAddedDto, FavoritePlanetAddedDto},
    },
    server::{
        controller::util::{current_user::get_current_user, path::ResourceId},
        error::{request::RequestError, Error},
        model::app::AppState,
        service::favorite::{AddFavoriteOutcome, FavoriteService},
    },
};

/// OpenAPI tag for these routes
pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
///
/// Adding a planet that is already a favorite succeeds with 200 and writes nothing.
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet to favorite")),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoritePlanetAddedDto),
        (status = 200, description = "Planet was already a favorite", body = MessageDto),
        (status = 400, description = "user_id missing from request body", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    ResourceId(planet_id): ResourceId,
    payload: Result<Json<AddFavoriteDto>, JsonRejection>,
) -> Result<Response, Error> {
    let user_id = require_user_id(payload)?;

    let outcome = FavoriteService::new(&state.db)
        .add_favorite_planet(user_id, planet_id)
        .await?;

    let response = match outcome {
        AddFavoriteOutcome::Added { target, user } => (
            StatusCode::CREATED,
            Json(FavoritePlanetAddedDto {
                message: "Planet added to favorites".to_string(),
                planet: target,
                user,
            }),
        )
            .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => {
            message_response(StatusCode::OK, "Planet already in favorites")
        }
    };

    Ok(response)
}

/// Add a person to a user's favorites
///
/// Adding a person who is already a favorite succeeds with 200 and writes nothing.
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the person to favorite")),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Person added to favorites", body = FavoritePeopleAddedDto),
        (status = 200, description = "Person was already a favorite", body = MessageDto),
        (status = 400, description = "user_id missing from request body", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    ResourceId(people_id): ResourceId,
    payload: Result<Json<AddFavoriteDto>, JsonRejection>,
) -> Result<Response, Error> {
    let user_id = require_user_id(payload)?;

    let outcome = FavoriteService::new(&state.db)
        .add_favorite_people(user_id, people_id)
        .await?;

    let response = match outcome {
        AddFavoriteOutcome::Added { target, user } => (
            StatusCode::CREATED,
            Json(FavoritePeopleAddedDto {
                message: "People added to favorites".to_string(),
                people: target,
                user,
            }),
        )
            .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => {
            message_response(StatusCode::OK, "People already in favorites")
        }
    };

    Ok(response)
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the favorite planet to remove")),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "User or favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    ResourceId(planet_id): ResourceId,
) -> Result<Response, Error> {
    let user = get_current_user(&state).await?;

    FavoriteService::new(&state.db)
        .remove_favorite_planet(user.id, planet_id)
        .await?;

    Ok(message_response(
        StatusCode::OK,
        "Planet removed from favorites successfully",
    ))
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the favorite person to remove")),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageDto),
        (status = 404, description = "User or favorite person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    ResourceId(people_id): ResourceId,
) -> Result<Response, Error> {
    let user = get_current_user(&state).await?;

    FavoriteService::new(&state.db)
        .remove_favorite_people(user.id, people_id)
        .await?;

    Ok(message_response(
        StatusCode::OK,
        "Person removed from favorites successfully",
    ))
}

/// Extracts the user ID from an add-favorite body.
///
/// An absent, malformed or non-JSON body is treated the same as a missing `user_id`.
fn require_user_id(payload: Result<Json<AddFavoriteDto>, JsonRejection>) -> Result<i32, RequestError> {
    match payload {
        Ok(Json(AddFavoriteDto {
            user_id: Some(user_id),
        })) => Ok(user_id),
        _ => Err(RequestError::MissingUserId),
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageDto {
            message: message.to_string(),
        }),
    )
        .into_response()
}
