use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorite::FavoritesDto, user::UserDto},
    server::{
        controller::util::{current_user::get_current_user, path::ResourceId},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

/// OpenAPI tag for these routes
pub static USER_TAG: &str = "user";

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving all users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ResourceId(user_id): ResourceId,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        return Err(NotFoundError::User(user_id).into());
    };

    Ok((StatusCode::OK, Json(user)))
}

/// Get the favorite people and planets of the current user
///
/// The current user is the first stored user until authentication exists.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;
    let favorites = FavoriteService::new(&state.db).get_favorites(user.id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}
