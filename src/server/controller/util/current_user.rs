use crate::{
    model::user::UserDto,
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// Resolves the user acting on endpoints that don't receive a user ID.
///
/// There is no authentication yet, so the first stored user stands in for the caller.
/// This is a placeholder: once an auth layer exists the identity should come from the
/// session or token here, and the services already take an explicit user ID.
///
/// # Returns
/// - `Ok(UserDto)` - The stand-in current user
/// - `Err(Error::NotFoundError)` - No users are stored
/// - `Err(Error::DbErr)` - Database query failed
pub async fn get_current_user(state: &AppState) -> Result<UserDto, Error> {
    let Some(user) = UserService::new(&state.db).get_current_user().await? else {
        return Err(Error::NotFoundError(NotFoundError::CurrentUser));
    };

    Ok(user)
}
