use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// A referenced resource or route that does not exist, answered with 404.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("User ID {0} not found in database")]
    User(i32),
    /// No user is stored, so there is nobody to act as the current user
    #[error("No user exists in database to act as the current user")]
    CurrentUser,
    #[error("Planet ID {0} not found in database")]
    Planet(i32),
    #[error("Person ID {0} not found in database")]
    Person(i32),
    /// The person named by an add-favorite request does not exist
    #[error("Person ID {0} to favorite not found in database")]
    PersonToFavorite(i32),
    #[error("Planet ID {planet_id} is not a favorite of user ID {user_id}")]
    FavoritePlanet { user_id: i32, planet_id: i32 },
    #[error("Person ID {people_id} is not a favorite of user ID {user_id}")]
    FavoritePerson { user_id: i32, people_id: i32 },
    #[error("No route matches {0}")]
    Route(String),
}

impl NotFoundError {
    /// Message returned to the client, naming only the kind of resource
    fn client_message(&self) -> &'static str {
        match self {
            Self::User(_) | Self::CurrentUser => "User not found",
            Self::Planet(_) => "Planet not found",
            Self::Person(_) => "Person not found",
            Self::PersonToFavorite(_) => "People not found",
            Self::FavoritePlanet { .. } => "Favorite planet not found",
            Self::FavoritePerson { .. } => "Favorite person not found",
            Self::Route(_) => "Not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::NOT_FOUND, self.client_message())
    }
}
