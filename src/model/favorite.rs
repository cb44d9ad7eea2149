use serde::{Deserialize, Serialize};

use crate::model::{people::PeopleDto, planet::PlanetDto, user::UserDto};

/// Request body for adding a favorite
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteDto {
    /// ID of the user marking the favorite
    pub user_id: Option<i32>,
}

/// All favorites of a single user
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    pub favorite_people: Vec<PeopleDto>,
    pub favorite_planets: Vec<PlanetDto>,
}

/// The response when a planet was newly added to a user's favorites
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetAddedDto {
    pub message: String,
    pub planet: PlanetDto,
    pub user: UserDto,
}

/// The response when a person was newly added to a user's favorites
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePeopleAddedDto {
    pub message: String,
    pub people: PeopleDto,
    pub user: UserDto,
}
