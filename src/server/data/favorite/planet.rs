use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::server::model::db::{FavoritePlanetModel, PlanetModel};

/// Queries against the user → planet favorite edges.
pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the favorite edge for the user & planet pair, if it exists
    pub async fn get(&self, user_id: i32, planet_id: i32) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::UserFavoritePlanet::find_by_id((user_id, planet_id))
            .one(self.db)
            .await
    }

    /// Creates a favorite edge for the user & planet pair
    ///
    /// Fails with a unique constraint violation if the edge already exists, see
    /// [`super::is_unique_violation`].
    pub async fn create(&self, user_id: i32, planet_id: i32) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::user_favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite edge for the user & planet pair
    ///
    /// Returns OK regardless of the edge existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavoritePlanet::delete_by_id((user_id, planet_id))
            .exec(self.db)
            .await
    }

    /// Gets the planets favorited by the provided user ID
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        let favorites = entity::prelude::UserFavoritePlanet::find()
            .filter(entity::user_favorite_planet::Column::UserId.eq(user_id))
            .find_also_related(entity::planet::Entity)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, planet)| planet)
            .collect())
    }
}
