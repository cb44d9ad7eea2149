use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::server::model::db::{FavoritePeopleModel, PeopleModel};

/// Queries against the user → person favorite edges.
pub struct FavoritePeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePeopleRepository<'a, C> {
    /// Creates a new instance of [`FavoritePeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the favorite edge for the user & people pair, if it exists
    pub async fn get(&self, user_id: i32, people_id: i32) -> Result<Option<FavoritePeopleModel>, DbErr> {
        entity::prelude::UserFavoritePeople::find_by_id((user_id, people_id))
            .one(self.db)
            .await
    }

    /// Creates a favorite edge for the user & people pair
    ///
    /// Fails with a unique constraint violation if the edge already exists, see
    /// [`super::is_unique_violation`].
    pub async fn create(&self, user_id: i32, people_id: i32) -> Result<FavoritePeopleModel, DbErr> {
        let favorite = entity::user_favorite_people::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(people_id),
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite edge for the user & people pair
    ///
    /// Returns OK regardless of the edge existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, people_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavoritePeople::delete_by_id((user_id, people_id))
            .exec(self.db)
            .await
    }

    /// Gets the people favorited by the provided user ID
    pub async fn get_people_by_user_id(&self, user_id: i32) -> Result<Vec<PeopleModel>, DbErr> {
        let favorites = entity::prelude::UserFavoritePeople::find()
            .filter(entity::user_favorite_people::Column::UserId.eq(user_id))
            .find_also_related(entity::people::Entity)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, person)| person)
            .collect())
    }
}
