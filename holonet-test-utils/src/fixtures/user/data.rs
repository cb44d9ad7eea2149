//! Database fixtures for users and favorite edges.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoritePeopleModel, FavoritePlanetModel, UserModel},
    TestContext,
};

impl TestContext {
    /// Access user fixture helpers.
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the provided email and a placeholder password.
    pub async fn insert_mock_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set("password".to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(entity::prelude::UserFavoritePlanet::insert(
            entity::user_favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<FavoritePeopleModel, TestError> {
        Ok(entity::prelude::UserFavoritePeople::insert(
            entity::user_favorite_people::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Count favorite planet edges stored for the user.
    pub async fn count_favorite_planets(&self, user_id: i32) -> Result<usize, TestError> {
        use sea_orm::{ColumnTrait, QueryFilter};

        Ok(entity::prelude::UserFavoritePlanet::find()
            .filter(entity::user_favorite_planet::Column::UserId.eq(user_id))
            .all(&self.setup.db)
            .await?
            .len())
    }
}
