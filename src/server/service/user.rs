use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error, model::db::UserModel},
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Service for user account lookups.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by ID, without passwords.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves the user that stands in for the caller while there is no authentication.
    ///
    /// This is the first user in storage order (lowest ID).
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - At least one user exists
    /// - `Ok(None)` - No users are stored
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_current_user(&self) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_first().await?;

        Ok(user.map(UserDto::from))
    }
}
