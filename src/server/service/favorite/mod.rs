//! Favorites service.
//!
//! Maintains the user → planet and user → person favorite edges. At most one edge
//! exists per user & target pair: adding an existing favorite succeeds without writing,
//! and removing a missing one is reported as not found. Each write is a single INSERT
//! or DELETE statement, so a failure leaves no partial state. Existence checks run
//! before the write on the pooled connection; the write itself never follows a read in
//! the same transaction, which SQLite would reject with `SQLITE_BUSY` once a concurrent
//! writer commits first.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{favorite::FavoritesDto, people::PeopleDto, planet::PlanetDto, user::UserDto},
    server::{
        data::{
            favorite::{
                is_foreign_key_violation, is_unique_violation, people::FavoritePeopleRepository,
                planet::FavoritePlanetRepository,
            },
            people::PeopleRepository,
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{not_found::NotFoundError, Error},
    },
};

/// Result of adding a favorite.
#[derive(Debug)]
pub enum AddFavoriteOutcome<T> {
    /// A new edge was stored
    Added {
        /// The favorited planet or person
        target: T,
        /// The user the edge belongs to
        user: UserDto,
    },
    /// The edge already existed, nothing was written
    AlreadyFavorite,
}

/// Service for adding, removing and listing a user's favorites.
///
/// Every operation takes an explicit user ID; resolving who the caller is happens at
/// the HTTP boundary.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `planet_id` - ID of the planet to favorite
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome::Added)` - Edge created
    /// - `Ok(AddFavoriteOutcome::AlreadyFavorite)` - Edge already existed, including when a
    ///   concurrent request inserted it first
    /// - `Err(Error::NotFoundError)` - User or planet does not exist, including when one
    ///   was deleted between the checks and the insert
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<AddFavoriteOutcome<PlanetDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(NotFoundError::User(user_id).into());
        };
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(planet_id).await? else {
            return Err(NotFoundError::Planet(planet_id).into());
        };

        let favorite_repo = FavoritePlanetRepository::new(self.db);
        if favorite_repo.get(user_id, planet_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        match classify_insert(favorite_repo.create(user_id, planet_id).await)? {
            EdgeInsert::Created => {}
            EdgeInsert::Duplicate => {
                tracing::debug!(
                    user_id = %user_id,
                    planet_id = %planet_id,
                    "Favorite planet inserted concurrently by another request"
                );

                return Ok(AddFavoriteOutcome::AlreadyFavorite);
            }
            EdgeInsert::MissingReference => {
                if user_repo.get_by_id(user_id).await?.is_none() {
                    return Err(NotFoundError::User(user_id).into());
                }

                return Err(NotFoundError::Planet(planet_id).into());
            }
        }

        tracing::info!(user_id = %user_id, planet_id = %planet_id, "Added favorite planet");

        Ok(AddFavoriteOutcome::Added {
            target: planet.into(),
            user: user.into(),
        })
    }

    /// Marks a person as a favorite of a user.
    ///
    /// Same semantics as [`FavoriteService::add_favorite_planet`] with a person as target.
    pub async fn add_favorite_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<AddFavoriteOutcome<PeopleDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(NotFoundError::User(user_id).into());
        };
        let Some(person) = PeopleRepository::new(self.db).get_by_id(people_id).await? else {
            return Err(NotFoundError::PersonToFavorite(people_id).into());
        };

        let favorite_repo = FavoritePeopleRepository::new(self.db);
        if favorite_repo.get(user_id, people_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        match classify_insert(favorite_repo.create(user_id, people_id).await)? {
            EdgeInsert::Created => {}
            EdgeInsert::Duplicate => {
                tracing::debug!(
                    user_id = %user_id,
                    people_id = %people_id,
                    "Favorite person inserted concurrently by another request"
                );

                return Ok(AddFavoriteOutcome::AlreadyFavorite);
            }
            EdgeInsert::MissingReference => {
                if user_repo.get_by_id(user_id).await?.is_none() {
                    return Err(NotFoundError::User(user_id).into());
                }

                return Err(NotFoundError::PersonToFavorite(people_id).into());
            }
        }

        tracing::info!(user_id = %user_id, people_id = %people_id, "Added favorite person");

        Ok(AddFavoriteOutcome::Added {
            target: person.into(),
            user: user.into(),
        })
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Edge deleted
    /// - `Err(Error::NotFoundError)` - User does not exist or the planet is not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        let result = FavoritePlanetRepository::new(self.db)
            .delete(user_id, planet_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(NotFoundError::FavoritePlanet { user_id, planet_id }.into());
        }

        tracing::info!(user_id = %user_id, planet_id = %planet_id, "Removed favorite planet");

        Ok(())
    }

    /// Removes a person from a user's favorites.
    ///
    /// Same semantics as [`FavoriteService::remove_favorite_planet`] with a person as target.
    pub async fn remove_favorite_people(&self, user_id: i32, people_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        let result = FavoritePeopleRepository::new(self.db)
            .delete(user_id, people_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(NotFoundError::FavoritePerson { user_id, people_id }.into());
        }

        tracing::info!(user_id = %user_id, people_id = %people_id, "Removed favorite person");

        Ok(())
    }

    /// Lists the people and planets a user has favorited.
    ///
    /// # Returns
    /// - `Ok(FavoritesDto)` - Favorites in the order the store returns them
    /// - `Err(Error::NotFoundError)` - User does not exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<FavoritesDto, Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        let favorite_people = FavoritePeopleRepository::new(self.db)
            .get_people_by_user_id(user_id)
            .await?;
        let favorite_planets = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user_id(user_id)
            .await?;

        Ok(FavoritesDto {
            favorite_people: favorite_people.into_iter().map(PeopleDto::from).collect(),
            favorite_planets: favorite_planets.into_iter().map(PlanetDto::from).collect(),
        })
    }
}

/// How the store answered an edge insert.
#[derive(Debug, PartialEq)]
enum EdgeInsert {
    /// A new edge was stored
    Created,
    /// The edge already exists
    Duplicate,
    /// The user or target row no longer exists
    MissingReference,
}

/// Classifies an edge insert result.
///
/// A unique constraint violation means a concurrent request stored the edge first. A
/// foreign key violation means the user or target was deleted after the existence
/// checks. Any other database error is returned unchanged.
fn classify_insert<M>(result: Result<M, DbErr>) -> Result<EdgeInsert, DbErr> {
    match result {
        Ok(_) => Ok(EdgeInsert::Created),
        Err(err) if is_unique_violation(&err) => Ok(EdgeInsert::Duplicate),
        Err(err) if is_foreign_key_violation(&err) => Ok(EdgeInsert::MissingReference),
        Err(err) => Err(err),
    }
}
