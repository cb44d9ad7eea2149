use sea_orm::DatabaseConnection;

use crate::{
    model::people::PeopleDto,
    server::{data::people::PeopleRepository, error::Error, model::db::PeopleModel},
};

impl From<PeopleModel> for PeopleDto {
    fn from(person: PeopleModel) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            mass: person.mass,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
            gender: person.gender,
            // Projected as the raw foreign key, not an expanded planet
            homeworld: person.homeworld_id,
        }
    }
}

/// Read access to people.
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    /// Creates a new instance of [`PeopleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every person ordered by ID.
    pub async fn get_all_people(&self) -> Result<Vec<PeopleDto>, Error> {
        let people = PeopleRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PeopleDto::from).collect())
    }

    /// Retrieves a single person.
    ///
    /// # Returns
    /// - `Ok(Some(PeopleDto))` - Person found
    /// - `Ok(None)` - No person with the provided ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_person(&self, people_id: i32) -> Result<Option<PeopleDto>, Error> {
        let person = PeopleRepository::new(self.db).get_by_id(people_id).await?;

        Ok(person.map(PeopleDto::from))
    }
}
