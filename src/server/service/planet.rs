use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{data::planet::PlanetRepository, error::Error, model::db::PlanetModel},
};

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

/// Read access to planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet ordered by ID.
    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet.
    ///
    /// # Returns
    /// - `Ok(Some(PlanetDto))` - Planet found
    /// - `Ok(None)` - No planet with the provided ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }
}
