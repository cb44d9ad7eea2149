//! Database fixtures for planets and people.
//!
//! Inserted rows carry the same attribute values as the in-memory models from
//! [`super::factory`], so tests can compare against either.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::catalog::factory::{mock_people_model, mock_planet_model},
    model::{PeopleModel, PlanetModel},
    TestContext,
};

impl TestContext {
    /// Access planet & people fixture helpers.
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = mock_planet_model(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                diameter: ActiveValue::Set(planet.diameter),
                rotation_period: ActiveValue::Set(planet.rotation_period),
                orbital_period: ActiveValue::Set(planet.orbital_period),
                gravity: ActiveValue::Set(planet.gravity),
                population: ActiveValue::Set(planet.population),
                climate: ActiveValue::Set(planet.climate),
                terrain: ActiveValue::Set(planet.terrain),
                surface_water: ActiveValue::Set(planet.surface_water),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a person, optionally linked to an existing planet as homeworld.
    pub async fn insert_mock_person(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<PeopleModel, TestError> {
        let person = mock_people_model(0, name, homeworld_id);

        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(person.name),
                height: ActiveValue::Set(person.height),
                mass: ActiveValue::Set(person.mass),
                hair_color: ActiveValue::Set(person.hair_color),
                skin_color: ActiveValue::Set(person.skin_color),
                eye_color: ActiveValue::Set(person.eye_color),
                birth_year: ActiveValue::Set(person.birth_year),
                gender: ActiveValue::Set(person.gender),
                homeworld_id: ActiveValue::Set(person.homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
