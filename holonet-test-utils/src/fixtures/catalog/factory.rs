//! Factory functions for generating mock Planet and People database models.

use crate::model::{PeopleModel, PlanetModel};

/// Create a mock planet database model with standard attribute values.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        diameter: "10465".to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "304".to_string(),
        gravity: "1 standard".to_string(),
        population: "200000".to_string(),
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
        surface_water: "1".to_string(),
    }
}

/// Create a mock person database model with standard attribute values.
///
/// # Arguments
/// - `id` - The person's primary key
/// - `name` - The person's name
/// - `homeworld_id` - Optional planet ID of the person's homeworld
pub fn mock_people_model(id: i32, name: &str, homeworld_id: Option<i32>) -> PeopleModel {
    PeopleModel {
        id,
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        homeworld_id,
    }
}
