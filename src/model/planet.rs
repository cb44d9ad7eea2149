use serde::{Deserialize, Serialize};

/// A planet with its physical attributes as stored, without unit parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub gravity: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
    pub surface_water: String,
}
