//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holonet crate to keep fixture signatures
//! consistent with the code under test.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the people database model.
pub type PeopleModel = entity::people::Model;

/// Type alias for a user's favorite planet edge.
pub type FavoritePlanetModel = entity::user_favorite_planet::Model;

/// Type alias for a user's favorite person edge.
pub type FavoritePeopleModel = entity::user_favorite_people::Model;
