//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so
//! signatures don't need to reach into the generated `entity` crate directly.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Opaque credential string, never serialized
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
///
/// All descriptive fields (`diameter`, `gravity`, `population`, ...) are stored as
/// free text and passed through without parsing.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the people database model.
///
/// `homeworld_id` is an optional foreign key to a planet.
pub type PeopleModel = entity::people::Model;

/// Type alias for a user's favorite planet edge, keyed by `(user_id, planet_id)`.
pub type FavoritePlanetModel = entity::user_favorite_planet::Model;

/// Type alias for a user's favorite person edge, keyed by `(user_id, people_id)`.
pub type FavoritePeopleModel = entity::user_favorite_people::Model;
