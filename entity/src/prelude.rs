pub use super::people::Entity as People;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::user_favorite_people::Entity as UserFavoritePeople;
pub use super::user_favorite_planet::Entity as UserFavoritePlanet;
