//! HTTP controller endpoints for the holonet web API.
//!
//! Axum handlers for the People, Planets and Users read endpoints and the favorites
//! write endpoints. Controllers extract request input, call the services, and turn
//! results into responses; every handler returns `Result<_, Error>` so errors are mapped
//! to status codes in one place.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod util;
