//! Data transfer objects shared by the HTTP API.
//!
//! These are the wire representations returned by the controllers. Each DTO is a
//! fixed projection of a stored entity and is documented in the OpenAPI schema.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
