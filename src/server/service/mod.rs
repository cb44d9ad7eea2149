//! Service layer for business logic.
//!
//! Services sit between controllers and repositories: they project stored entities to
//! their wire DTOs and enforce the favorites rules (existence checks, one edge per
//! user & target pair, single-statement writes).

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
