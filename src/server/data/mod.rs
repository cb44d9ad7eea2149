//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for each relation. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository runs against a pooled connection
//! or against a transaction.
//! Lookups return `Ok(None)` for missing rows rather than an error.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
