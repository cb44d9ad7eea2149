//! User and favorite edge fixture utilities.
//!
//! Provides methods for inserting users and their favorite planet/person edges, plus
//! factory functions for creating in-memory model instances.

pub mod data;
pub mod factory;
