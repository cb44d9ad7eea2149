//! Repositories for the user favorite join relations.
//!
//! Each relation is keyed by the `(user_id, target_id)` pair, so at most one edge can
//! exist per pair. Edges are only ever inserted or deleted, never updated.

pub mod people;
pub mod planet;

use sea_orm::{DbErr, SqlErr};

/// Returns true when the error is the store rejecting a duplicate key.
///
/// Two concurrent adds for the same pair can both pass the existence check; the
/// losing insert surfaces here.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true when the error is the store rejecting an edge whose user or target row
/// does not exist.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
