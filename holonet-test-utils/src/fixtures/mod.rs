//! Test fixture modules for database row creation.
//!
//! Each submodule provides fixtures for one area of the schema:
//!
//! - `catalog` - Planet and People reference records
//! - `user` - Users and their favorite edges

pub mod catalog;
pub mod user;
