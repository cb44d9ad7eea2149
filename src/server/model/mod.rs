//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and the
//! type aliases for the SeaORM entity models used across repositories and services.

pub mod app;
pub mod db;
