//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, HTTP routing and
//! controllers, the favorites and catalog services, and the repositories that read and
//! write the People, Planets, Users and favorite relations through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
