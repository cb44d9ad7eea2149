//! Planet and People fixture utilities.

pub mod data;
pub mod factory;
