//! REST backend exposing the People and Planets reference datasets and letting
//! users mark favorites among them.

pub mod model;
pub mod server;
