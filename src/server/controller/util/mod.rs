//! Utility functions and extractors shared by controllers.
//!
//! Includes the path ID extractor, the current-user stand-in used by endpoints that
//! don't receive a user ID, and the fallback for unmatched routes.

pub mod current_user;
pub mod not_found;
pub mod path;
