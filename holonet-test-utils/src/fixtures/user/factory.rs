//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions and projections.

use crate::model::UserModel;

/// Create a mock active user database model for testing.
///
/// # Arguments
/// - `id` - The user's primary key
/// - `email` - The user's email address
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: "password".to_string(),
        is_active: true,
    }
}
