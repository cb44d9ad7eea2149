//! Test utilities for holonet.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixture
//! rows a test needs, and `build()` returns a [`TestContext`] backed by an in-memory
//! SQLite database with everything inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{catalog::factory as catalog_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}
