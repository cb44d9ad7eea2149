//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors so each test checks status codes
//! and response bodies without going through routing.

mod favorite;
mod people;
mod planet;
mod user;

use holonet_test_utils::prelude::*;

use crate::util::body_json;
