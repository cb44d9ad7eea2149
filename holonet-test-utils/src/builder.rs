//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together,
//! with all operations queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Rows are inserted in a fixed order during `build()`: users, planets, people, then
/// favorites. Every table starts empty, so the Nth queued row of a kind receives ID N.
pub struct TestBuilder {
    // Database setup
    on_disk: bool,
    include_holonet_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,                  // email
    planets: Vec<String>,                // name
    people: Vec<(String, Option<i32>)>,  // (name, homeworld_id)
    favorite_planets: Vec<(i32, i32)>,   // (user_id, planet_id)
    favorite_people: Vec<(i32, i32)>,    // (user_id, people_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an in-memory builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            on_disk: false,
            include_holonet_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            people: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_people: Vec::new(),
        }
    }

    /// Add every holonet table to the test database.
    ///
    /// Creates Planet, People, User, UserFavoritePlanet and UserFavoritePeople in
    /// dependency order.
    pub fn with_holonet_tables(mut self) -> Self {
        self.include_holonet_tables = true;
        self
    }

    /// Back the test database with a temporary SQLite file instead of memory.
    ///
    /// The in-memory database is limited to a single connection, which serializes every
    /// query. A file allows a pool of connections, so concurrent requests really overlap.
    /// The file is removed when the [`TestContext`] is dropped.
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Insert a mock user with the provided email.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a mock planet with the provided name.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a mock person with the provided name and optional homeworld planet ID.
    pub fn with_person(mut self, name: &str, homeworld_id: Option<i32>) -> Self {
        self.people.push((name.to_string(), homeworld_id));
        self
    }

    /// Mark a planet as a favorite of a user.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Mark a person as a favorite of a user.
    pub fn with_favorite_people(mut self, user_id: i32, people_id: i32) -> Self {
        self.favorite_people.push((user_id, people_id));
        self
    }

    /// Build the test context, creating tables and inserting all queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk().await?
        } else {
            TestContext::new().await?
        };

        // 1. Create tables
        if self.include_holonet_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup.with_tables(vec![
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::UserFavoritePlanet),
                schema.create_table_from_entity(entity::prelude::UserFavoritePeople),
            ])
            .await?;
        }

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_mock_user(&email).await?;
        }

        for name in self.planets {
            setup.catalog().insert_mock_planet(&name).await?;
        }

        for (name, homeworld_id) in self.people {
            setup
                .catalog()
                .insert_mock_person(&name, homeworld_id)
                .await?;
        }

        for (user_id, planet_id) in self.favorite_planets {
            setup
                .user()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, people_id) in self.favorite_people {
            setup
                .user()
                .insert_favorite_people(user_id, people_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
