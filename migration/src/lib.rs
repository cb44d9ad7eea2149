pub use sea_orm_migration::prelude::*;

mod m20261016_000001_planet;
mod m20261016_000002_people;
mod m20261016_000003_user;
mod m20261016_000004_user_favorite_planet;
mod m20261016_000005_user_favorite_people;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_planet::Migration),
            Box::new(m20261016_000002_people::Migration),
            Box::new(m20261016_000003_user::Migration),
            Box::new(m20261016_000004_user_favorite_planet::Migration),
            Box::new(m20261016_000005_user_favorite_people::Migration),
        ]
    }
}
