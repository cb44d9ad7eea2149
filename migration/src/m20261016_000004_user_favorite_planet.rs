use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261016_000001_planet::Planet, m20261016_000003_user::User};

static FK_USER_FAVORITE_PLANETS_USER_ID: &str = "fk-user_favorite_planets-user_id";
static FK_USER_FAVORITE_PLANETS_PLANET_ID: &str = "fk-user_favorite_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePlanet::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePlanet::UserId))
                    .col(integer(UserFavoritePlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoritePlanet::UserId)
                            .col(UserFavoritePlanet::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PLANETS_USER_ID)
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PLANETS_PLANET_ID)
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoritePlanet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoritePlanet {
    #[sea_orm(iden = "user_favorite_planets")]
    Table,
    UserId,
    PlanetId,
}
