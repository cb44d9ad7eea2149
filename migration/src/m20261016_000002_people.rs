use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_planet::Planet;

static IDX_PEOPLE_HOMEWORLD_ID: &str = "idx-people-homeworld_id";
static FK_PEOPLE_HOMEWORLD_ID: &str = "fk-people-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len_uniq(People::Name, 120))
                    .col(string_len(People::Height, 10))
                    .col(string_len(People::Mass, 10))
                    .col(string_len(People::HairColor, 10))
                    .col(string_len(People::SkinColor, 10))
                    .col(string_len(People::EyeColor, 10))
                    .col(string_len(People::BirthYear, 10))
                    .col(string_len(People::Gender, 10))
                    .col(integer_null(People::HomeworldId))
                    // Inline so the constraint also exists on SQLite, which cannot
                    // add foreign keys to an existing table
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_HOMEWORLD_ID)
                            .from(People::Table, People::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .col(People::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    HomeworldId,
}
