use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_uniq(Planet::Name, 120))
                    .col(string_len(Planet::Diameter, 20))
                    .col(string_len(Planet::RotationPeriod, 20))
                    .col(string_len(Planet::OrbitalPeriod, 20))
                    .col(string_len(Planet::Gravity, 10))
                    .col(string_len(Planet::Population, 30))
                    .col(string_len(Planet::Climate, 50))
                    .col(string_len(Planet::Terrain, 50))
                    .col(string_len(Planet::SurfaceWater, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    #[sea_orm(iden = "planets")]
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
}
