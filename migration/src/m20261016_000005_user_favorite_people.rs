use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261016_000002_people::People, m20261016_000003_user::User};

static FK_USER_FAVORITE_PEOPLE_USER_ID: &str = "fk-user_favorite_people-user_id";
static FK_USER_FAVORITE_PEOPLE_PEOPLE_ID: &str = "fk-user_favorite_people-people_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePeople::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePeople::UserId))
                    .col(integer(UserFavoritePeople::PeopleId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoritePeople::UserId)
                            .col(UserFavoritePeople::PeopleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PEOPLE_USER_ID)
                            .from(UserFavoritePeople::Table, UserFavoritePeople::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PEOPLE_PEOPLE_ID)
                            .from(UserFavoritePeople::Table, UserFavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoritePeople::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoritePeople {
    Table,
    UserId,
    PeopleId,
}
