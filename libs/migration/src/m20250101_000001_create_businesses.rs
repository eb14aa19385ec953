use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000000_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One business per user: owner_id is unique. No ON DELETE CASCADE.
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(pk_uuid(Businesses::Id))
                    .col(string_len(Businesses::BusinessName, 20))
                    .col(string_len(Businesses::City, 100).default("Unspecified"))
                    .col(string_len(Businesses::Region, 100).default("Unspecified"))
                    .col(text_null(Businesses::BusinessDescription))
                    .col(string_len(Businesses::Logo, 200).default("default.jpg"))
                    .col(uuid_uniq(Businesses::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_businesses_owner_id")
                            .from(Businesses::Table, Businesses::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Businesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    Id,
    BusinessName,
    City,
    Region,
    BusinessDescription,
    Logo,
    OwnerId,
}
