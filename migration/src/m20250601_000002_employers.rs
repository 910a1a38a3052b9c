use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static FK_EMPLOYER_USER_ID: &str = "fk_employer_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The employer id is the owning user's id
        manager
            .create_table(
                Table::create()
                    .table(Employers::Table)
                    .if_not_exists()
                    .col(integer(Employers::Id).primary_key())
                    .col(string(Employers::CompanyName))
                    .col(string(Employers::CompanyAddress))
                    .col(boolean(Employers::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EMPLOYER_USER_ID)
                            .from(Employers::Table, Employers::Id)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employers {
    Table,
    Id,
    CompanyName,
    CompanyAddress,
    Active,
}
