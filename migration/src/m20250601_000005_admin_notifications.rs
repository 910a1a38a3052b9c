use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static IDX_ADMIN_NOTIFICATION_TIMESTAMP: &str = "idx_admin_notification_timestamp";
static FK_ADMIN_NOTIFICATION_USER_ID: &str = "fk_admin_notification_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // job_id carries no foreign key, the ledger keeps a snapshot of the job
        manager
            .create_table(
                Table::create()
                    .table(AdminNotifications::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminNotifications::Id))
                    .col(string_len(AdminNotifications::ActionType, 20))
                    .col(integer_null(AdminNotifications::JobId))
                    .col(string_null(AdminNotifications::JobTitle))
                    .col(timestamp(AdminNotifications::Timestamp))
                    .col(string(AdminNotifications::Username))
                    .col(integer(AdminNotifications::UserId))
                    .col(text_null(AdminNotifications::Description))
                    .col(boolean(AdminNotifications::IsRead).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ADMIN_NOTIFICATION_USER_ID)
                            .from(AdminNotifications::Table, AdminNotifications::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ADMIN_NOTIFICATION_TIMESTAMP)
                    .table(AdminNotifications::Table)
                    .col(AdminNotifications::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ADMIN_NOTIFICATION_TIMESTAMP)
                    .table(AdminNotifications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AdminNotifications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AdminNotifications {
    Table,
    Id,
    ActionType,
    JobId,
    JobTitle,
    Timestamp,
    Username,
    UserId,
    Description,
    IsRead,
}
