use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000001_users::Users, m20250601_000004_job_applications::JobApplications,
};

static IDX_NOTIFICATION_USER_ID: &str = "idx_notification_user_id";
static FK_NOTIFICATION_USER_ID: &str = "fk_notification_user_id";
static FK_NOTIFICATION_RELATED_APPLICATION_ID: &str = "fk_notification_related_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(pk_auto(Notifications::Id))
                    .col(integer(Notifications::UserId))
                    .col(string(Notifications::Title))
                    .col(text_null(Notifications::Content))
                    .col(string_len(Notifications::NotificationType, 30))
                    .col(integer_null(Notifications::RelatedApplicationId))
                    .col(timestamp(Notifications::CreatedAt))
                    .col(boolean(Notifications::IsRead).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTIFICATION_USER_ID)
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTIFICATION_RELATED_APPLICATION_ID)
                            .from(Notifications::Table, Notifications::RelatedApplicationId)
                            .to(JobApplications::Table, JobApplications::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notifications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Title,
    Content,
    NotificationType,
    RelatedApplicationId,
    CreatedAt,
    IsRead,
}
