use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000002_employers::Employers};

static IDX_JOB_STATUS: &str = "idx_job_status";
static IDX_JOB_EMPLOYER_ID: &str = "idx_job_employer_id";
static FK_JOB_EMPLOYER_ID: &str = "fk_job_employer_id";
static FK_JOB_PROCESSED_BY: &str = "fk_job_processed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(integer(Jobs::EmployerId))
                    .col(string(Jobs::Title))
                    .col(text_null(Jobs::Description))
                    .col(text_null(Jobs::Requirement))
                    .col(string_null(Jobs::Location))
                    .col(string_len_null(Jobs::JobType, 20))
                    .col(double_null(Jobs::SalaryMin))
                    .col(double_null(Jobs::SalaryMax))
                    .col(string_null(Jobs::SalaryCurrency))
                    .col(integer(Jobs::ApplyCount).default(0))
                    .col(integer(Jobs::ViewCount).default(0))
                    .col(timestamp(Jobs::PostedAt))
                    .col(timestamp(Jobs::ExpireAt))
                    .col(boolean(Jobs::IsSalaryPublic).default(false))
                    .col(boolean(Jobs::IsActive).default(true))
                    .col(string_len(Jobs::Status, 20))
                    .col(text_null(Jobs::RejectionReason))
                    .col(string_null(Jobs::ImageUrl))
                    .col(integer_null(Jobs::ProcessedBy))
                    .col(timestamp_null(Jobs::ProcessedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_EMPLOYER_ID)
                            .from(Jobs::Table, Jobs::EmployerId)
                            .to(Employers::Table, Employers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_PROCESSED_BY)
                            .from(Jobs::Table, Jobs::ProcessedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_STATUS)
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_EMPLOYER_ID)
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_EMPLOYER_ID)
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_JOB_STATUS).table(Jobs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Jobs {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
    Requirement,
    Location,
    JobType,
    SalaryMin,
    SalaryMax,
    SalaryCurrency,
    ApplyCount,
    ViewCount,
    PostedAt,
    ExpireAt,
    IsSalaryPublic,
    IsActive,
    Status,
    RejectionReason,
    ImageUrl,
    ProcessedBy,
    ProcessedAt,
}
