use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000001_users::Users, m20250601_000002_employers::Employers,
    m20250601_000003_jobs::Jobs,
};

/// Backs the one-application-per-applicant rule at the storage level.
static IDX_JOB_APPLICATION_JOB_APPLICANT: &str = "idx_job_application_job_applicant";
static IDX_JOB_APPLICATION_EMPLOYER_ID: &str = "idx_job_application_employer_id";
static FK_JOB_APPLICATION_JOB_ID: &str = "fk_job_application_job_id";
static FK_JOB_APPLICATION_APPLICANT_ID: &str = "fk_job_application_applicant_id";
static FK_JOB_APPLICATION_EMPLOYER_ID: &str = "fk_job_application_employer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplications::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplications::Id))
                    .col(integer(JobApplications::JobId))
                    .col(integer(JobApplications::ApplicantId))
                    .col(integer(JobApplications::EmployerId))
                    .col(text_null(JobApplications::CoverLetter))
                    .col(string_null(JobApplications::ResumeUrl))
                    .col(timestamp(JobApplications::AppliedAt))
                    .col(string_len(JobApplications::Status, 20))
                    .col(boolean(JobApplications::EmployerViewed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_APPLICATION_JOB_ID)
                            .from(JobApplications::Table, JobApplications::JobId)
                            .to(Jobs::Table, Jobs::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_APPLICATION_APPLICANT_ID)
                            .from(JobApplications::Table, JobApplications::ApplicantId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_APPLICATION_EMPLOYER_ID)
                            .from(JobApplications::Table, JobApplications::EmployerId)
                            .to(Employers::Table, Employers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATION_JOB_APPLICANT)
                    .table(JobApplications::Table)
                    .col(JobApplications::JobId)
                    .col(JobApplications::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATION_EMPLOYER_ID)
                    .table(JobApplications::Table)
                    .col(JobApplications::EmployerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATION_EMPLOYER_ID)
                    .table(JobApplications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATION_JOB_APPLICANT)
                    .table(JobApplications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobApplications {
    Table,
    Id,
    JobId,
    ApplicantId,
    EmployerId,
    CoverLetter,
    ResumeUrl,
    AppliedAt,
    Status,
    EmployerViewed,
}
