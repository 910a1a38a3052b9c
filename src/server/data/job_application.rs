use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{JobApplicationModel, JobModel};

use entity::job_application::Column;

pub struct JobApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobApplicationRepository<'a, C> {
    /// Creates a new instance of [`JobApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, job_id: i32, applicant_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::JobApplication::find()
            .filter(Column::JobId.eq(job_id))
            .filter(Column::ApplicantId.eq(applicant_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a pending, unviewed application for `job`.
    ///
    /// The job's employer id is copied onto the application as a snapshot.
    pub async fn create(
        &self,
        job: &JobModel,
        applicant_id: i32,
        cover_letter: Option<String>,
        resume_url: Option<String>,
        applied_at: NaiveDateTime,
    ) -> Result<JobApplicationModel, DbErr> {
        let application = entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(job.id),
            applicant_id: ActiveValue::Set(applicant_id),
            employer_id: ActiveValue::Set(job.employer_id),
            cover_letter: ActiveValue::Set(cover_letter),
            resume_url: ActiveValue::Set(resume_url),
            applied_at: ActiveValue::Set(applied_at),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            employer_viewed: ActiveValue::Set(false),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        application_id: i32,
    ) -> Result<Option<JobApplicationModel>, DbErr> {
        entity::prelude::JobApplication::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Sets `status` only if the application currently holds a different one.
    ///
    /// Returns `true` if this call changed the row. Of several concurrent writers of the
    /// same status, exactly one sees `true`.
    pub async fn update_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::JobApplication::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .filter(Column::Id.eq(application_id))
            .filter(Column::Status.ne(status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn mark_viewed(
        &self,
        application: JobApplicationModel,
    ) -> Result<JobApplicationModel, DbErr> {
        if application.employer_viewed {
            return Ok(application);
        }

        let mut application_am = application.into_active_model();
        application_am.employer_viewed = ActiveValue::Set(true);

        application_am.update(self.db).await
    }

    pub async fn find_by_applicant(
        &self,
        applicant_id: i32,
    ) -> Result<Vec<JobApplicationModel>, DbErr> {
        self.find_by(Column::ApplicantId, applicant_id).await
    }

    pub async fn find_by_job(&self, job_id: i32) -> Result<Vec<JobApplicationModel>, DbErr> {
        self.find_by(Column::JobId, job_id).await
    }

    pub async fn find_by_employer(
        &self,
        employer_id: i32,
    ) -> Result<Vec<JobApplicationModel>, DbErr> {
        self.find_by(Column::EmployerId, employer_id).await
    }

    async fn find_by(&self, column: Column, id: i32) -> Result<Vec<JobApplicationModel>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(column.eq(id))
            .order_by_desc(Column::AppliedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }
}
