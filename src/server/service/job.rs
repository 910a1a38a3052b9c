use chrono::Utc;
use entity::sea_orm_active_enums::{AdminAction, JobStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::job::JobSearchQuery,
    server::{
        data::{
            admin_notification::AdminNotificationRepository,
            job::JobRepository,
            user::{EmployerRepository, UserRepository},
        },
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        model::{
            admin_notification::NewAdminNotification,
            db::JobModel,
            job::{JobFields, JobFilter, JobStatistics},
            page::{Page, Pagination},
        },
        service::admin_notification::{action_for_status, describe_status_change},
    },
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new job for the employer profile of `user_id`.
    ///
    /// The job always starts `PENDING`. A `CREATE` entry is appended to the admin ledger in
    /// the same transaction.
    ///
    /// # Returns
    /// - `Ok(JobModel)`: The created job
    /// - `Err(Error::NotFoundError)`: The user has no employer profile
    /// - `Err(Error::DbErr)`: Database failure, nothing is persisted
    pub async fn create_job(&self, user_id: i32, fields: JobFields) -> Result<JobModel, Error> {
        let txn = self.db.begin().await?;

        let employer = EmployerRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(NotFoundError::EmployerProfile(user_id))?;
        let user = UserRepository::new(&txn)
            .get_by_id(employer.id)
            .await?
            .ok_or(NotFoundError::User(employer.id))?;

        let now = Utc::now().naive_utc();
        let job = JobRepository::new(&txn)
            .create(employer.id, &fields, now)
            .await?;

        AdminNotificationRepository::new(&txn)
            .create(NewAdminNotification {
                action_type: AdminAction::Create,
                user_id: user.id,
                username: user.username,
                description: Some(format!("New job created: {}", job.title)),
                job_id: Some(job.id),
                job_title: Some(job.title.clone()),
                timestamp: now,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(job_id = job.id, employer_id = employer.id, "Created job");

        Ok(job)
    }

    /// Replaces the editable fields of a job owned by `employer_id`.
    ///
    /// Status, moderation stamps and counters are untouched. An `UPDATE` entry is appended
    /// to the admin ledger in the same transaction.
    ///
    /// # Returns
    /// - `Ok(JobModel)`: The updated job
    /// - `Err(Error::NotFoundError)`: Job or owning user does not exist
    /// - `Err(Error::ConflictError)`: `employer_id` does not own the job
    pub async fn update_job(
        &self,
        job_id: i32,
        employer_id: i32,
        fields: JobFields,
    ) -> Result<JobModel, Error> {
        let txn = self.db.begin().await?;
        let job_repo = JobRepository::new(&txn);

        let job = job_repo
            .get_by_id(job_id)
            .await?
            .ok_or(NotFoundError::Job(job_id))?;

        if job.employer_id != employer_id {
            return Err(ConflictError::JobOwnership {
                job_id,
                employer_id,
            }
            .into());
        }

        let user = UserRepository::new(&txn)
            .get_by_id(job.employer_id)
            .await?
            .ok_or(NotFoundError::User(job.employer_id))?;

        let job = job_repo.update_fields(job, &fields).await?;

        AdminNotificationRepository::new(&txn)
            .create(NewAdminNotification {
                action_type: AdminAction::Update,
                user_id: user.id,
                username: user.username,
                description: Some(format!("Job updated: {}", job.title)),
                job_id: Some(job.id),
                job_title: Some(job.title.clone()),
                timestamp: Utc::now().naive_utc(),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(job_id = job.id, "Updated job");

        Ok(job)
    }

    /// Moves a job to `status` on behalf of `admin_id`.
    ///
    /// Any status may follow any other. `REJECTED` requires a non-blank reason, checked
    /// before anything is read or written. The status change, the processed-by/at stamps and
    /// the ledger entry are committed together.
    ///
    /// # Returns
    /// - `Ok(JobModel)`: The processed job
    /// - `Err(Error::ValidationError)`: Missing rejection reason
    /// - `Err(Error::NotFoundError)`: Job or admin does not exist
    pub async fn process_job(
        &self,
        job_id: i32,
        status: JobStatus,
        admin_id: i32,
        rejection_reason: Option<String>,
    ) -> Result<JobModel, Error> {
        let rejection_reason = rejection_reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());

        if status == JobStatus::Rejected && rejection_reason.is_none() {
            return Err(ValidationError::MissingRejectionReason.into());
        }

        let txn = self.db.begin().await?;
        let job_repo = JobRepository::new(&txn);

        let job = job_repo
            .get_by_id(job_id)
            .await?
            .ok_or(NotFoundError::Job(job_id))?;
        let admin = UserRepository::new(&txn)
            .get_by_id(admin_id)
            .await?
            .ok_or(NotFoundError::Admin(admin_id))?;

        let old_status = job.status;
        let now = Utc::now().naive_utc();
        let description =
            describe_status_change(&job, old_status, status, rejection_reason.as_deref());

        let job = job_repo
            .update_status(job, status, rejection_reason, admin.id, now)
            .await?;

        AdminNotificationRepository::new(&txn)
            .create(NewAdminNotification {
                action_type: action_for_status(status),
                user_id: admin.id,
                username: admin.username,
                description: Some(description),
                job_id: Some(job.id),
                job_title: Some(job.title.clone()),
                timestamp: now,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            job_id = job.id,
            admin_id,
            from = ?old_status,
            to = ?status,
            "Processed job"
        );

        Ok(job)
    }

    pub async fn approve(&self, job_id: i32, admin_id: i32) -> Result<JobModel, Error> {
        self.process_job(job_id, JobStatus::Approved, admin_id, None)
            .await
    }

    pub async fn reject(
        &self,
        job_id: i32,
        admin_id: i32,
        rejection_reason: String,
    ) -> Result<JobModel, Error> {
        self.process_job(job_id, JobStatus::Rejected, admin_id, Some(rejection_reason))
            .await
    }

    pub async fn delete(&self, job_id: i32, admin_id: i32) -> Result<JobModel, Error> {
        self.process_job(job_id, JobStatus::Deleted, admin_id, None)
            .await
    }

    pub async fn get_job(&self, job_id: i32) -> Result<JobModel, Error> {
        Ok(JobRepository::new(self.db)
            .get_by_id(job_id)
            .await?
            .ok_or(NotFoundError::Job(job_id))?)
    }

    /// Records one view of a job with an in-place increment.
    pub async fn increment_view_count(&self, job_id: i32) -> Result<(), Error> {
        let updated = JobRepository::new(self.db)
            .increment_view_count(job_id)
            .await?;

        if updated == 0 {
            return Err(NotFoundError::Job(job_id).into());
        }

        Ok(())
    }

    pub async fn list_jobs(&self, pagination: Pagination) -> Result<Page<JobModel>, Error> {
        self.find_paginated(JobFilter::default(), pagination).await
    }

    pub async fn list_approved(&self, pagination: Pagination) -> Result<Page<JobModel>, Error> {
        self.find_paginated(JobFilter::with_status(JobStatus::Approved), pagination)
            .await
    }

    pub async fn list_by_status(
        &self,
        status: JobStatus,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, Error> {
        self.find_paginated(JobFilter::with_status(status), pagination)
            .await
    }

    pub async fn list_all_by_status(&self, status: JobStatus) -> Result<Vec<JobModel>, Error> {
        Ok(JobRepository::new(self.db)
            .find_all(&JobFilter::with_status(status))
            .await?)
    }

    /// Lists the jobs posted by the employer profile of `user_id`.
    pub async fn list_by_user(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, Error> {
        let employer = EmployerRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(NotFoundError::EmployerProfile(user_id))?;

        self.find_paginated(JobFilter::with_employer(employer.id), pagination)
            .await
    }

    /// Searches approved jobs.
    pub async fn search(
        &self,
        query: JobSearchQuery,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, Error> {
        self.search_by_status(query, JobStatus::Approved, pagination)
            .await
    }

    pub async fn search_by_status(
        &self,
        query: JobSearchQuery,
        status: JobStatus,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, Error> {
        self.find_paginated(JobFilter::search(query, status), pagination)
            .await
    }

    pub async fn statistics(&self) -> Result<JobStatistics, Error> {
        Ok(JobRepository::new(self.db).statistics().await?)
    }

    async fn find_paginated(
        &self,
        filter: JobFilter,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, Error> {
        Ok(JobRepository::new(self.db)
            .find_paginated(&filter, pagination)
            .await?)
    }
}
