use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::application::{ApplicationDto, ApplyDto},
    server::{
        data::{
            job::JobRepository,
            job_application::JobApplicationRepository,
            user::{EmployerRepository, UserRepository},
        },
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        model::db::{EmployerModel, JobApplicationModel, JobModel, UserModel},
        service::{
            email::{ApplicationStatusEmail, EmailGateway},
            notification::record_status_notifications,
        },
    },
};

/// Builds the enriched view of an application; missing references leave their fields empty.
fn application_dto(
    application: JobApplicationModel,
    job: Option<&JobModel>,
    applicant: Option<&UserModel>,
    employer: Option<&EmployerModel>,
) -> ApplicationDto {
    ApplicationDto {
        id: application.id,
        job_id: application.job_id,
        job_title: job.map(|job| job.title.clone()),
        job_type: job.and_then(|job| job.job_type),
        applicant_id: application.applicant_id,
        applicant_name: applicant.map(|user| user.full_name.clone()),
        applicant_email: applicant.map(|user| user.email.clone()),
        employer_id: application.employer_id,
        company_name: employer.map(|employer| employer.company_name.clone()),
        cover_letter: application.cover_letter,
        resume_url: application.resume_url,
        applied_at: application.applied_at,
        status: application.status,
        employer_viewed: application.employer_viewed,
    }
}

fn notifies_applicant(status: ApplicationStatus) -> bool {
    matches!(
        status,
        ApplicationStatus::Approved | ApplicationStatus::Rejected
    )
}

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    email: &'a dyn EmailGateway,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection, email: &'a dyn EmailGateway) -> Self {
        Self { db, email }
    }

    /// Submits an application and bumps the job's apply count in one transaction.
    ///
    /// The duplicate check runs first; the unique (job, applicant) index catches any
    /// submission racing past it.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)`: The pending application
    /// - `Err(Error::ConflictError)`: The applicant already applied for the job
    /// - `Err(Error::NotFoundError)`: Job, applicant or employer does not exist
    pub async fn apply(&self, request: ApplyDto) -> Result<ApplicationDto, Error> {
        let ApplyDto {
            job_id,
            applicant_id,
            cover_letter,
            resume_url,
        } = request;

        let txn = self.db.begin().await?;
        let application_repo = JobApplicationRepository::new(&txn);
        let job_repo = JobRepository::new(&txn);

        if application_repo.exists(job_id, applicant_id).await? {
            return Err(ConflictError::AlreadyApplied {
                job_id,
                applicant_id,
            }
            .into());
        }

        let job = job_repo
            .get_by_id(job_id)
            .await?
            .ok_or(NotFoundError::Job(job_id))?;
        let applicant = UserRepository::new(&txn)
            .get_by_id(applicant_id)
            .await?
            .ok_or(NotFoundError::User(applicant_id))?;
        let employer = EmployerRepository::new(&txn)
            .get_by_id(job.employer_id)
            .await?
            .ok_or(NotFoundError::Employer(job.employer_id))?;

        let application = application_repo
            .create(
                &job,
                applicant.id,
                cover_letter,
                resume_url,
                Utc::now().naive_utc(),
            )
            .await
            .map_err(|err| already_applied_or(err, job_id, applicant_id))?;

        job_repo.increment_apply_count(job.id).await?;

        txn.commit().await?;

        tracing::info!(
            application_id = application.id,
            job_id,
            applicant_id,
            "Created job application"
        );

        Ok(application_dto(
            application,
            Some(&job),
            Some(&applicant),
            Some(&employer),
        ))
    }

    /// Moves an application to `status`.
    ///
    /// An unchanged status has no side effects. A change to `APPROVED` or `REJECTED`
    /// notifies applicant and employer in the same transaction as the status update, then
    /// attempts the applicant email after commit. Email failures are logged only.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)`: The application after the update
    /// - `Err(Error::NotFoundError)`: Application, or a record needed for notifying, does
    ///   not exist
    pub async fn update_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<ApplicationDto, Error> {
        let txn = self.db.begin().await?;
        let application_repo = JobApplicationRepository::new(&txn);

        let application = application_repo
            .get_by_id(application_id)
            .await?
            .ok_or(NotFoundError::Application(application_id))?;
        let old_status = application.status;

        if !application_repo.update_status(application_id, status).await? {
            txn.commit().await?;

            tracing::debug!(application_id, ?status, "Application status unchanged");

            let application = self.get_model(application_id).await?;
            return self.enrich(application).await;
        }

        let application = JobApplicationModel {
            status,
            ..application
        };

        if !notifies_applicant(status) {
            txn.commit().await?;

            tracing::info!(application_id, from = ?old_status, to = ?status, "Updated application status");

            return self.enrich(application).await;
        }

        let job = JobRepository::new(&txn)
            .get_by_id(application.job_id)
            .await?
            .ok_or(NotFoundError::Job(application.job_id))?;
        let applicant = UserRepository::new(&txn)
            .get_by_id(application.applicant_id)
            .await?
            .ok_or(NotFoundError::User(application.applicant_id))?;
        let employer = EmployerRepository::new(&txn)
            .get_by_id(application.employer_id)
            .await?
            .ok_or(NotFoundError::Employer(application.employer_id))?;

        record_status_notifications(&txn, &application, &job, &applicant, &employer).await?;

        txn.commit().await?;

        tracing::info!(application_id, from = ?old_status, to = ?status, "Updated application status");

        let email = ApplicationStatusEmail::new(&applicant, &job, &employer, status);
        if let Err(err) = self.email.send_application_status_email(&email).await {
            tracing::error!(
                application_id,
                to = %email.to,
                "Failed to send application status email: {}",
                err
            );
        }

        Ok(application_dto(
            application,
            Some(&job),
            Some(&applicant),
            Some(&employer),
        ))
    }

    /// Flags the application as seen by the employer. Calling it again changes nothing.
    pub async fn mark_as_viewed(&self, application_id: i32) -> Result<ApplicationDto, Error> {
        let application = self.get_model(application_id).await?;

        let application = JobApplicationRepository::new(self.db)
            .mark_viewed(application)
            .await?;

        self.enrich(application).await
    }

    pub async fn get(&self, application_id: i32) -> Result<ApplicationDto, Error> {
        let application = self.get_model(application_id).await?;

        self.enrich(application).await
    }

    pub async fn list_by_applicant(&self, applicant_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = JobApplicationRepository::new(self.db)
            .find_by_applicant(applicant_id)
            .await?;

        self.enrich_many(applications).await
    }

    pub async fn list_by_job(&self, job_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = JobApplicationRepository::new(self.db)
            .find_by_job(job_id)
            .await?;

        self.enrich_many(applications).await
    }

    pub async fn list_by_employer(&self, employer_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = JobApplicationRepository::new(self.db)
            .find_by_employer(employer_id)
            .await?;

        self.enrich_many(applications).await
    }

    async fn get_model(&self, application_id: i32) -> Result<JobApplicationModel, Error> {
        Ok(JobApplicationRepository::new(self.db)
            .get_by_id(application_id)
            .await?
            .ok_or(NotFoundError::Application(application_id))?)
    }

    async fn enrich(&self, application: JobApplicationModel) -> Result<ApplicationDto, Error> {
        let mut dtos = self.enrich_many(vec![application]).await?;

        dtos.pop()
            .ok_or_else(|| Error::InternalError("Application lost during enrichment".to_string()))
    }

    /// Resolves jobs, applicants and employers with one query each.
    async fn enrich_many(
        &self,
        applications: Vec<JobApplicationModel>,
    ) -> Result<Vec<ApplicationDto>, Error> {
        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let job_ids: Vec<i32> = applications.iter().map(|a| a.job_id).collect();
        let applicant_ids: Vec<i32> = applications.iter().map(|a| a.applicant_id).collect();
        let employer_ids: Vec<i32> = applications.iter().map(|a| a.employer_id).collect();

        let jobs: HashMap<i32, JobModel> = JobRepository::new(self.db)
            .get_many(&job_ids)
            .await?
            .into_iter()
            .map(|job| (job.id, job))
            .collect();
        let applicants = UserRepository::new(self.db).get_many(&applicant_ids).await?;
        let employers = EmployerRepository::new(self.db)
            .get_many(&employer_ids)
            .await?;

        Ok(applications
            .into_iter()
            .map(|application| {
                let job = jobs.get(&application.job_id);
                let applicant = applicants.get(&application.applicant_id);
                let employer = employers.get(&application.employer_id);

                application_dto(application, job, applicant, employer)
            })
            .collect())
    }
}

fn already_applied_or(err: DbErr, job_id: i32, applicant_id: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConflictError::AlreadyApplied {
            job_id,
            applicant_id,
        }
        .into(),
        _ => err.into(),
    }
}
