use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{JobApplicationModel, JobModel},
    TestContext,
};

impl TestContext {
    pub fn application<'a>(&'a self) -> ApplicationFixtures<'a> {
        ApplicationFixtures { context: self }
    }
}

pub struct ApplicationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    /// Insert a pending application of `applicant_id` for `job`.
    ///
    /// Does not touch the job's apply count.
    pub async fn insert_application(
        &self,
        job: &JobModel,
        applicant_id: i32,
    ) -> Result<JobApplicationModel, TestError> {
        self.insert_application_with_status(job, applicant_id, ApplicationStatus::Pending)
            .await
    }

    pub async fn insert_application_with_status(
        &self,
        job: &JobModel,
        applicant_id: i32,
        status: ApplicationStatus,
    ) -> Result<JobApplicationModel, TestError> {
        Ok(
            entity::prelude::JobApplication::insert(entity::job_application::ActiveModel {
                job_id: ActiveValue::Set(job.id),
                applicant_id: ActiveValue::Set(applicant_id),
                employer_id: ActiveValue::Set(job.employer_id),
                cover_letter: ActiveValue::Set(Some("Hire me".to_string())),
                resume_url: ActiveValue::Set(None),
                applied_at: ActiveValue::Set(Utc::now().naive_utc()),
                status: ActiveValue::Set(status),
                employer_viewed: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
