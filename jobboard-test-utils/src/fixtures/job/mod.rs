//! Job posting fixtures.
//!
//! `JobFixtures` inserts jobs into the test database while `factory` builds
//! in-memory models for tests that never touch the database.

pub mod factory;

use entity::sea_orm_active_enums::JobStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::JobModel, TestContext};

impl TestContext {
    pub fn job<'a>(&'a self) -> JobFixtures<'a> {
        JobFixtures { context: self }
    }
}

pub struct JobFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> JobFixtures<'a> {
    /// Insert a pending, active job owned by `employer_id`.
    pub async fn insert_job(&self, employer_id: i32, title: &str) -> Result<JobModel, TestError> {
        self.insert_job_with_status(employer_id, title, JobStatus::Pending)
            .await
    }

    pub async fn insert_job_with_status(
        &self,
        employer_id: i32,
        title: &str,
        status: JobStatus,
    ) -> Result<JobModel, TestError> {
        let job = factory::mock_job_active_model(employer_id, title, status);

        Ok(entity::prelude::Job::insert(job)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    /// Insert a job with the given salary range and location.
    pub async fn insert_job_with_salary(
        &self,
        employer_id: i32,
        title: &str,
        location: &str,
        salary_min: f64,
        salary_max: f64,
    ) -> Result<JobModel, TestError> {
        let mut job = factory::mock_job_active_model(employer_id, title, JobStatus::Approved);
        job.location = ActiveValue::Set(Some(location.to_string()));
        job.salary_min = ActiveValue::Set(Some(salary_min));
        job.salary_max = ActiveValue::Set(Some(salary_max));

        Ok(entity::prelude::Job::insert(job)
            .exec_with_returning(&self.context.db)
            .await?)
    }
}
