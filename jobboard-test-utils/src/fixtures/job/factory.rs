//! Factory functions for job models.
//!
//! Pure functions returning job models and active models with standard test values.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{JobStatus, JobType};
use sea_orm::ActiveValue;

use crate::model::JobModel;

/// Create an in-memory job model with standard test values.
///
/// # Arguments
/// - `id` - Job id to assign
/// - `employer_id` - Owning employer's id
/// - `status` - Moderation status
pub fn mock_job(id: i32, employer_id: i32, status: JobStatus) -> JobModel {
    let now = Utc::now().naive_utc();
    JobModel {
        id,
        employer_id,
        title: "Backend Engineer".to_string(),
        description: Some("Build and run services".to_string()),
        requirement: Some("Rust".to_string()),
        location: Some("Berlin".to_string()),
        job_type: Some(JobType::FullTime),
        salary_min: Some(50_000.0),
        salary_max: Some(80_000.0),
        salary_currency: Some("EUR".to_string()),
        apply_count: 0,
        view_count: 0,
        posted_at: now,
        expire_at: now + Duration::days(30),
        is_salary_public: true,
        is_active: true,
        status,
        rejection_reason: None,
        image_url: None,
        processed_by: None,
        processed_at: None,
    }
}

/// Create a job active model ready for insertion.
pub fn mock_job_active_model(
    employer_id: i32,
    title: &str,
    status: JobStatus,
) -> entity::job::ActiveModel {
    let now = Utc::now().naive_utc();
    entity::job::ActiveModel {
        employer_id: ActiveValue::Set(employer_id),
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(Some(format!("{} description", title))),
        requirement: ActiveValue::Set(None),
        location: ActiveValue::Set(Some("Berlin".to_string())),
        job_type: ActiveValue::Set(Some(JobType::FullTime)),
        salary_min: ActiveValue::Set(None),
        salary_max: ActiveValue::Set(None),
        salary_currency: ActiveValue::Set(None),
        apply_count: ActiveValue::Set(0),
        view_count: ActiveValue::Set(0),
        posted_at: ActiveValue::Set(now),
        expire_at: ActiveValue::Set(now + Duration::days(30)),
        is_salary_public: ActiveValue::Set(true),
        is_active: ActiveValue::Set(status != JobStatus::Deleted),
        status: ActiveValue::Set(status),
        rejection_reason: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        processed_by: ActiveValue::Set(None),
        processed_at: ActiveValue::Set(None),
        ..Default::default()
    }
}
