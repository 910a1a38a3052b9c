use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{JobStatus, JobType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Fields an employer submits when posting a job.
///
/// A `status` supplied by the caller is accepted in any form and ignored; new jobs always
/// start `PENDING`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateJobDto {
    /// Id of the employer's user account
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, example = "FULL_TIME")]
    pub job_type: Option<JobType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    /// Defaults to 30 days after posting
    pub expire_at: Option<NaiveDateTime>,
    pub is_salary_public: Option<bool>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// Replacement field set for an existing job.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateJobDto {
    /// Must match the job's owning employer
    pub employer_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, example = "FULL_TIME")]
    pub job_type: Option<JobType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    /// Keeps the stored expiry when absent
    pub expire_at: Option<NaiveDateTime>,
    pub is_salary_public: Option<bool>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JobDto {
    pub id: i32,
    pub employer_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, example = "FULL_TIME")]
    pub job_type: Option<JobType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub apply_count: i32,
    pub view_count: i32,
    pub posted_at: NaiveDateTime,
    pub expire_at: NaiveDateTime,
    pub is_salary_public: bool,
    pub is_active: bool,
    #[schema(value_type = String, example = "PENDING")]
    pub status: JobStatus,
    pub rejection_reason: Option<String>,
    pub image_url: Option<String>,
    pub processed_by: Option<i32>,
    pub processed_at: Option<NaiveDateTime>,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        Self {
            id: job.id,
            employer_id: job.employer_id,
            title: job.title,
            description: job.description,
            requirement: job.requirement,
            location: job.location,
            job_type: job.job_type,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            salary_currency: job.salary_currency,
            apply_count: job.apply_count,
            view_count: job.view_count,
            posted_at: job.posted_at,
            expire_at: job.expire_at,
            is_salary_public: job.is_salary_public,
            is_active: job.is_active,
            status: job.status,
            rejection_reason: job.rejection_reason,
            image_url: job.image_url,
            processed_by: job.processed_by,
            processed_at: job.processed_at,
        }
    }
}

/// Moderation request applying any status to a job.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessJobDto {
    /// Target status, one of `PENDING`, `APPROVED`, `REJECTED`, `DELETED`
    pub status: String,
    pub admin_id: i32,
    /// Required when `status` is `REJECTED`
    pub rejection_reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectJobDto {
    pub admin_id: i32,
    pub rejection_reason: String,
}

#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminQuery {
    /// Id of the acting admin
    pub admin_id: i32,
}

/// Optional search filters; empty values match everything.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobSearchQuery {
    /// Case-insensitive match on title, description or requirement
    pub keyword: Option<String>,
    /// Case-insensitive match on location
    pub location: Option<String>,
    /// Lower bound for the job's own minimum salary
    pub min_salary: Option<f64>,
    /// Upper bound for the job's own maximum salary
    pub max_salary: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JobStatusCountDto {
    #[schema(value_type = String, example = "APPROVED")]
    pub status: JobStatus,
    pub count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JobStatisticsDto {
    pub total_views: i64,
    pub total_applies: i64,
    pub status_counts: Vec<JobStatusCountDto>,
}
