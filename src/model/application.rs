use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ApplicationStatus, JobType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplyDto {
    pub job_id: i32,
    pub applicant_id: i32,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

/// An application together with the job, applicant and employer it refers to.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub job_title: Option<String>,
    #[schema(value_type = Option<String>, example = "FULL_TIME")]
    pub job_type: Option<JobType>,
    pub applicant_id: i32,
    pub applicant_name: Option<String>,
    pub applicant_email: Option<String>,
    pub employer_id: i32,
    pub company_name: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub applied_at: NaiveDateTime,
    #[schema(value_type = String, example = "PENDING")]
    pub status: ApplicationStatus,
    pub employer_viewed: bool,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationStatusQuery {
    /// One of `PENDING`, `REVIEWING`, `APPROVED`, `REJECTED`, `WITHDRAWN`
    pub status: String,
}
