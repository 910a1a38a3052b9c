use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{JobStatus, JobType};

use crate::model::job::{
    CreateJobDto, JobSearchQuery, JobStatisticsDto, JobStatusCountDto, UpdateJobDto,
};

/// Employer-editable fields of a job.
#[derive(Clone, Debug, Default)]
pub struct JobFields {
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub expire_at: Option<NaiveDateTime>,
    pub is_salary_public: bool,
    pub image_url: Option<String>,
}

impl From<CreateJobDto> for JobFields {
    fn from(dto: CreateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            requirement: dto.requirement,
            location: dto.location,
            job_type: dto.job_type,
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            salary_currency: dto.salary_currency,
            expire_at: dto.expire_at,
            is_salary_public: dto.is_salary_public.unwrap_or(true),
            image_url: dto.image_url,
        }
    }
}

impl From<UpdateJobDto> for JobFields {
    fn from(dto: UpdateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            requirement: dto.requirement,
            location: dto.location,
            job_type: dto.job_type,
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            salary_currency: dto.salary_currency,
            expire_at: dto.expire_at,
            is_salary_public: dto.is_salary_public.unwrap_or(true),
            image_url: dto.image_url,
        }
    }
}

/// Predicates applied when listing jobs. `None` and blank strings match everything.
#[derive(Clone, Debug, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub employer_id: Option<i32>,
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl JobFilter {
    pub fn with_status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_employer(employer_id: i32) -> Self {
        Self {
            employer_id: Some(employer_id),
            ..Default::default()
        }
    }

    pub fn search(query: JobSearchQuery, status: JobStatus) -> Self {
        Self {
            status: Some(status),
            employer_id: None,
            keyword: query.keyword,
            location: query.location,
            min_salary: query.min_salary,
            max_salary: query.max_salary,
        }
    }
}

/// Aggregates over every job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobStatistics {
    pub total_views: i64,
    pub total_applies: i64,
    pub status_counts: Vec<(JobStatus, u64)>,
}

impl From<JobStatistics> for JobStatisticsDto {
    fn from(statistics: JobStatistics) -> Self {
        Self {
            total_views: statistics.total_views,
            total_applies: statistics.total_applies,
            status_counts: statistics
                .status_counts
                .into_iter()
                .map(|(status, count)| JobStatusCountDto { status, count })
                .collect(),
        }
    }
}
