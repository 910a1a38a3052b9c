use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        job::{CreateJobDto, JobDto, JobSearchQuery, JobStatisticsDto, UpdateJobDto},
    },
    server::{
        error::Error,
        model::{app::AppState, job::JobFields, page::Pagination},
        service::job::JobService,
        util::enums::parse_job_status,
    },
};

pub static JOB_TAG: &str = "job";

/// List all jobs, newest first
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db).list_jobs(pagination).await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

/// Post a new job
///
/// The job starts out `PENDING` awaiting moderation, whatever status the request carries.
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 200, description = "Created job", body = JobDto),
        (status = 404, description = "User has no employer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = request.user_id;

    let job = JobService::new(&state.db)
        .create_job(user_id, JobFields::from(request))
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

#[utoipa::path(
    get,
    path = "/api/jobs/approved",
    tag = JOB_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of approved jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_approved_jobs(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db).list_approved(pagination).await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "The job", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db).get_job(job_id).await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

/// Update a job's fields
///
/// Only the owning employer may update a job. Status and counters are left as they are.
#[utoipa::path(
    put,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Updated job", body = JobDto),
        (status = 403, description = "Employer does not own the job", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Json(request): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let employer_id = request.employer_id;

    let job = JobService::new(&state.db)
        .update_job(job_id, employer_id, JobFields::from(request))
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

/// Record one view of a job
#[utoipa::path(
    post,
    path = "/api/jobs/{job_id}/view",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "View recorded"),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn increment_view_count(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    JobService::new(&state.db)
        .increment_view_count(job_id)
        .await?;

    Ok(StatusCode::OK)
}

/// Search approved jobs
#[utoipa::path(
    get,
    path = "/api/jobs/search",
    tag = JOB_TAG,
    params(JobSearchQuery, PageParams),
    responses(
        (status = 200, description = "Page of matching approved jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db).search(query, pagination).await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

/// Search jobs with the given status
#[utoipa::path(
    get,
    path = "/api/jobs/search/status/{status}",
    tag = JOB_TAG,
    params(
        ("status" = String, Path, description = "Job status"),
        JobSearchQuery,
        PageParams
    ),
    responses(
        (status = 200, description = "Page of matching jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid status or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Query(query): Query<JobSearchQuery>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let status = parse_job_status(&status)?;
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db)
        .search_by_status(query, status, pagination)
        .await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

/// List the jobs posted by a user's employer profile
#[utoipa::path(
    get,
    path = "/api/jobs/by-user/{user_id}",
    tag = JOB_TAG,
    params(("user_id" = i32, Path, description = "Employer's user id"), PageParams),
    responses(
        (status = 200, description = "Page of the employer's jobs", body = PageDto<JobDto>),
        (status = 404, description = "User has no employer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db)
        .list_by_user(user_id, pagination)
        .await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

#[utoipa::path(
    get,
    path = "/api/jobs/status/{status}",
    tag = JOB_TAG,
    params(("status" = String, Path, description = "Job status"), PageParams),
    responses(
        (status = 200, description = "Page of jobs with the status", body = PageDto<JobDto>),
        (status = 400, description = "Invalid status or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let status = parse_job_status(&status)?;
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db)
        .list_by_status(status, pagination)
        .await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

/// View and apply totals plus job counts per status
#[utoipa::path(
    get,
    path = "/api/jobs/statistics",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Job statistics", body = JobStatisticsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job_statistics(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let statistics = JobService::new(&state.db).statistics().await?;

    Ok((StatusCode::OK, Json(JobStatisticsDto::from(statistics))))
}
