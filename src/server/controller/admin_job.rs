use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::JobStatus;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        job::{AdminQuery, JobDto, ProcessJobDto, RejectJobDto},
    },
    server::{
        error::Error,
        model::{app::AppState, page::Pagination},
        service::job::JobService,
        util::enums::parse_job_status,
    },
};

pub static ADMIN_JOB_TAG: &str = "admin-job";

/// List jobs awaiting moderation
#[utoipa::path(
    get,
    path = "/api/admin/jobs/pending",
    tag = ADMIN_JOB_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of pending jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pending_jobs(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let jobs = JobService::new(&state.db)
        .list_by_status(JobStatus::Pending, pagination)
        .await?;

    Ok((StatusCode::OK, Json(PageDto::<JobDto>::from(jobs))))
}

/// List every job with the given status, unpaged
#[utoipa::path(
    get,
    path = "/api/admin/jobs/status/{status}",
    tag = ADMIN_JOB_TAG,
    params(("status" = String, Path, description = "Job status")),
    responses(
        (status = 200, description = "Jobs with the status", body = Vec<JobDto>),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let status = parse_job_status(&status)?;

    let jobs = JobService::new(&state.db)
        .list_all_by_status(status)
        .await?;

    let jobs: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();

    Ok((StatusCode::OK, Json(jobs)))
}

/// Move a job to any status
///
/// `REJECTED` requires a non-blank rejection reason. Every change is recorded in the admin
/// notification ledger.
#[utoipa::path(
    put,
    path = "/api/admin/jobs/{job_id}/process",
    tag = ADMIN_JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    request_body = ProcessJobDto,
    responses(
        (status = 200, description = "Processed job", body = JobDto),
        (status = 400, description = "Invalid status or missing rejection reason", body = ErrorDto),
        (status = 404, description = "Job or admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Json(request): Json<ProcessJobDto>,
) -> Result<impl IntoResponse, Error> {
    let status = parse_job_status(&request.status)?;

    let job = JobService::new(&state.db)
        .process_job(job_id, status, request.admin_id, request.rejection_reason)
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

#[utoipa::path(
    put,
    path = "/api/admin/jobs/{job_id}/approve",
    tag = ADMIN_JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id"), AdminQuery),
    responses(
        (status = 200, description = "Approved job", body = JobDto),
        (status = 404, description = "Job or admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Query(admin): Query<AdminQuery>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db)
        .approve(job_id, admin.admin_id)
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

#[utoipa::path(
    put,
    path = "/api/admin/jobs/{job_id}/reject",
    tag = ADMIN_JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    request_body = RejectJobDto,
    responses(
        (status = 200, description = "Rejected job", body = JobDto),
        (status = 400, description = "Missing rejection reason", body = ErrorDto),
        (status = 404, description = "Job or admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Json(request): Json<RejectJobDto>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db)
        .reject(job_id, request.admin_id, request.rejection_reason)
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}

/// Soft delete a job
///
/// The job is marked `DELETED` and deactivated; the row is kept.
#[utoipa::path(
    delete,
    path = "/api/admin/jobs/{job_id}",
    tag = ADMIN_JOB_TAG,
    params(("job_id" = i32, Path, description = "Job id"), AdminQuery),
    responses(
        (status = 200, description = "Deleted job", body = JobDto),
        (status = 404, description = "Job or admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Query(admin): Query<AdminQuery>,
) -> Result<impl IntoResponse, Error> {
    let job = JobService::new(&state.db)
        .delete(job_id, admin.admin_id)
        .await?;

    Ok((StatusCode::OK, Json(JobDto::from(job))))
}
