use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, ApplicationStatusQuery, ApplyDto},
    },
    server::{
        error::Error, model::app::AppState, service::application::ApplicationService,
        util::enums::parse_application_status,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Apply for a job
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = ApplyDto,
    responses(
        (status = 200, description = "Created application", body = ApplicationDto),
        (status = 400, description = "Applicant already applied for the job", body = ErrorDto),
        (status = 404, description = "Job, applicant or employer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db, state.email.as_ref())
        .apply(request)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/applications/{application_id}",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "The application", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db, state.email.as_ref())
        .get(application_id)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/applications/applicant/{applicant_id}",
    tag = APPLICATION_TAG,
    params(("applicant_id" = i32, Path, description = "Applicant's user id")),
    responses(
        (status = 200, description = "The applicant's applications, newest first", body = Vec<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications_by_applicant(
    State(state): State<AppState>,
    Path(applicant_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db, state.email.as_ref())
        .list_by_applicant(applicant_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/job/{job_id}",
    tag = APPLICATION_TAG,
    params(("job_id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Applications for the job, newest first", body = Vec<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications_by_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db, state.email.as_ref())
        .list_by_job(job_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/employer/{employer_id}",
    tag = APPLICATION_TAG,
    params(("employer_id" = i32, Path, description = "Employer id")),
    responses(
        (status = 200, description = "Applications to the employer's jobs, newest first", body = Vec<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications_by_employer(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db, state.email.as_ref())
        .list_by_employer(employer_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Change an application's status
///
/// Accepting or rejecting notifies the applicant and the employer and emails the applicant.
/// Email delivery failures do not fail the request.
#[utoipa::path(
    put,
    path = "/api/applications/{application_id}/status",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application id"), ApplicationStatusQuery),
    responses(
        (status = 200, description = "Updated application", body = ApplicationDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
    Query(query): Query<ApplicationStatusQuery>,
) -> Result<impl IntoResponse, Error> {
    let status = parse_application_status(&query.status)?;

    let application = ApplicationService::new(&state.db, state.email.as_ref())
        .update_status(application_id, status)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

#[utoipa::path(
    put,
    path = "/api/applications/{application_id}/view",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application marked as viewed", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_application_viewed(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db, state.email.as_ref())
        .mark_as_viewed(application_id)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}
