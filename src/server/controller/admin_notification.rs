use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin_notification::{
            ActionTypeQuery, AdminNotificationDto, CreateAdminNotificationDto, DateRangeQuery,
            MarkReadDto, ReadStatusQuery,
        },
        api::{CountDto, ErrorDto, PageDto, PageParams, UpdatedDto},
    },
    server::{
        error::Error,
        model::{app::AppState, db::AdminNotificationModel, page::Pagination},
        service::admin_notification::{AdminNotificationRequest, AdminNotificationService},
        util::enums::parse_admin_action,
    },
};

pub static ADMIN_NOTIFICATION_TAG: &str = "admin-notification";

fn to_dtos(notifications: Vec<AdminNotificationModel>) -> Vec<AdminNotificationDto> {
    notifications
        .into_iter()
        .map(AdminNotificationDto::from)
        .collect()
}

/// List the ledger, newest first
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    tag = ADMIN_NOTIFICATION_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of ledger entries", body = PageDto<AdminNotificationDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let notifications = AdminNotificationService::new(&state.db)
        .list(pagination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::<AdminNotificationDto>::from(notifications)),
    ))
}

/// Append a ledger entry
///
/// A `timestamp` in the request backfills the entry at that time.
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    tag = ADMIN_NOTIFICATION_TAG,
    request_body = CreateAdminNotificationDto,
    responses(
        (status = 200, description = "Created ledger entry", body = AdminNotificationDto),
        (status = 400, description = "Invalid action type", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateAdminNotificationDto>,
) -> Result<impl IntoResponse, Error> {
    let action_type = parse_admin_action(&request.action_type)?;

    let notification = AdminNotificationService::new(&state.db)
        .create(AdminNotificationRequest {
            action_type,
            user_id: request.user_id,
            description: request.description,
            job_id: request.job_id,
            job_title: request.job_title,
            timestamp: request.timestamp,
        })
        .await?;

    Ok((StatusCode::OK, Json(AdminNotificationDto::from(notification))))
}

/// The 10 most recent ledger entries
#[utoipa::path(
    get,
    path = "/api/admin/notifications/recent",
    tag = ADMIN_NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Most recent ledger entries", body = Vec<AdminNotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recent_admin_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let notifications = AdminNotificationService::new(&state.db).recent().await?;

    Ok((StatusCode::OK, Json(to_dtos(notifications))))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/by-type",
    tag = ADMIN_NOTIFICATION_TAG,
    params(ActionTypeQuery, PageParams),
    responses(
        (status = 200, description = "Page of ledger entries with the action type", body = PageDto<AdminNotificationDto>),
        (status = 400, description = "Invalid action type or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications_by_type(
    State(state): State<AppState>,
    Query(query): Query<ActionTypeQuery>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let action_type = parse_admin_action(&query.action_type)?;
    let pagination = Pagination::try_from(page)?;

    let notifications = AdminNotificationService::new(&state.db)
        .by_type(action_type, pagination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::<AdminNotificationDto>::from(notifications)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/by-user/{user_id}",
    tag = ADMIN_NOTIFICATION_TAG,
    params(("user_id" = i32, Path, description = "Acting user id"), PageParams),
    responses(
        (status = 200, description = "Page of ledger entries by the user", body = PageDto<AdminNotificationDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let notifications = AdminNotificationService::new(&state.db)
        .by_user(user_id, pagination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::<AdminNotificationDto>::from(notifications)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/by-job/{job_id}",
    tag = ADMIN_NOTIFICATION_TAG,
    params(("job_id" = i32, Path, description = "Job id"), PageParams),
    responses(
        (status = 200, description = "Page of ledger entries about the job", body = PageDto<AdminNotificationDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications_by_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let notifications = AdminNotificationService::new(&state.db)
        .by_job(job_id, pagination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::<AdminNotificationDto>::from(notifications)),
    ))
}

/// Ledger entries within an inclusive time range
#[utoipa::path(
    get,
    path = "/api/admin/notifications/by-date-range",
    tag = ADMIN_NOTIFICATION_TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Ledger entries in the range, newest first", body = Vec<AdminNotificationDto>),
        (status = 400, description = "Start is after end", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, Error> {
    let notifications = AdminNotificationService::new(&state.db)
        .by_date_range(range.start, range.end)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(notifications))))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/by-read-status",
    tag = ADMIN_NOTIFICATION_TAG,
    params(ReadStatusQuery, PageParams),
    responses(
        (status = 200, description = "Page of ledger entries with the read state", body = PageDto<AdminNotificationDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_notifications_by_read_status(
    State(state): State<AppState>,
    Query(query): Query<ReadStatusQuery>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::try_from(page)?;

    let notifications = AdminNotificationService::new(&state.db)
        .by_read_status(query.is_read, pagination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::<AdminNotificationDto>::from(notifications)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/unread",
    tag = ADMIN_NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread ledger entries, newest first", body = Vec<AdminNotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unread_admin_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let notifications = AdminNotificationService::new(&state.db).unread().await?;

    Ok((StatusCode::OK, Json(to_dtos(notifications))))
}

#[utoipa::path(
    get,
    path = "/api/admin/notifications/unread/count",
    tag = ADMIN_NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of unread ledger entries", body = CountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_unread_admin_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let count = AdminNotificationService::new(&state.db)
        .unread_count()
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/{notification_id}/read",
    tag = ADMIN_NOTIFICATION_TAG,
    params(("notification_id" = i32, Path, description = "Ledger entry id")),
    responses(
        (status = 200, description = "Entry marked as read"),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_admin_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AdminNotificationService::new(&state.db)
        .mark_as_read(notification_id)
        .await?;

    Ok(StatusCode::OK)
}

/// Mark a batch of ledger entries as read
///
/// Unknown ids are ignored and an empty list changes nothing.
#[utoipa::path(
    put,
    path = "/api/admin/notifications/read",
    tag = ADMIN_NOTIFICATION_TAG,
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Number of entries marked as read", body = UpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_admin_notifications_read(
    State(state): State<AppState>,
    Json(request): Json<MarkReadDto>,
) -> Result<impl IntoResponse, Error> {
    let updated = AdminNotificationService::new(&state.db)
        .mark_many_as_read(&request.ids)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated })))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/read/all",
    tag = ADMIN_NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of entries marked as read", body = UpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_admin_notifications_read(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let updated = AdminNotificationService::new(&state.db)
        .mark_all_as_read()
        .await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated })))
}
