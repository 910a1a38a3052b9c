use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto, UpdatedDto},
        notification::{NotificationDto, NotifyNewApplicationDto},
    },
    server::{error::Error, model::app::AppState, service::notification::NotificationService},
};

pub static NOTIFICATION_TAG: &str = "notification";

/// Notify an employer about a new application
#[utoipa::path(
    post,
    path = "/api/notifications/employer",
    tag = NOTIFICATION_TAG,
    request_body = NotifyNewApplicationDto,
    responses(
        (status = 200, description = "Created notification", body = NotificationDto),
        (status = 404, description = "User or application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notify_employer(
    State(state): State<AppState>,
    Json(request): Json<NotifyNewApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let notification = NotificationService::new(&state.db)
        .notify_new_application(request.employer_user_id, request.application_id)
        .await?;

    Ok((StatusCode::OK, Json(NotificationDto::from(notification))))
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}",
    tag = NOTIFICATION_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's notifications, newest first", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notifications = NotificationService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    let notifications: Vec<NotificationDto> = notifications
        .into_iter()
        .map(NotificationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}/unread",
    tag = NOTIFICATION_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's unread notifications, newest first", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unread_user_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notifications = NotificationService::new(&state.db)
        .unread_for_user(user_id)
        .await?;

    let notifications: Vec<NotificationDto> = notifications
        .into_iter()
        .map(NotificationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}/unread/count",
    tag = NOTIFICATION_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Number of unread notifications", body = CountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_unread_user_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let count = NotificationService::new(&state.db)
        .unread_count(user_id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(("notification_id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notification = NotificationService::new(&state.db)
        .mark_as_read(notification_id)
        .await?;

    Ok((StatusCode::OK, Json(NotificationDto::from(notification))))
}

#[utoipa::path(
    put,
    path = "/api/notifications/user/{user_id}/read-all",
    tag = NOTIFICATION_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Number of notifications marked as read", body = UpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_user_notifications_read(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let updated = NotificationService::new(&state.db)
        .mark_all_as_read(user_id)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated })))
}
