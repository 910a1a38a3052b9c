//! Tests for the user notification endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::NotificationType;
use jobboard::{
    model::{
        api::{CountDto, UpdatedDto},
        notification::{NotificationDto, NotifyNewApplicationDto},
    },
    server::controller::notification::{
        count_unread_user_notifications, list_unread_user_notifications,
        list_user_notifications, mark_all_user_notifications_read, mark_notification_read,
        notify_employer,
    },
};

use super::*;

/// Expect a NEW_APPLICATION notification for the employer's user
#[tokio::test]
async fn notify_employer_creates_notification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (acme_user, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let application = test
        .application()
        .insert_application(&job, applicant.id)
        .await?;

    let resp = into_response(
        notify_employer(
            State(test.app_state()),
            Json(NotifyNewApplicationDto {
                employer_user_id: acme_user.id,
                application_id: application.id,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let notification: NotificationDto = json_body(resp).await;
    assert_eq!(notification.user_id, acme_user.id);
    assert_eq!(
        notification.notification_type,
        NotificationType::NewApplication
    );

    let resp = into_response(
        list_user_notifications(State(test.app_state()), Path(acme_user.id)).await,
    );
    let notifications: Vec<NotificationDto> = json_body(resp).await;
    assert_eq!(notifications.len(), 1);

    Ok(())
}

/// Expect 404 when the application does not exist
#[tokio::test]
async fn notify_employer_unknown_application_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (acme_user, _) = test.user().insert_employer("acme", "Acme").await?;

    let resp = into_response(
        notify_employer(
            State(test.app_state()),
            Json(NotifyNewApplicationDto {
                employer_user_id: acme_user.id,
                application_id: 77,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect reading one notification to lower the unread count and list
#[tokio::test]
async fn mark_read_updates_unread_views() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let user = test.user().insert_applicant("alice").await?;
    let first = test
        .notification()
        .insert_notification(user.id, NotificationType::ApplicationStatus)
        .await?;
    test.notification()
        .insert_notification(user.id, NotificationType::ApplicationStatus)
        .await?;

    let resp = into_response(mark_notification_read(State(test.app_state()), Path(first.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let read: NotificationDto = json_body(resp).await;
    assert!(read.is_read);

    let resp = into_response(
        count_unread_user_notifications(State(test.app_state()), Path(user.id)).await,
    );
    let count: CountDto = json_body(resp).await;
    assert_eq!(count.count, 1);

    let resp = into_response(
        list_unread_user_notifications(State(test.app_state()), Path(user.id)).await,
    );
    let unread: Vec<NotificationDto> = json_body(resp).await;
    assert_eq!(unread.len(), 1);
    assert_ne!(unread[0].id, first.id);

    Ok(())
}

/// Expect 404 for an unknown notification
#[tokio::test]
async fn mark_read_unknown_notification_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(mark_notification_read(State(test.app_state()), Path(9)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect read-all to report how many notifications changed
#[tokio::test]
async fn mark_all_read_reports_updated() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let user = test.user().insert_applicant("alice").await?;
    for _ in 0..3 {
        test.notification()
            .insert_notification(user.id, NotificationType::JobStatus)
            .await?;
    }

    let resp = into_response(
        mark_all_user_notifications_read(State(test.app_state()), Path(user.id)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: UpdatedDto = json_body(resp).await;
    assert_eq!(updated.updated, 3);

    Ok(())
}
