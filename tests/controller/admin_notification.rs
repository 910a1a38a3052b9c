//! Tests for the admin notification ledger endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, NaiveDate};
use entity::sea_orm_active_enums::AdminAction;
use jobboard::{
    model::{
        admin_notification::{
            ActionTypeQuery, AdminNotificationDto, CreateAdminNotificationDto, DateRangeQuery,
            MarkReadDto,
        },
        api::{CountDto, PageDto, PageParams, UpdatedDto},
    },
    server::controller::admin_notification::{
        count_unread_admin_notifications, create_admin_notification,
        list_admin_notifications_by_date_range, list_admin_notifications_by_type,
        list_recent_admin_notifications, mark_admin_notification_read,
        mark_admin_notifications_read,
    },
};

use super::*;

/// Expect CREATE entries to start unread and any other action to start read
#[tokio::test]
async fn create_applies_read_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;

    let mut created = Vec::new();
    for action_type in ["CREATE", "approve"] {
        let resp = into_response(
            create_admin_notification(
                State(test.app_state()),
                Json(CreateAdminNotificationDto {
                    action_type: action_type.to_string(),
                    user_id: admin.id,
                    description: Some("Manual entry".to_string()),
                    job_id: None,
                    job_title: None,
                    timestamp: None,
                }),
            )
            .await,
        );
        assert_eq!(resp.status(), StatusCode::OK);
        created.push(json_body::<AdminNotificationDto>(resp).await);
    }

    assert_eq!(created[0].action_type, AdminAction::Create);
    assert!(!created[0].is_read);
    assert_eq!(created[1].action_type, AdminAction::Approve);
    assert!(created[1].is_read);
    assert_eq!(created[0].username, "admin");

    Ok(())
}

/// Expect 400 for an unknown action type
#[tokio::test]
async fn create_with_unknown_action_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;

    let resp = into_response(
        create_admin_notification(
            State(test.app_state()),
            Json(CreateAdminNotificationDto {
                action_type: "ARCHIVE".to_string(),
                user_id: admin.id,
                description: None,
                job_id: None,
                job_title: None,
                timestamp: None,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the type filter to page over matching entries only
#[tokio::test]
async fn list_by_type_filters_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    for action in [AdminAction::Create, AdminAction::Reject, AdminAction::Reject] {
        test.notification()
            .insert_admin_notification(action, &admin, None)
            .await?;
    }

    let resp = into_response(
        list_admin_notifications_by_type(
            State(test.app_state()),
            Query(ActionTypeQuery {
                action_type: "REJECT".to_string(),
            }),
            Query(PageParams::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<AdminNotificationDto> = json_body(resp).await;
    assert_eq!(page.total_elements, 2);
    assert!(page
        .content
        .iter()
        .all(|n| n.action_type == AdminAction::Reject));

    Ok(())
}

/// Expect at most 10 recent entries
#[tokio::test]
async fn recent_is_limited_to_ten() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    for _ in 0..12 {
        test.notification()
            .insert_admin_notification(AdminAction::Update, &admin, None)
            .await?;
    }

    let resp = into_response(list_recent_admin_notifications(State(test.app_state())).await);

    let recent: Vec<AdminNotificationDto> = json_body(resp).await;
    assert_eq!(recent.len(), 10);

    Ok(())
}

/// Expect both bounds to be inclusive and a reversed range to be rejected
#[tokio::test]
async fn date_range_is_inclusive() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let end = start + Duration::hours(2);
    for timestamp in [start - Duration::seconds(1), start, end, end + Duration::seconds(1)] {
        test.notification()
            .insert_admin_notification_at(AdminAction::Update, &admin, None, timestamp)
            .await?;
    }

    let resp = into_response(
        list_admin_notifications_by_date_range(
            State(test.app_state()),
            Query(DateRangeQuery { start, end }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<AdminNotificationDto> = json_body(resp).await;
    assert_eq!(entries.len(), 2);

    let resp = into_response(
        list_admin_notifications_by_date_range(
            State(test.app_state()),
            Query(DateRangeQuery {
                start: end,
                end: start,
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect single and batch mark-read to lower the unread count
#[tokio::test]
async fn mark_read_lowers_unread_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        let entry = test
            .notification()
            .insert_admin_notification(AdminAction::Create, &admin, None)
            .await?;
        ids.push(entry.id);
    }

    let resp = into_response(mark_admin_notification_read(State(test.app_state()), Path(ids[0])).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = into_response(
        mark_admin_notifications_read(
            State(test.app_state()),
            Json(MarkReadDto {
                ids: vec![ids[1], 999],
            }),
        )
        .await,
    );
    let updated: UpdatedDto = json_body(resp).await;
    assert_eq!(updated.updated, 1);

    let resp = into_response(
        mark_admin_notifications_read(State(test.app_state()), Json(MarkReadDto::default())).await,
    );
    let updated: UpdatedDto = json_body(resp).await;
    assert_eq!(updated.updated, 0);

    let resp = into_response(count_unread_admin_notifications(State(test.app_state())).await);
    let count: CountDto = json_body(resp).await;
    assert_eq!(count.count, 1);

    Ok(())
}

/// Expect 404 when marking an unknown entry read
#[tokio::test]
async fn mark_unknown_entry_read_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(mark_admin_notification_read(State(test.app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
