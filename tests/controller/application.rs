//! Tests for the job application endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::{ApplicationStatus, NotificationType};
use jobboard::{
    model::application::{ApplicationDto, ApplicationStatusQuery, ApplyDto},
    server::controller::application::{
        apply, get_application, list_applications_by_applicant, mark_application_viewed,
        update_application_status,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn apply_request(job_id: i32, applicant_id: i32) -> ApplyDto {
    ApplyDto {
        job_id,
        applicant_id,
        cover_letter: Some("I write Rust".to_string()),
        resume_url: Some("https://example.com/cv.pdf".to_string()),
    }
}

fn status_query(status: &str) -> Query<ApplicationStatusQuery> {
    Query(ApplicationStatusQuery {
        status: status.to_string(),
    })
}

/// Expect the first application to succeed and a repeat to be rejected
///
/// Expected: 200 OK then 400 Bad Request, apply count of 1
#[tokio::test]
async fn second_application_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let first = into_response(
        apply(
            State(test.app_state()),
            Json(apply_request(job.id, applicant.id)),
        )
        .await,
    );
    let second = into_response(
        apply(
            State(test.app_state()),
            Json(apply_request(job.id, applicant.id)),
        )
        .await,
    );

    assert_eq!(first.status(), StatusCode::OK);
    let application: ApplicationDto = json_body(first).await;
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.applicant_email.as_deref(), Some("alice@example.com"));
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::Job::find_by_id(job.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.apply_count, 1);

    Ok(())
}

/// Expect 404 when applying for an unknown job
#[tokio::test]
async fn apply_for_unknown_job_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let applicant = test.user().insert_applicant("alice").await?;

    let resp = into_response(
        apply(State(test.app_state()), Json(apply_request(5, applicant.id))).await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect approval to notify both parties and attempt one email
#[tokio::test]
async fn approve_notifies_and_emails_applicant() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_email_endpoint(200, 1)
        .build()
        .await?;
    let (acme_user, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let application = test
        .application()
        .insert_application(&job, applicant.id)
        .await?;

    let resp = into_response(
        update_application_status(
            State(test.app_state_with_email_webhook()),
            Path(application.id),
            status_query("APPROVED"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ApplicationDto = json_body(resp).await;
    assert_eq!(updated.status, ApplicationStatus::Approved);

    let notifications = entity::prelude::Notification::find().all(&test.db).await?;
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().any(|n| n.user_id == applicant.id
        && n.notification_type == NotificationType::ApplicationStatus));
    assert!(notifications.iter().any(|n| n.user_id == acme_user.id
        && n.notification_type == NotificationType::JobStatus));

    test.assert_mocks();

    Ok(())
}

/// Expect a failing email webhook not to fail the request
#[tokio::test]
async fn email_failure_still_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_email_endpoint(503, 1)
        .build()
        .await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let application = test
        .application()
        .insert_application(&job, applicant.id)
        .await?;

    let resp = into_response(
        update_application_status(
            State(test.app_state_with_email_webhook()),
            Path(application.id),
            status_query("REJECTED"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);

    let resp = into_response(get_application(State(test.app_state()), Path(application.id)).await);
    let stored: ApplicationDto = json_body(resp).await;
    assert_eq!(stored.status, ApplicationStatus::Rejected);

    test.assert_mocks();

    Ok(())
}

/// Expect an unknown status value to be 400 with nothing sent
#[tokio::test]
async fn unknown_status_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_email_endpoint(200, 0)
        .build()
        .await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let application = test
        .application()
        .insert_application(&job, applicant.id)
        .await?;

    let resp = into_response(
        update_application_status(
            State(test.app_state_with_email_webhook()),
            Path(application.id),
            status_query("HIRED"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect mark-as-viewed to set the flag and the applicant listing to include it
#[tokio::test]
async fn mark_viewed_sets_flag() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let applicant = test.user().insert_applicant("alice").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let application = test
        .application()
        .insert_application(&job, applicant.id)
        .await?;

    let resp = into_response(
        mark_application_viewed(State(test.app_state()), Path(application.id)).await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = into_response(
        list_applications_by_applicant(State(test.app_state()), Path(applicant.id)).await,
    );
    let applications: Vec<ApplicationDto> = json_body(resp).await;
    assert_eq!(applications.len(), 1);
    assert!(applications[0].employer_viewed);

    Ok(())
}

/// Expect 404 for an unknown application
#[tokio::test]
async fn mark_viewed_unknown_application_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(mark_application_viewed(State(test.app_state()), Path(3)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
