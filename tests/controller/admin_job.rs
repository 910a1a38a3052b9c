//! Tests for the job moderation endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::{AdminAction, JobStatus};
use jobboard::{
    model::{
        api::{PageDto, PageParams},
        job::{AdminQuery, JobDto, ProcessJobDto, RejectJobDto},
    },
    server::controller::admin_job::{
        approve_job, delete_job, list_all_jobs_by_status, list_pending_jobs, process_job,
        reject_job,
    },
};
use sea_orm::EntityTrait;

use super::*;

/// Expect REJECTED with a blank reason to fail and leave the job PENDING
///
/// Expected: 400 Bad Request and no ledger entry
#[tokio::test]
async fn process_reject_with_empty_reason_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        process_job(
            State(test.app_state()),
            Path(job.id),
            Json(ProcessJobDto {
                status: "REJECTED".to_string(),
                admin_id: admin.id,
                rejection_reason: Some(String::new()),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::Job::find_by_id(job.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, JobStatus::Pending);
    assert!(entity::prelude::AdminNotification::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect REJECTED with a reason to store it and append one REJECT entry
#[tokio::test]
async fn process_reject_with_reason_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        process_job(
            State(test.app_state()),
            Path(job.id),
            Json(ProcessJobDto {
                status: "rejected".to_string(),
                admin_id: admin.id,
                rejection_reason: Some("Incomplete description".to_string()),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let processed: JobDto = json_body(resp).await;
    assert_eq!(processed.status, JobStatus::Rejected);
    assert_eq!(
        processed.rejection_reason.as_deref(),
        Some("Incomplete description")
    );
    assert_eq!(processed.processed_by, Some(admin.id));

    let ledger = entity::prelude::AdminNotification::find()
        .all(&test.db)
        .await?;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].action_type, AdminAction::Reject);

    Ok(())
}

/// Expect 400 for a status outside the enum
#[tokio::test]
async fn process_with_unknown_status_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        process_job(
            State(test.app_state()),
            Path(job.id),
            Json(ProcessJobDto {
                status: "PUBLISHED".to_string(),
                admin_id: admin.id,
                rejection_reason: None,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect approval by an unknown admin to be 404
#[tokio::test]
async fn approve_with_unknown_admin_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        approve_job(
            State(test.app_state()),
            Path(job.id),
            Query(AdminQuery { admin_id: 404 }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect approval to move the job out of the pending listing
#[tokio::test]
async fn approve_removes_job_from_pending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    test.job().insert_job(acme.id, "Still pending").await?;

    let resp = into_response(
        approve_job(
            State(test.app_state()),
            Path(job.id),
            Query(AdminQuery { admin_id: admin.id }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = into_response(
        list_pending_jobs(State(test.app_state()), Query(PageParams::default())).await,
    );
    let pending: PageDto<JobDto> = json_body(resp).await;
    assert_eq!(pending.total_elements, 1);
    assert_eq!(pending.content[0].title, "Still pending");

    Ok(())
}

/// Expect the reject endpoint to require a reason
#[tokio::test]
async fn reject_with_blank_reason_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        reject_job(
            State(test.app_state()),
            Path(job.id),
            Json(RejectJobDto {
                admin_id: admin.id,
                rejection_reason: "   ".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect deletion to deactivate the job and list it under DELETED
#[tokio::test]
async fn delete_deactivates_job() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let admin = test.user().insert_admin("admin").await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test
        .job()
        .insert_job_with_status(acme.id, "Backend Engineer", JobStatus::Approved)
        .await?;

    let resp = into_response(
        delete_job(
            State(test.app_state()),
            Path(job.id),
            Query(AdminQuery { admin_id: admin.id }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: JobDto = json_body(resp).await;
    assert_eq!(deleted.status, JobStatus::Deleted);
    assert!(!deleted.is_active);

    let resp = into_response(
        list_all_jobs_by_status(State(test.app_state()), Path("deleted".to_string())).await,
    );
    let jobs: Vec<JobDto> = json_body(resp).await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, job.id);

    Ok(())
}
