//! Tests for the job endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::{AdminAction, JobStatus};
use futures::future::join_all;
use jobboard::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        job::{CreateJobDto, JobDto, JobSearchQuery, JobStatisticsDto, UpdateJobDto},
    },
    server::controller::job::{
        create_job, get_job, get_job_statistics, increment_view_count, list_jobs,
        list_jobs_by_status, search_jobs, update_job,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn create_request(user_id: i32, title: &str) -> CreateJobDto {
    CreateJobDto {
        user_id,
        title: title.to_string(),
        description: Some("Build services".to_string()),
        requirement: Some("Rust".to_string()),
        location: Some("Berlin".to_string()),
        job_type: None,
        salary_min: Some(50_000.0),
        salary_max: Some(80_000.0),
        salary_currency: Some("EUR".to_string()),
        expire_at: None,
        is_salary_public: None,
        image_url: None,
        status: None,
    }
}

fn update_request(employer_id: i32, title: &str) -> UpdateJobDto {
    UpdateJobDto {
        employer_id,
        title: title.to_string(),
        description: None,
        requirement: None,
        location: None,
        job_type: None,
        salary_min: None,
        salary_max: None,
        salary_currency: None,
        expire_at: None,
        is_salary_public: None,
        image_url: None,
    }
}

/// Expect a created job to be PENDING with zero counters even when APPROVED was requested
///
/// Expected: 200 OK and one CREATE ledger entry
#[tokio::test]
async fn create_job_forces_pending_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (user, _) = test.user().insert_employer("acme", "Acme").await?;

    let mut request = create_request(user.id, "Backend Engineer");
    request.status = Some("APPROVED".to_string());

    let resp = into_response(create_job(State(test.app_state()), Json(request)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let job: JobDto = json_body(resp).await;
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.view_count, 0);
    assert_eq!(job.apply_count, 0);
    assert!(job.is_salary_public);

    let ledger = entity::prelude::AdminNotification::find().all(&test.db).await?;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].action_type, AdminAction::Create);
    assert_eq!(ledger[0].job_id, Some(job.id));

    Ok(())
}

/// Expect 404 when the user has no employer profile
#[tokio::test]
async fn create_job_without_employer_profile_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let user = test.user().insert_applicant("alice").await?;

    let resp = into_response(
        create_job(
            State(test.app_state()),
            Json(create_request(user.id, "Backend Engineer")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.contains(&user.id.to_string()));

    Ok(())
}

/// Expect 403 when another employer updates the job
#[tokio::test]
async fn update_job_by_other_employer_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let (_, globex) = test.user().insert_employer("globex", "Globex").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;

    let resp = into_response(
        update_job(
            State(test.app_state()),
            Path(job.id),
            Json(update_request(globex.id, "Hijacked")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = into_response(get_job(State(test.app_state()), Path(job.id)).await);
    let stored: JobDto = json_body(resp).await;
    assert_eq!(stored.title, "Backend Engineer");

    Ok(())
}

/// Expect the owner to update the title while status is kept
#[tokio::test]
async fn update_job_by_owner_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test
        .job()
        .insert_job_with_status(acme.id, "Backend Engineer", JobStatus::Approved)
        .await?;

    let resp = into_response(
        update_job(
            State(test.app_state()),
            Path(job.id),
            Json(update_request(acme.id, "Senior Backend Engineer")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: JobDto = json_body(resp).await;
    assert_eq!(updated.title, "Senior Backend Engineer");
    assert_eq!(updated.status, JobStatus::Approved);
    assert_eq!(updated.expire_at, job.expire_at);

    Ok(())
}

/// Expect 404 for an unknown job
#[tokio::test]
async fn get_unknown_job_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(get_job(State(test.app_state()), Path(5)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect concurrent view requests to each be counted
#[tokio::test]
async fn concurrent_views_are_all_counted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    let state = test.app_state();

    let results = join_all(
        (0..20).map(|_| increment_view_count(State(state.clone()), Path(job.id))),
    )
    .await;

    assert!(results.into_iter().all(|r| r.is_ok()));

    let resp = into_response(get_job(State(test.app_state()), Path(job.id)).await);
    let stored: JobDto = json_body(resp).await;
    assert_eq!(stored.view_count, 20);

    Ok(())
}

/// Expect 400 for a page size out of range
#[tokio::test]
async fn list_jobs_rejects_invalid_page_size() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(
        list_jobs(
            State(test.app_state()),
            Query(PageParams {
                page: None,
                size: Some(0),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect pages to report totals across all pages
#[tokio::test]
async fn list_jobs_paginates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    for i in 0..5 {
        test.job().insert_job(acme.id, &format!("Job {}", i)).await?;
    }

    let resp = into_response(
        list_jobs(
            State(test.app_state()),
            Query(PageParams {
                page: Some(1),
                size: Some(2),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<JobDto> = json_body(resp).await;
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

/// Expect 400 for an unknown status in the path
#[tokio::test]
async fn list_jobs_by_unknown_status_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;

    let resp = into_response(
        list_jobs_by_status(
            State(test.app_state()),
            Path("ARCHIVED".to_string()),
            Query(PageParams::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the salary filter to bound the job's own range
#[tokio::test]
async fn search_filters_by_salary_bounds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    test.job()
        .insert_job_with_salary(acme.id, "Inside", "Berlin", 60_000.0, 70_000.0)
        .await?;
    test.job()
        .insert_job_with_salary(acme.id, "Too wide", "Berlin", 40_000.0, 90_000.0)
        .await?;

    let resp = into_response(
        search_jobs(
            State(test.app_state()),
            Query(JobSearchQuery {
                min_salary: Some(50_000.0),
                max_salary: Some(80_000.0),
                ..Default::default()
            }),
            Query(PageParams::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<JobDto> = json_body(resp).await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].title, "Inside");

    Ok(())
}

/// Expect totals and per-status counts
#[tokio::test]
async fn statistics_sum_counters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (_, acme) = test.user().insert_employer("acme", "Acme").await?;
    let job = test.job().insert_job(acme.id, "Backend Engineer").await?;
    test.job()
        .insert_job_with_status(acme.id, "Frontend Engineer", JobStatus::Approved)
        .await?;
    for _ in 0..3 {
        increment_view_count(State(test.app_state()), Path(job.id))
            .await
            .unwrap();
    }

    let resp = into_response(get_job_statistics(State(test.app_state())).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let statistics: JobStatisticsDto = json_body(resp).await;
    assert_eq!(statistics.total_views, 3);
    assert_eq!(statistics.total_applies, 0);
    let pending = statistics
        .status_counts
        .iter()
        .find(|c| c.status == JobStatus::Pending)
        .map(|c| c.count);
    assert_eq!(pending, Some(1));

    Ok(())
}
