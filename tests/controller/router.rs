//! Tests for the assembled router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use entity::sea_orm_active_enums::JobStatus;
use jobboard::{
    model::job::{JobDto, JobStatisticsDto},
    server::router::routes,
};
use tower::ServiceExt;

use super::*;

/// Expect a request to be routed to its handler through the full router
#[tokio::test]
async fn routes_statistics_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/jobs/statistics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let statistics: JobStatisticsDto = json_body(resp).await;
    assert_eq!(statistics.total_views, 0);
    assert!(statistics.status_counts.is_empty());

    Ok(())
}

/// Expect a caller-supplied status that names no job status to be ignored on creation
///
/// Expected: 200 OK with a PENDING job
#[tokio::test]
async fn create_job_ignores_unknown_status_value() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let (user, _) = test.user().insert_employer("acme", "Acme").await?;
    let app = routes().with_state(test.app_state());

    let body = format!(
        r#"{{"user_id":{},"title":"Backend Engineer","status":"bogus"}}"#,
        user.id
    );
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/jobs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let job: JobDto = json_body(resp).await;
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.title, "Backend Engineer");

    Ok(())
}

/// Expect query string pagination errors to surface as 400
#[tokio::test]
async fn routes_invalid_pagination_to_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/notifications?page=-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
