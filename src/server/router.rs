//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint with its utoipa annotation and serves Swagger
//! UI at `/api/docs`, with the generated OpenAPI document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/jobs/**` - Job posting, lookup, search, view counting and statistics
/// - `/api/admin/jobs/**` - Job moderation by an explicitly identified admin
/// - `/api/applications/**` - Applying for jobs and the application workflow
/// - `/api/notifications/**` - Per-user notifications
/// - `/api/admin/notifications/**` - The admin notification ledger
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, email };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Job Board", description = "Job board API"), tags(
        (name = controller::job::JOB_TAG, description = "Job posting and search API routes"),
        (name = controller::admin_job::ADMIN_JOB_TAG, description = "Job moderation API routes"),
        (name = controller::application::APPLICATION_TAG, description = "Job application API routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "User notification API routes"),
        (name = controller::admin_notification::ADMIN_NOTIFICATION_TAG, description = "Admin notification ledger API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Jobs
        .routes(routes!(controller::job::list_jobs, controller::job::create_job))
        .routes(routes!(controller::job::list_approved_jobs))
        .routes(routes!(controller::job::get_job, controller::job::update_job))
        .routes(routes!(controller::job::increment_view_count))
        .routes(routes!(controller::job::search_jobs))
        .routes(routes!(controller::job::search_jobs_by_status))
        .routes(routes!(controller::job::list_jobs_by_user))
        .routes(routes!(controller::job::list_jobs_by_status))
        .routes(routes!(controller::job::get_job_statistics))
        // Job moderation
        .routes(routes!(controller::admin_job::list_pending_jobs))
        .routes(routes!(controller::admin_job::list_all_jobs_by_status))
        .routes(routes!(controller::admin_job::process_job))
        .routes(routes!(controller::admin_job::approve_job))
        .routes(routes!(controller::admin_job::reject_job))
        .routes(routes!(controller::admin_job::delete_job))
        // Applications
        .routes(routes!(controller::application::apply))
        .routes(routes!(controller::application::get_application))
        .routes(routes!(
            controller::application::list_applications_by_applicant
        ))
        .routes(routes!(controller::application::list_applications_by_job))
        .routes(routes!(
            controller::application::list_applications_by_employer
        ))
        .routes(routes!(
            controller::application::update_application_status
        ))
        .routes(routes!(controller::application::mark_application_viewed))
        // Notifications
        .routes(routes!(controller::notification::notify_employer))
        .routes(routes!(controller::notification::list_user_notifications))
        .routes(routes!(
            controller::notification::list_unread_user_notifications
        ))
        .routes(routes!(
            controller::notification::count_unread_user_notifications
        ))
        .routes(routes!(controller::notification::mark_notification_read))
        .routes(routes!(
            controller::notification::mark_all_user_notifications_read
        ))
        // Admin notification ledger
        .routes(routes!(
            controller::admin_notification::list_admin_notifications,
            controller::admin_notification::create_admin_notification
        ))
        .routes(routes!(
            controller::admin_notification::list_recent_admin_notifications
        ))
        .routes(routes!(
            controller::admin_notification::list_admin_notifications_by_type
        ))
        .routes(routes!(
            controller::admin_notification::list_admin_notifications_by_user
        ))
        .routes(routes!(
            controller::admin_notification::list_admin_notifications_by_job
        ))
        .routes(routes!(
            controller::admin_notification::list_admin_notifications_by_date_range
        ))
        .routes(routes!(
            controller::admin_notification::list_admin_notifications_by_read_status
        ))
        .routes(routes!(
            controller::admin_notification::list_unread_admin_notifications
        ))
        .routes(routes!(
            controller::admin_notification::count_unread_admin_notifications
        ))
        .routes(routes!(
            controller::admin_notification::mark_admin_notification_read
        ))
        .routes(routes!(
            controller::admin_notification::mark_admin_notifications_read
        ))
        .routes(routes!(
            controller::admin_notification::mark_all_admin_notifications_read
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
