//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// A registered account; `role` distinguishes applicants, employers and admins.
pub type UserModel = entity::user::Model;

/// Company profile; its id is the owning user's id.
pub type EmployerModel = entity::employer::Model;

/// A job posting and its moderation state.
pub type JobModel = entity::job::Model;

/// An applicant's submission against a job.
pub type JobApplicationModel = entity::job_application::Model;

/// Audit entry of the admin notification ledger.
pub type AdminNotificationModel = entity::admin_notification::Model;

/// End-user facing notification.
pub type NotificationModel = entity::notification::Model;
