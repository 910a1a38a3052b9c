//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main jobboard crate.

pub type UserModel = entity::user::Model;

pub type EmployerModel = entity::employer::Model;

pub type JobModel = entity::job::Model;

pub type JobApplicationModel = entity::job_application::Model;

pub type AdminNotificationModel = entity::admin_notification::Model;

pub type NotificationModel = entity::notification::Model;
