pub use super::admin_notification::Entity as AdminNotification;
pub use super::employer::Entity as Employer;
pub use super::job::Entity as Job;
pub use super::job_application::Entity as JobApplication;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
