use chrono::Utc;
use entity::sea_orm_active_enums::{ApplicationStatus, NotificationType};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        job::JobRepository,
        job_application::JobApplicationRepository,
        notification::{NewNotification, NotificationRepository},
        user::UserRepository,
    },
    error::{not_found::NotFoundError, Error},
    model::db::{EmployerModel, JobApplicationModel, JobModel, NotificationModel, UserModel},
};

fn outcome(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Approved => "accepted",
        _ => "rejected",
    }
}

/// Notification telling the applicant their application was decided.
pub fn applicant_status_notification(
    application: &JobApplicationModel,
    job: &JobModel,
    employer: &EmployerModel,
) -> NewNotification {
    NewNotification {
        user_id: application.applicant_id,
        title: "Application status update".to_string(),
        content: format!(
            "Your application for {} at {} has been {}",
            job.title,
            employer.company_name,
            outcome(application.status)
        ),
        notification_type: NotificationType::ApplicationStatus,
        related_application_id: Some(application.id),
    }
}

/// Notification acknowledging the same decision to the employer's user.
pub fn employer_status_notification(
    application: &JobApplicationModel,
    job: &JobModel,
    applicant: &UserModel,
) -> NewNotification {
    NewNotification {
        user_id: application.employer_id,
        title: "Application decision recorded".to_string(),
        content: format!(
            "The application of {} for \"{}\" has been {}",
            applicant.full_name,
            job.title,
            outcome(application.status)
        ),
        notification_type: NotificationType::JobStatus,
        related_application_id: Some(application.id),
    }
}

pub fn new_application_notification(
    employer_user_id: i32,
    application: &JobApplicationModel,
    job: &JobModel,
    applicant: &UserModel,
) -> NewNotification {
    NewNotification {
        user_id: employer_user_id,
        title: "New applicant".to_string(),
        content: format!("{} applied for {}", applicant.full_name, job.title),
        notification_type: NotificationType::NewApplication,
        related_application_id: Some(application.id),
    }
}

/// Persists both status notifications for a decided application.
///
/// Runs on the caller's connection so the inserts join the status update's transaction.
pub async fn record_status_notifications<C: ConnectionTrait>(
    db: &C,
    application: &JobApplicationModel,
    job: &JobModel,
    applicant: &UserModel,
    employer: &EmployerModel,
) -> Result<(), DbErr> {
    let repo = NotificationRepository::new(db);
    let now = Utc::now().naive_utc();

    repo.create(applicant_status_notification(application, job, employer), now)
        .await?;
    repo.create(employer_status_notification(application, job, applicant), now)
        .await?;

    Ok(())
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<NotificationModel>, Error> {
        Ok(NotificationRepository::new(self.db)
            .find_by_user(user_id)
            .await?)
    }

    pub async fn unread_for_user(&self, user_id: i32) -> Result<Vec<NotificationModel>, Error> {
        Ok(NotificationRepository::new(self.db)
            .find_unread_by_user(user_id)
            .await?)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, Error> {
        Ok(NotificationRepository::new(self.db)
            .count_unread_by_user(user_id)
            .await?)
    }

    pub async fn mark_as_read(&self, notification_id: i32) -> Result<NotificationModel, Error> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .get_by_id(notification_id)
            .await?
            .ok_or(NotFoundError::Notification(notification_id))?;

        Ok(repo.mark_read(notification).await?)
    }

    pub async fn mark_all_as_read(&self, user_id: i32) -> Result<u64, Error> {
        let updated = NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?;

        tracing::debug!(user_id, updated, "Marked notifications as read");

        Ok(updated)
    }

    /// Tells an employer's user about a new application.
    ///
    /// # Returns
    /// - `Ok(NotificationModel)`: The created notification
    /// - `Err(Error::NotFoundError)`: User, application, job or applicant does not exist
    pub async fn notify_new_application(
        &self,
        employer_user_id: i32,
        application_id: i32,
    ) -> Result<NotificationModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(employer_user_id)
            .await?
            .ok_or(NotFoundError::User(employer_user_id))?;
        let application = JobApplicationRepository::new(self.db)
            .get_by_id(application_id)
            .await?
            .ok_or(NotFoundError::Application(application_id))?;
        let job = JobRepository::new(self.db)
            .get_by_id(application.job_id)
            .await?
            .ok_or(NotFoundError::Job(application.job_id))?;
        let applicant = UserRepository::new(self.db)
            .get_by_id(application.applicant_id)
            .await?
            .ok_or(NotFoundError::User(application.applicant_id))?;

        let notification = NotificationRepository::new(self.db)
            .create(
                new_application_notification(employer_user_id, &application, &job, &applicant),
                Utc::now().naive_utc(),
            )
            .await?;

        tracing::info!(
            employer_user_id,
            application_id,
            "Notified employer about new application"
        );

        Ok(notification)
    }

}
