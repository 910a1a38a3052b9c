use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{AdminAction, JobStatus};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{admin_notification::AdminNotificationRepository, user::UserRepository},
    error::{not_found::NotFoundError, validation::ValidationError, Error},
    model::{
        admin_notification::{AdminNotificationFilter, NewAdminNotification},
        db::{AdminNotificationModel, JobModel},
        page::{Page, Pagination},
    },
};

/// Number of entries returned by [`AdminNotificationService::recent`].
pub const RECENT_LIMIT: u64 = 10;

/// Ledger action recorded for a job moving to `status`.
pub fn action_for_status(status: JobStatus) -> AdminAction {
    match status {
        JobStatus::Approved => AdminAction::Approve,
        JobStatus::Rejected => AdminAction::Reject,
        JobStatus::Deleted => AdminAction::Delete,
        JobStatus::Pending => AdminAction::Update,
    }
}

/// Human readable description of a moderation decision on `job`.
pub fn describe_status_change(
    job: &JobModel,
    old_status: JobStatus,
    new_status: JobStatus,
    rejection_reason: Option<&str>,
) -> String {
    match new_status {
        JobStatus::Approved => format!("Job approved: {}", job.title),
        JobStatus::Rejected => format!(
            "Job rejected: {}. Reason: {}",
            job.title,
            rejection_reason.unwrap_or_default()
        ),
        JobStatus::Deleted => format!("Job deleted: {}", job.title),
        JobStatus::Pending => format!(
            "Job status changed from {} to {}: {}",
            old_status.to_value(),
            new_status.to_value(),
            job.title
        ),
    }
}

/// A ledger append requested directly through the API.
#[derive(Clone, Debug)]
pub struct AdminNotificationRequest {
    pub action_type: AdminAction,
    pub user_id: i32,
    pub description: Option<String>,
    pub job_id: Option<i32>,
    pub job_title: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

pub struct AdminNotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminNotificationService<'a> {
    /// Creates a new instance of [`AdminNotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry on behalf of `request.user_id`.
    ///
    /// The acting user's username is snapshotted onto the entry. A missing timestamp
    /// defaults to now.
    pub async fn create(
        &self,
        request: AdminNotificationRequest,
    ) -> Result<AdminNotificationModel, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(request.user_id)
            .await?
            .ok_or(NotFoundError::User(request.user_id))?;

        let notification = AdminNotificationRepository::new(self.db)
            .create(NewAdminNotification {
                action_type: request.action_type,
                user_id: user.id,
                username: user.username,
                description: request.description,
                job_id: request.job_id,
                job_title: request.job_title,
                timestamp: request.timestamp.unwrap_or_else(|| Utc::now().naive_utc()),
            })
            .await?;

        tracing::debug!(
            notification_id = notification.id,
            action_type = ?notification.action_type,
            "Recorded admin notification"
        );

        Ok(notification)
    }

    pub async fn list(&self, pagination: Pagination) -> Result<Page<AdminNotificationModel>, Error> {
        self.list_filtered(AdminNotificationFilter::default(), pagination)
            .await
    }

    pub async fn recent(&self) -> Result<Vec<AdminNotificationModel>, Error> {
        Ok(AdminNotificationRepository::new(self.db)
            .find_recent(RECENT_LIMIT)
            .await?)
    }

    pub async fn by_type(
        &self,
        action_type: AdminAction,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, Error> {
        let filter = AdminNotificationFilter {
            action_type: Some(action_type),
            ..Default::default()
        };

        self.list_filtered(filter, pagination).await
    }

    pub async fn by_user(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, Error> {
        let filter = AdminNotificationFilter {
            user_id: Some(user_id),
            ..Default::default()
        };

        self.list_filtered(filter, pagination).await
    }

    pub async fn by_job(
        &self,
        job_id: i32,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, Error> {
        let filter = AdminNotificationFilter {
            job_id: Some(job_id),
            ..Default::default()
        };

        self.list_filtered(filter, pagination).await
    }

    pub async fn by_read_status(
        &self,
        is_read: bool,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, Error> {
        let filter = AdminNotificationFilter {
            is_read: Some(is_read),
            ..Default::default()
        };

        self.list_filtered(filter, pagination).await
    }

    /// Entries between `start` and `end`, both inclusive.
    pub async fn by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<AdminNotificationModel>, Error> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }

        Ok(AdminNotificationRepository::new(self.db)
            .find_by_date_range(start, end)
            .await?)
    }

    pub async fn unread(&self) -> Result<Vec<AdminNotificationModel>, Error> {
        let filter = AdminNotificationFilter {
            is_read: Some(false),
            ..Default::default()
        };

        Ok(AdminNotificationRepository::new(self.db)
            .find_all(filter)
            .await?)
    }

    pub async fn unread_count(&self) -> Result<u64, Error> {
        Ok(AdminNotificationRepository::new(self.db)
            .count_unread()
            .await?)
    }

    pub async fn mark_as_read(&self, notification_id: i32) -> Result<(), Error> {
        let updated = AdminNotificationRepository::new(self.db)
            .mark_read(&[notification_id])
            .await?;

        if updated == 0 {
            return Err(NotFoundError::AdminNotification(notification_id).into());
        }

        Ok(())
    }

    /// Marks the given entries read; unknown ids are ignored.
    pub async fn mark_many_as_read(&self, notification_ids: &[i32]) -> Result<u64, Error> {
        Ok(AdminNotificationRepository::new(self.db)
            .mark_read(notification_ids)
            .await?)
    }

    pub async fn mark_all_as_read(&self) -> Result<u64, Error> {
        let updated = AdminNotificationRepository::new(self.db)
            .mark_all_read()
            .await?;

        tracing::debug!(updated, "Marked all admin notifications as read");

        Ok(updated)
    }

    async fn list_filtered(
        &self,
        filter: AdminNotificationFilter,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, Error> {
        Ok(AdminNotificationRepository::new(self.db)
            .find_paginated(filter, pagination)
            .await?)
    }
}

#[cfg(test)]
mod tests {

    mod describe {
        use entity::sea_orm_active_enums::{AdminAction, JobStatus};
        use jobboard_test_utils::prelude::*;

        use crate::server::service::admin_notification::{
            action_for_status, describe_status_change,
        };

        /// Expect each target status to map onto its ledger action
        #[test]
        fn maps_status_to_action() {
            assert_eq!(action_for_status(JobStatus::Approved), AdminAction::Approve);
            assert_eq!(action_for_status(JobStatus::Rejected), AdminAction::Reject);
            assert_eq!(action_for_status(JobStatus::Deleted), AdminAction::Delete);
            assert_eq!(action_for_status(JobStatus::Pending), AdminAction::Update);
        }

        /// Expect descriptions to embed the title and, for rejections, the reason
        #[test]
        fn embeds_title_and_reason() {
            let job = factory::mock_job(1, 1, JobStatus::Pending);

            assert_eq!(
                describe_status_change(
                    &job,
                    JobStatus::Pending,
                    JobStatus::Rejected,
                    Some("Incomplete description")
                ),
                "Job rejected: Backend Engineer. Reason: Incomplete description"
            );
            assert_eq!(
                describe_status_change(&job, JobStatus::Approved, JobStatus::Pending, None),
                "Job status changed from APPROVED to PENDING: Backend Engineer"
            );
        }
    }

    mod create {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::AdminAction;
        use jobboard_test_utils::prelude::*;

        use crate::server::{
            error::{not_found::NotFoundError, Error},
            service::admin_notification::{AdminNotificationRequest, AdminNotificationService},
        };

        fn request(user_id: i32, action_type: AdminAction) -> AdminNotificationRequest {
            AdminNotificationRequest {
                action_type,
                user_id,
                description: Some("Manual entry".to_string()),
                job_id: None,
                job_title: None,
                timestamp: None,
            }
        }

        /// Expect the acting user's username to be snapshotted
        #[tokio::test]
        async fn snapshots_username() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;
            let admin = test.user().insert_admin("admin").await?;

            let entry = AdminNotificationService::new(&test.db)
                .create(request(admin.id, AdminAction::Restore))
                .await
                .unwrap();

            assert_eq!(entry.username, "admin");
            assert!(entry.is_read);
            assert!(entry.job_id.is_none());

            Ok(())
        }

        /// Expect an explicit timestamp to be kept for backfills
        #[tokio::test]
        async fn keeps_explicit_timestamp() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;
            let admin = test.user().insert_admin("admin").await?;
            let timestamp = Utc::now().naive_utc() - Duration::days(3);

            let entry = AdminNotificationService::new(&test.db)
                .create(AdminNotificationRequest {
                    timestamp: Some(timestamp),
                    ..request(admin.id, AdminAction::Create)
                })
                .await
                .unwrap();

            assert_eq!(entry.timestamp, timestamp);
            assert!(!entry.is_read);

            Ok(())
        }

        /// Expect NotFound for an unknown acting user
        #[tokio::test]
        async fn fails_for_unknown_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;

            let result = AdminNotificationService::new(&test.db)
                .create(request(1, AdminAction::Update))
                .await;

            assert!(matches!(
                result,
                Err(Error::NotFoundError(NotFoundError::User(1)))
            ));

            Ok(())
        }
    }

    mod queries {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::AdminAction;
        use jobboard_test_utils::prelude::*;

        use crate::server::{
            error::{not_found::NotFoundError, validation::ValidationError, Error},
            model::page::Pagination,
            service::admin_notification::AdminNotificationService,
        };

        /// Expect a validation error when the range starts after it ends
        #[tokio::test]
        async fn rejects_inverted_date_range() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;
            let now = Utc::now().naive_utc();

            let result = AdminNotificationService::new(&test.db)
                .by_date_range(now, now - Duration::days(1))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidDateRange { .. }))
            ));

            Ok(())
        }

        /// Expect user and read-status filters to select matching entries
        #[tokio::test]
        async fn filters_by_user_and_read_status() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;
            let admin = test.user().insert_admin("admin").await?;
            let other = test.user().insert_admin("other").await?;
            test.notification()
                .insert_admin_notification(AdminAction::Create, &admin, Some(1))
                .await?;
            test.notification()
                .insert_admin_notification(AdminAction::Approve, &admin, Some(1))
                .await?;
            test.notification()
                .insert_admin_notification(AdminAction::Create, &other, Some(2))
                .await?;
            let service = AdminNotificationService::new(&test.db);

            let by_user = service.by_user(admin.id, Pagination::default()).await.unwrap();
            assert_eq!(by_user.total_items, 2);

            let unread = service
                .by_read_status(false, Pagination::default())
                .await
                .unwrap();
            assert_eq!(unread.total_items, 2);
            assert_eq!(service.unread().await.unwrap().len(), 2);
            assert_eq!(service.unread_count().await.unwrap(), 2);

            let by_job = service.by_job(2, Pagination::default()).await.unwrap();
            assert_eq!(by_job.items[0].user_id, other.id);

            Ok(())
        }

        /// Expect NotFound when marking a missing entry as read
        #[tokio::test]
        async fn mark_as_read_fails_for_missing_entry() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;

            let result = AdminNotificationService::new(&test.db).mark_as_read(42).await;

            assert!(matches!(
                result,
                Err(Error::NotFoundError(NotFoundError::AdminNotification(42)))
            ));

            Ok(())
        }

        /// Expect marking one entry read to leave the others unread
        #[tokio::test]
        async fn marks_single_entry_read() -> Result<(), TestError> {
            let test = TestBuilder::new().with_job_board_tables().build().await?;
            let admin = test.user().insert_admin("admin").await?;
            let first = test
                .notification()
                .insert_admin_notification(AdminAction::Create, &admin, None)
                .await?;
            test.notification()
                .insert_admin_notification(AdminAction::Create, &admin, None)
                .await?;
            let service = AdminNotificationService::new(&test.db);

            service.mark_as_read(first.id).await.unwrap();

            assert_eq!(service.unread_count().await.unwrap(), 1);

            Ok(())
        }
    }
}
