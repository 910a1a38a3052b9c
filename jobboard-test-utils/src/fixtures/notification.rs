use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{AdminAction, NotificationType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AdminNotificationModel, NotificationModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn notification<'a>(&'a self) -> NotificationFixtures<'a> {
        NotificationFixtures { context: self }
    }
}

pub struct NotificationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> NotificationFixtures<'a> {
    /// Insert an admin ledger entry stamped with the current time.
    pub async fn insert_admin_notification(
        &self,
        action_type: AdminAction,
        actor: &UserModel,
        job_id: Option<i32>,
    ) -> Result<AdminNotificationModel, TestError> {
        self.insert_admin_notification_at(action_type, actor, job_id, Utc::now().naive_utc())
            .await
    }

    /// Insert an admin ledger entry with an explicit timestamp.
    ///
    /// Read state follows the ledger rule: only `CREATE` entries start unread.
    pub async fn insert_admin_notification_at(
        &self,
        action_type: AdminAction,
        actor: &UserModel,
        job_id: Option<i32>,
        timestamp: NaiveDateTime,
    ) -> Result<AdminNotificationModel, TestError> {
        Ok(entity::prelude::AdminNotification::insert(
            entity::admin_notification::ActiveModel {
                action_type: ActiveValue::Set(action_type),
                job_id: ActiveValue::Set(job_id),
                job_title: ActiveValue::Set(job_id.map(|id| format!("Job {}", id))),
                timestamp: ActiveValue::Set(timestamp),
                username: ActiveValue::Set(actor.username.clone()),
                user_id: ActiveValue::Set(actor.id),
                description: ActiveValue::Set(Some(format!("{:?} entry", action_type))),
                is_read: ActiveValue::Set(action_type != AdminAction::Create),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert an unread user notification.
    pub async fn insert_notification(
        &self,
        user_id: i32,
        notification_type: NotificationType,
    ) -> Result<NotificationModel, TestError> {
        Ok(
            entity::prelude::Notification::insert(entity::notification::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                title: ActiveValue::Set("Test notification".to_string()),
                content: ActiveValue::Set(Some("Test content".to_string())),
                notification_type: ActiveValue::Set(notification_type),
                related_application_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                is_read: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
