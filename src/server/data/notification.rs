use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::NotificationModel;

use entity::notification::Column;

/// A user notification about to be persisted.
#[derive(Clone, Debug)]
pub struct NewNotification {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub notification_type: NotificationType,
    pub related_application_id: Option<i32>,
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists an unread notification.
    pub async fn create(
        &self,
        notification: NewNotification,
        created_at: NaiveDateTime,
    ) -> Result<NotificationModel, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(notification.user_id),
            title: ActiveValue::Set(notification.title),
            content: ActiveValue::Set(Some(notification.content)),
            notification_type: ActiveValue::Set(notification.notification_type),
            related_application_id: ActiveValue::Set(notification.related_application_id),
            created_at: ActiveValue::Set(created_at),
            is_read: ActiveValue::Set(false),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    pub async fn get_by_id(&self, notification_id: i32) -> Result<Option<NotificationModel>, DbErr> {
        entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await
    }

    /// Lists a user's notifications, newest first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<NotificationModel>, DbErr> {
        entity::prelude::Notification::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_unread_by_user(&self, user_id: i32) -> Result<Vec<NotificationModel>, DbErr> {
        entity::prelude::Notification::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_unread_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    pub async fn mark_read(&self, notification: NotificationModel) -> Result<NotificationModel, DbErr> {
        let mut notification_am = notification.into_active_model();
        notification_am.is_read = ActiveValue::Set(true);

        notification_am.update(self.db).await
    }

    /// Marks every unread notification of a user as read, returning the number changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
