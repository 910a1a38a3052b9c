use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::NotificationType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: Option<String>,
    #[schema(value_type = String, example = "APPLICATION_STATUS")]
    pub notification_type: NotificationType,
    pub related_application_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            title: notification.title,
            content: notification.content,
            notification_type: notification.notification_type,
            related_application_id: notification.related_application_id,
            created_at: notification.created_at,
            is_read: notification.is_read,
        }
    }
}

/// Request to notify an employer about a new application.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifyNewApplicationDto {
    pub employer_user_id: i32,
    pub application_id: i32,
}
