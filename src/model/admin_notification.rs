use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AdminAction;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminNotificationDto {
    pub id: i32,
    #[schema(value_type = String, example = "CREATE")]
    pub action_type: AdminAction,
    pub job_id: Option<i32>,
    pub job_title: Option<String>,
    pub timestamp: NaiveDateTime,
    pub username: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub is_read: bool,
}

impl From<entity::admin_notification::Model> for AdminNotificationDto {
    fn from(notification: entity::admin_notification::Model) -> Self {
        Self {
            id: notification.id,
            action_type: notification.action_type,
            job_id: notification.job_id,
            job_title: notification.job_title,
            timestamp: notification.timestamp,
            username: notification.username,
            user_id: notification.user_id,
            description: notification.description,
            is_read: notification.is_read,
        }
    }
}

/// Direct ledger append.
///
/// `timestamp` backfills an entry at a given time; the current time is used when absent.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAdminNotificationDto {
    /// One of `CREATE`, `UPDATE`, `DELETE`, `APPROVE`, `REJECT`, `RESTORE`
    pub action_type: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub job_id: Option<i32>,
    pub job_title: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActionTypeQuery {
    /// One of `CREATE`, `UPDATE`, `DELETE`, `APPROVE`, `REJECT`, `RESTORE`
    pub action_type: String,
}

/// Inclusive timestamp range.
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReadStatusQuery {
    pub is_read: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MarkReadDto {
    pub ids: Vec<i32>,
}
