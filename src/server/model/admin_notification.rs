use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AdminAction;

/// A ledger entry about to be appended.
#[derive(Clone, Debug)]
pub struct NewAdminNotification {
    pub action_type: AdminAction,
    pub user_id: i32,
    pub username: String,
    pub description: Option<String>,
    pub job_id: Option<i32>,
    pub job_title: Option<String>,
    pub timestamp: NaiveDateTime,
}

impl NewAdminNotification {
    /// Only `CREATE` entries start unread.
    pub fn initial_read_state(&self) -> bool {
        self.action_type != AdminAction::Create
    }
}

/// Predicates for paged ledger queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminNotificationFilter {
    pub action_type: Option<AdminAction>,
    pub user_id: Option<i32>,
    pub job_id: Option<i32>,
    pub is_read: Option<bool>,
}
