use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::AdminAction;

/// Ledger entry for a moderation-relevant action.
///
/// `job_title` and `username` are snapshots taken when the entry is written.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub action_type: AdminAction,
    pub job_id: Option<i32>,
    pub job_title: Option<String>,
    pub timestamp: DateTime,
    pub username: String,
    pub user_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
