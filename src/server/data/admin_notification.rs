use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    admin_notification::{AdminNotificationFilter, NewAdminNotification},
    db::AdminNotificationModel,
    page::{Page, Pagination},
};

use entity::admin_notification::Column;

pub struct AdminNotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminNotificationRepository<'a, C> {
    /// Creates a new instance of [`AdminNotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger entry. Only `CREATE` entries start unread.
    pub async fn create(
        &self,
        notification: NewAdminNotification,
    ) -> Result<AdminNotificationModel, DbErr> {
        let is_read = notification.initial_read_state();

        let notification = entity::admin_notification::ActiveModel {
            action_type: ActiveValue::Set(notification.action_type),
            job_id: ActiveValue::Set(notification.job_id),
            job_title: ActiveValue::Set(notification.job_title),
            timestamp: ActiveValue::Set(notification.timestamp),
            username: ActiveValue::Set(notification.username),
            user_id: ActiveValue::Set(notification.user_id),
            description: ActiveValue::Set(notification.description),
            is_read: ActiveValue::Set(is_read),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        notification_id: i32,
    ) -> Result<Option<AdminNotificationModel>, DbErr> {
        entity::prelude::AdminNotification::find_by_id(notification_id)
            .one(self.db)
            .await
    }

    /// Fetches one page of entries matching `filter`, newest first.
    pub async fn find_paginated(
        &self,
        filter: AdminNotificationFilter,
        pagination: Pagination,
    ) -> Result<Page<AdminNotificationModel>, DbErr> {
        let paginator = Self::filtered(filter).paginate(self.db, pagination.size);
        let total_items = paginator.num_items().await?;
        let items = paginator.fetch_page(pagination.page).await?;

        Ok(Page {
            items,
            pagination,
            total_items,
        })
    }

    pub async fn find_all(
        &self,
        filter: AdminNotificationFilter,
    ) -> Result<Vec<AdminNotificationModel>, DbErr> {
        Self::filtered(filter).all(self.db).await
    }

    pub async fn find_recent(&self, limit: u64) -> Result<Vec<AdminNotificationModel>, DbErr> {
        Self::filtered(AdminNotificationFilter::default())
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Entries with `start <= timestamp <= end`, newest first.
    pub async fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<AdminNotificationModel>, DbErr> {
        Self::filtered(AdminNotificationFilter::default())
            .filter(Column::Timestamp.between(start, end))
            .all(self.db)
            .await
    }

    pub async fn count_unread(&self) -> Result<u64, DbErr> {
        entity::prelude::AdminNotification::find()
            .filter(Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks the given entries as read, returning the number of rows matched.
    pub async fn mark_read(&self, notification_ids: &[i32]) -> Result<u64, DbErr> {
        if notification_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AdminNotification::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.is_in(notification_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn mark_all_read(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::AdminNotification::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn filtered(filter: AdminNotificationFilter) -> Select<entity::admin_notification::Entity> {
        let mut condition = Condition::all();

        if let Some(action_type) = filter.action_type {
            condition = condition.add(Column::ActionType.eq(action_type));
        }
        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(job_id) = filter.job_id {
            condition = condition.add(Column::JobId.eq(job_id));
        }
        if let Some(is_read) = filter.is_read {
            condition = condition.add(Column::IsRead.eq(is_read));
        }

        entity::prelude::AdminNotification::find()
            .filter(condition)
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
    }
}
