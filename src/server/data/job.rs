use chrono::{Duration, NaiveDateTime};
use entity::sea_orm_active_enums::JobStatus;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    db::JobModel,
    job::{JobFields, JobFilter, JobStatistics},
    page::{Page, Pagination},
};

use entity::job::Column;

/// Days a posting stays open when no expiry is given.
pub const DEFAULT_EXPIRY_DAYS: i64 = 30;

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new posting for `employer_id`.
    ///
    /// The job always starts `PENDING` and active with zeroed counters. Expiry defaults to
    /// [`DEFAULT_EXPIRY_DAYS`] after `posted_at`.
    pub async fn create(
        &self,
        employer_id: i32,
        fields: &JobFields,
        posted_at: NaiveDateTime,
    ) -> Result<JobModel, DbErr> {
        let expire_at = fields
            .expire_at
            .unwrap_or(posted_at + Duration::days(DEFAULT_EXPIRY_DAYS));

        let job = entity::job::ActiveModel {
            employer_id: ActiveValue::Set(employer_id),
            title: ActiveValue::Set(fields.title.clone()),
            description: ActiveValue::Set(fields.description.clone()),
            requirement: ActiveValue::Set(fields.requirement.clone()),
            location: ActiveValue::Set(fields.location.clone()),
            job_type: ActiveValue::Set(fields.job_type),
            salary_min: ActiveValue::Set(fields.salary_min),
            salary_max: ActiveValue::Set(fields.salary_max),
            salary_currency: ActiveValue::Set(fields.salary_currency.clone()),
            apply_count: ActiveValue::Set(0),
            view_count: ActiveValue::Set(0),
            posted_at: ActiveValue::Set(posted_at),
            expire_at: ActiveValue::Set(expire_at),
            is_salary_public: ActiveValue::Set(fields.is_salary_public),
            is_active: ActiveValue::Set(true),
            status: ActiveValue::Set(JobStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
            image_url: ActiveValue::Set(fields.image_url.clone()),
            processed_by: ActiveValue::Set(None),
            processed_at: ActiveValue::Set(None),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    pub async fn get_by_id(&self, job_id: i32) -> Result<Option<JobModel>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    pub async fn get_many(&self, job_ids: &[i32]) -> Result<Vec<JobModel>, DbErr> {
        entity::prelude::Job::find()
            .filter(Column::Id.is_in(job_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Overwrites the employer-editable fields.
    ///
    /// Status, moderation stamps and counters are left untouched. An absent expiry keeps the
    /// stored one.
    pub async fn update_fields(&self, job: JobModel, fields: &JobFields) -> Result<JobModel, DbErr> {
        let mut job_am = job.into_active_model();
        job_am.title = ActiveValue::Set(fields.title.clone());
        job_am.description = ActiveValue::Set(fields.description.clone());
        job_am.requirement = ActiveValue::Set(fields.requirement.clone());
        job_am.location = ActiveValue::Set(fields.location.clone());
        job_am.job_type = ActiveValue::Set(fields.job_type);
        job_am.salary_min = ActiveValue::Set(fields.salary_min);
        job_am.salary_max = ActiveValue::Set(fields.salary_max);
        job_am.salary_currency = ActiveValue::Set(fields.salary_currency.clone());
        job_am.is_salary_public = ActiveValue::Set(fields.is_salary_public);
        job_am.image_url = ActiveValue::Set(fields.image_url.clone());
        if let Some(expire_at) = fields.expire_at {
            job_am.expire_at = ActiveValue::Set(expire_at);
        }

        job_am.update(self.db).await
    }

    /// Applies a moderation decision and stamps the acting admin.
    ///
    /// `rejection_reason` is stored only for `REJECTED` and cleared otherwise. `DELETED`
    /// deactivates the job.
    pub async fn update_status(
        &self,
        job: JobModel,
        status: JobStatus,
        rejection_reason: Option<String>,
        admin_id: i32,
        processed_at: NaiveDateTime,
    ) -> Result<JobModel, DbErr> {
        let mut job_am = job.into_active_model();
        job_am.status = ActiveValue::Set(status);
        job_am.rejection_reason = ActiveValue::Set(match status {
            JobStatus::Rejected => rejection_reason,
            _ => None,
        });
        if status == JobStatus::Deleted {
            job_am.is_active = ActiveValue::Set(false);
        }
        job_am.processed_by = ActiveValue::Set(Some(admin_id));
        job_am.processed_at = ActiveValue::Set(Some(processed_at));

        job_am.update(self.db).await
    }

    /// Increments the view count in place.
    ///
    /// Returns the number of rows affected, 0 if the job does not exist.
    pub async fn increment_view_count(&self, job_id: i32) -> Result<u64, DbErr> {
        self.increment(job_id, Column::ViewCount).await
    }

    /// Increments the apply count in place.
    ///
    /// Returns the number of rows affected, 0 if the job does not exist.
    pub async fn increment_apply_count(&self, job_id: i32) -> Result<u64, DbErr> {
        self.increment(job_id, Column::ApplyCount).await
    }

    async fn increment(&self, job_id: i32, column: Column) -> Result<u64, DbErr> {
        let result = entity::prelude::Job::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(Column::Id.eq(job_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Fetches one page of jobs matching `filter`, newest first.
    pub async fn find_paginated(
        &self,
        filter: &JobFilter,
        pagination: Pagination,
    ) -> Result<Page<JobModel>, DbErr> {
        let paginator = Self::filtered(filter).paginate(self.db, pagination.size);
        let total_items = paginator.num_items().await?;
        let items = paginator.fetch_page(pagination.page).await?;

        Ok(Page {
            items,
            pagination,
            total_items,
        })
    }

    /// Fetches every job matching `filter`, newest first.
    pub async fn find_all(&self, filter: &JobFilter) -> Result<Vec<JobModel>, DbErr> {
        Self::filtered(filter).all(self.db).await
    }

    pub async fn statistics(&self) -> Result<JobStatistics, DbErr> {
        let totals = entity::prelude::Job::find()
            .select_only()
            .column_as(Expr::expr(Func::sum(Expr::col(Column::ViewCount))), "total_views")
            .column_as(
                Expr::expr(Func::sum(Expr::col(Column::ApplyCount))),
                "total_applies",
            )
            .into_tuple::<(Option<i64>, Option<i64>)>()
            .one(self.db)
            .await?;
        let (total_views, total_applies) = totals.unwrap_or((None, None));

        let status_counts = entity::prelude::Job::find()
            .select_only()
            .column(Column::Status)
            .column_as(Expr::expr(Func::count(Expr::col(Column::Id))), "count")
            .group_by(Column::Status)
            .into_tuple::<(JobStatus, i64)>()
            .all(self.db)
            .await?;

        Ok(JobStatistics {
            total_views: total_views.unwrap_or(0),
            total_applies: total_applies.unwrap_or(0),
            status_counts: status_counts
                .into_iter()
                .map(|(status, count)| (status, count as u64))
                .collect(),
        })
    }

    fn filtered(filter: &JobFilter) -> Select<entity::job::Entity> {
        let mut condition = Condition::all();

        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(employer_id) = filter.employer_id {
            condition = condition.add(Column::EmployerId.eq(employer_id));
        }
        if let Some(keyword) = non_blank(&filter.keyword) {
            let pattern = contains_pattern(keyword);
            condition = condition.add(
                Condition::any()
                    .add(lower_like(Column::Title, &pattern))
                    .add(lower_like(Column::Description, &pattern))
                    .add(lower_like(Column::Requirement, &pattern)),
            );
        }
        if let Some(location) = non_blank(&filter.location) {
            condition = condition.add(lower_like(Column::Location, &contains_pattern(location)));
        }
        if let Some(min_salary) = filter.min_salary {
            condition = condition.add(Column::SalaryMin.gte(min_salary));
        }
        if let Some(max_salary) = filter.max_salary {
            condition = condition.add(Column::SalaryMax.lte(max_salary));
        }

        entity::prelude::Job::find()
            .filter(condition)
            .order_by_desc(Column::PostedAt)
            .order_by_desc(Column::Id)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", value.to_lowercase())
}

fn lower_like(column: Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}
