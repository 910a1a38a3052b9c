use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::{EmployerModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Fetches the given users keyed by id; unknown ids are skipped.
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<HashMap<i32, UserModel>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}

pub struct EmployerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployerRepository<'a, C> {
    /// Creates a new instance of [`EmployerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an employer profile by id.
    ///
    /// An employer's id is its owning user's id, so this also resolves the
    /// employer profile of a user.
    pub async fn get_by_id(&self, employer_id: i32) -> Result<Option<EmployerModel>, DbErr> {
        entity::prelude::Employer::find_by_id(employer_id)
            .one(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        employer_ids: &[i32],
    ) -> Result<HashMap<i32, EmployerModel>, DbErr> {
        let employers = entity::prelude::Employer::find()
            .filter(entity::employer::Column::Id.is_in(employer_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(employers.into_iter().map(|e| (e.id, e)).collect())
    }
}
