use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_COMPANY_ADDRESS,
    error::TestError,
    model::{EmployerModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user; email and full name are derived from the username.
    pub async fn insert_user(&self, username: &str, role: UserRole) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            full_name: ActiveValue::Set(format!("{} Fullname", username)),
            email: ActiveValue::Set(format!("{}@example.com", username)),
            role: ActiveValue::Set(role),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_admin(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, UserRole::Admin).await
    }

    pub async fn insert_applicant(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, UserRole::User).await
    }

    /// Insert an employer user together with its company profile.
    ///
    /// The employer profile shares the user's id.
    pub async fn insert_employer(
        &self,
        username: &str,
        company_name: &str,
    ) -> Result<(UserModel, EmployerModel), TestError> {
        let user = self.insert_user(username, UserRole::Employer).await?;

        let employer = entity::prelude::Employer::insert(entity::employer::ActiveModel {
            id: ActiveValue::Set(user.id),
            company_name: ActiveValue::Set(company_name.to_string()),
            company_address: ActiveValue::Set(TEST_COMPANY_ADDRESS.to_string()),
            active: ActiveValue::Set(true),
        })
        .exec_with_returning(&self.context.db)
        .await?;

        Ok((user, employer))
    }
}
