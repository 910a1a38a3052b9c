//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique index backing one application per (job, applicant).
pub static IDX_JOB_APPLICATION_JOB_APPLICANT: &str = "idx_job_application_job_applicant";

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_job_board_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, UserRole)>,
    employers: Vec<(String, String)>, // (username, company_name)

    // Mock endpoints to create
    email_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_job_board_tables: false,
            users: Vec::new(),
            employers: Vec::new(),
            email_endpoints: Vec::new(),
        }
    }

    /// Add every job board table to the test database.
    ///
    /// Creates users, employers, jobs, job applications, admin notifications and
    /// notifications, plus the unique (job, applicant) index on job applications.
    pub fn with_job_board_tables(mut self) -> Self {
        self.include_job_board_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jobboard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), jobboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(AdminNotification)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given role during `build()`.
    pub fn with_user(mut self, username: impl Into<String>, role: UserRole) -> Self {
        self.users.push((username.into(), role));
        self
    }

    /// Insert an employer user and its company profile during `build()`.
    pub fn with_employer(
        mut self,
        username: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        self.employers.push((username.into(), company_name.into()));
        self
    }

    /// Add a mock email webhook responding with `status`, expected to be called
    /// exactly `expected_requests` times.
    pub fn with_email_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.email_endpoints.push((status, expected_requests));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_job_board_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Employer),
                schema.create_table_from_entity(entity::prelude::Job),
                schema.create_table_from_entity(entity::prelude::JobApplication),
                schema.create_table_from_entity(entity::prelude::AdminNotification),
                schema.create_table_from_entity(entity::prelude::Notification),
            ]);

            all_indexes.push(
                Index::create()
                    .name(IDX_JOB_APPLICATION_JOB_APPLICANT)
                    .table(entity::prelude::JobApplication)
                    .col(entity::job_application::Column::JobId)
                    .col(entity::job_application::Column::ApplicantId)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;
        context.with_indexes(all_indexes).await?;

        // 2. Insert database fixtures
        for (username, role) in self.users {
            context.user().insert_user(&username, role).await?;
        }

        for (username, company_name) in self.employers {
            context
                .user()
                .insert_employer(&username, &company_name)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for (status, expected) in self.email_endpoints {
            mocks.push(context.create_email_endpoint(status, expected));
        }

        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
