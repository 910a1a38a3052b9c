//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database and a mockito server standing in for the email webhook.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::{constant::TEST_EMAIL_WEBHOOK_PATH, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_job_board_tables().build().await?;
///
/// let admin = test.user().insert_admin("admin").await?;
/// let (employer_user, employer) = test.user().insert_employer("acme", "Acme").await?;
/// let job = test.job().insert_job(employer.id, "Backend Engineer").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server receiving email webhook calls
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// URL of the mock email webhook, to be handed to the webhook email gateway.
    pub fn email_webhook_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_EMAIL_WEBHOOK_PATH)
    }

    /// Register a mock email webhook responding with `status`.
    ///
    /// The mock verifies it was called exactly `expected_requests` times once
    /// [`TestContext::assert_mocks`] runs.
    pub(crate) fn create_email_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", TEST_EMAIL_WEBHOOK_PATH)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
