//! Test configuration constants.
//!
//! Placeholder values used across tests for the email gateway and fixture data.

/// Path of the mock email webhook registered on the mockito server.
pub static TEST_EMAIL_WEBHOOK_PATH: &str = "/email/application-status";

/// Sender address handed to the email gateway under test.
pub static TEST_EMAIL_FROM: &str = "no-reply@jobboard.test";

/// Company address used for every employer fixture.
pub static TEST_COMPANY_ADDRESS: &str = "1 Test Street";
