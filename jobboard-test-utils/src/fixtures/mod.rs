//! Test fixture modules for database record creation.
//!
//! Each submodule extends [`TestContext`](crate::TestContext) with an accessor returning a
//! fixture helper bound to the test database:
//!
//! - `user` - users, admins and employer profiles
//! - `job` - job postings, plus in-memory factories for unit tests
//! - `application` - job applications
//! - `notification` - admin ledger entries and user notifications

pub mod application;
pub mod job;
pub mod notification;
pub mod user;
