//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them
//! against a plain connection or inside a transaction.

pub mod admin_notification;
pub mod job;
pub mod job_application;
pub mod notification;
pub mod user;
