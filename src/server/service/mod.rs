//! Service layer for business logic and orchestration.
//!
//! Services own transaction boundaries and the rules of the job moderation engine, the
//! application workflow engine and the two notification ledgers. They call into the
//! repositories of [`crate::server::data`] and the [`email::EmailGateway`].

pub mod admin_notification;
pub mod application;
pub mod email;
pub mod job;
pub mod notification;
