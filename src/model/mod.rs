//! Request and response DTOs shared by the HTTP API.

pub mod admin_notification;
pub mod api;
pub mod application;
pub mod job;
pub mod notification;
