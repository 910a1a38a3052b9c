//! HTTP controller endpoints for the job board API.
//!
//! Axum handlers that validate path, query and body input, call into the services and map
//! their results to JSON responses. Each handler carries a utoipa annotation for the OpenAPI
//! document.

pub mod admin_job;
pub mod admin_notification;
pub mod application;
pub mod job;
pub mod notification;
