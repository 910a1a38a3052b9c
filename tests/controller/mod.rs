//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with axum extractors against an in-memory database,
//! checking status codes, response bodies and the records each request leaves behind.

mod admin_job;
mod admin_notification;
mod application;
mod job;
mod notification;
mod router;

use jobboard_test_utils::prelude::*;

use crate::util::{into_response, json_body, TestContextExt};
