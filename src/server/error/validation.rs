use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::server::error::error_response;

/// Input rejected before any state is touched.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid job status: {0}")]
    InvalidJobStatus(String),
    #[error("Invalid application status: {0}")]
    InvalidApplicationStatus(String),
    #[error("Invalid admin action type: {0}")]
    InvalidActionType(String),
    #[error("Rejection reason is required when rejecting a job")]
    MissingRejectionReason,
    #[error("Page must not be negative, got {0}")]
    InvalidPage(i64),
    #[error("Page size must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: i64, max: u64 },
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self)
    }
}
