use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Applicant {applicant_id} has already applied for job {job_id}")]
    AlreadyApplied { job_id: i32, applicant_id: i32 },
    #[error("Employer {employer_id} has no permission to update job {job_id}")]
    JobOwnership { job_id: i32, employer_id: i32 },
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyApplied { .. } => error_response(StatusCode::BAD_REQUEST, self),
            Self::JobOwnership { .. } => error_response(StatusCode::FORBIDDEN, self),
        }
    }
}
