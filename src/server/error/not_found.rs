use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Job not found with id: {0}")]
    Job(i32),
    #[error("User not found with id: {0}")]
    User(i32),
    #[error("Admin not found with id: {0}")]
    Admin(i32),
    #[error("Employer not found with id: {0}")]
    Employer(i32),
    #[error("Employer profile not found for user id: {0}")]
    EmployerProfile(i32),
    #[error("Application not found with id: {0}")]
    Application(i32),
    #[error("Notification not found with id: {0}")]
    Notification(i32),
    #[error("Admin notification not found with id: {0}")]
    AdminNotification(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::NOT_FOUND, self)
    }
}
