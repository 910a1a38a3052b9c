//! Error types for the job board server.
//!
//! Domain errors are split by how callers should react to them: bad input
//! (`ValidationError`), bad reference (`NotFoundError`) and rejected intent (`ConflictError`).
//! All errors implement `IntoResponse` and render an [`ErrorDto`] body.

pub mod config;
pub mod conflict;
pub mod email;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, conflict::ConflictError, email::EmailError,
        not_found::NotFoundError, validation::ValidationError,
    },
};

/// Main error type for the job board server.
///
/// Aggregates the domain-specific error types and external library errors so handlers and
/// services can use `?` throughout. The `IntoResponse` implementation delegates to the
/// domain error's own mapping and falls back to a logged 500 for everything else.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Input rejected before any mutation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The request conflicts with existing state or ownership.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Email delivery failure.
    #[error(transparent)]
    EmailError(#[from] EmailError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::EmailError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the error's display text as the message.
pub(crate) fn error_response<E: std::fmt::Display>(status: StatusCode, err: E) -> Response {
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}
