use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email gateway responded with status {status} for {to}")]
    Rejected { to: String, status: u16 },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
