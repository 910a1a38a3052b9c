//! Shared helpers for controller integration tests.

use std::sync::Arc;

use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use jobboard::server::{
    error::Error,
    model::app::AppState,
    service::email::{LogEmailGateway, WebhookEmailGateway},
};
use jobboard_test_utils::{constant::TEST_EMAIL_FROM, TestContext};
use serde::de::DeserializeOwned;

/// Builds [`AppState`] from a [`TestContext`].
pub trait TestContextExt {
    /// State whose email gateway only logs.
    fn app_state(&self) -> AppState;

    /// State whose email gateway posts to the context's mock webhook.
    fn app_state_with_email_webhook(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            email: Arc::new(LogEmailGateway),
        }
    }

    fn app_state_with_email_webhook(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            email: Arc::new(WebhookEmailGateway::new(
                self.email_webhook_url(),
                TEST_EMAIL_FROM,
            )),
        }
    }
}

/// Turns a handler result into the response axum would send.
pub fn into_response<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Reads a JSON response body.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
