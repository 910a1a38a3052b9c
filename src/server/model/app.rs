use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::email::EmailGateway;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub email: Arc<dyn EmailGateway>,
}
