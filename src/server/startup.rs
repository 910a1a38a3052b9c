use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    service::email::{EmailGateway, LogEmailGateway, WebhookEmailGateway},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Pick the email gateway: the webhook when configured, logging otherwise
pub fn build_email_gateway(config: &Config) -> Arc<dyn EmailGateway> {
    match &config.email_webhook_url {
        Some(url) => {
            tracing::info!(%url, "Sending application status emails through webhook");

            Arc::new(WebhookEmailGateway::new(url.clone(), config.email_from.clone()))
        }
        None => {
            tracing::warn!("EMAIL_WEBHOOK_URL not set, application status emails will only be logged");

            Arc::new(LogEmailGateway)
        }
    }
}
