use jobboard::server::{
    config::Config, model::app::AppState, router, startup, util::telemetry::init_tracing,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), jobboard::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let email = startup::build_email_gateway(&config);

    let app = router::routes().with_state(AppState { db, email });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
