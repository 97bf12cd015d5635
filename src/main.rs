use tracing_subscriber::EnvFilter;

use tams_backend::api::server::start_api_server;
use tams_backend::api::types::ApiContext;
use tams_backend::{config, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} backend starting v{}", config::APP_NAME, config::APP_VERSION);

    // Initialization must not fail the liveness probe: schema trouble is
    // logged and reflected in the health payload instead
    let (conn, db_status) = db::sqlite::open_resilient(&config::database_path())?;
    let ctx = ApiContext::new(conn, db_status, config::region());

    let mut server = start_api_server(ctx, config::bind_addr()).await?;
    tracing::info!(addr = %server.addr, "serving");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");
    server.shutdown();

    Ok(())
}
