use mimalloc::MiMalloc;
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = vaccine_record::Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_host = %cfg.database_host,
        database_name = %cfg.database_name,
        loglevel = %cfg.loglevel
    );

    // Lazy pool: an unreachable database at startup is logged, not fatal;
    // requests then fail at the store layer until it comes back.
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&cfg.database_url())?;
    let store = vaccine_record::VaccineStore::new(pool);

    match store.init_schema().await {
        Ok(()) => info!("database schema ensured"),
        Err(e) => warn!(error = %e, "failed to initialize database schema"),
    }

    // Build axum router and serve
    let state = vaccine_record::router::VaccineState::new(store);
    let app = vaccine_record::router::vaccine_router(state);

    let addr = format!("0.0.0.0:{}", vaccine_record::config::LISTEN_PORT);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
