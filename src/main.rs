use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use invoice_tracker::api::{create_router, AppState};
use invoice_tracker::config::ConfigLoader;
use invoice_tracker::storage::CsvEntryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/invoice.yaml";
const DEFAULT_DATA_PATH: &str = "./Tracker.csv";
const DEFAULT_ADDR: &str = "0.0.0.0:3001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::var("TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let data_path = env::var("TRACKER_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.into());
    let addr: SocketAddr = env::var("TRACKER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.into())
        .parse()
        .context("TRACKER_ADDR must be a socket address")?;

    let loader = ConfigLoader::load(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    let pay_period = *loader.pay_period();
    info!(
        config = %config_path,
        reference_start_date = %pay_period.reference_start_date(),
        period_length_days = pay_period.period_length_days(),
        payment_days_after_period_end = pay_period.payment_days_after_period_end(),
        "Configuration loaded"
    );

    let store = CsvEntryStore::new(&data_path);
    let state = AppState::new(loader.into_config(), Arc::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, data = %data_path, "Invoice tracker listening");

    axum::serve(listener, app).await?;

    Ok(())
}
