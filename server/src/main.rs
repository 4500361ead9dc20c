use anyhow::Context;
use catalog_server::{seed, AppState, Config, InventoryStore};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let filter = match &config {
        Ok(config) => config.log_filter(),
        Err(_) => Config::default().log_filter(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config.inspect_err(|err| tracing::error!(%err, "invalid configuration"))?;

    let store = InventoryStore::new();
    if config.seed_demo_inventory {
        seed::seed_demo_inventory(&store).await;
    }
    let state = AppState::new(store, config.ping_message.as_str());

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "car catalog listening");

    catalog_server::serve(listener, state).await?;
    Ok(())
}
