use eyre::WrapErr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use goalpost_server::app;
use goalpost_server::config::ServerConfig;
use goalpost_server::state::AppState;
use goalpost_storage::store::Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    // Collections are loaded before binding, so no request can see an empty store.
    let store = Store::load(&config.data_dir).wrap_err_with(|| {
        format!("failed to load collections from {}", config.data_dir.display())
    })?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        goals = store.goals().len(),
        categories = store.categories().len(),
        users = store.users().len(),
        "collections loaded"
    );

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!(addr = %listener.local_addr()?, "server running");

    axum::serve(listener, app(AppState::new(store))).await?;
    Ok(())
}
