use std::sync::Arc;

use stockroom_api::app::services::AppServices;
use stockroom_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ApiConfig::from_env();
    let services = Arc::new(AppServices::build());

    // Idle-session sweeper: the browser's session cookie cannot free server
    // state, so inventories nobody has touched for a while are dropped here.
    let sweeper = services.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.sweep_interval);
        loop {
            ticker.tick().await;
            let purged = sweeper.purge_idle_sessions(config.session_max_idle);
            if purged > 0 {
                tracing::debug!(purged, "dropped idle sessions");
            }
        }
    });

    let app = stockroom_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
