use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontend::api::HttpApiClient;
use frontend::config::AppConfig;
use frontend::notice::NoticeBoard;
use frontend::shell::router;
use frontend::state::AppState;
use frontend::storage::{MemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "frontend=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let storage: Arc<dyn Storage> = match &config.access_token {
        Some(token) => Arc::new(MemoryStorage::with_token(token)),
        None => {
            info!("no ACCESS_TOKEN set, requests go out unauthenticated");
            Arc::new(MemoryStorage::default())
        }
    };
    let notices = Arc::new(NoticeBoard::default());
    let client = Arc::new(HttpApiClient::new(
        &config.api_base_url,
        storage,
        notices.clone(),
    )?);

    let state = AppState::new(client, notices)?;
    let app = router(state);

    info!("backend at {}", config.api_base_url);
    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
