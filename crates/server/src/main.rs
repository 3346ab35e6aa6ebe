mod api;
mod router;
mod state;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use paperchat_core::Config;
use paperchat_llm::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    paperchat_core::config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    config.log_summary();

    // Fails closed: no credential means no server.
    let client = GeminiClient::from_config(&config.llm)?;

    let state = Arc::new(state::AppState::new(config.clone(), Arc::new(client)));
    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
