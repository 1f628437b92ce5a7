use std::sync::Arc;

use anyhow::Context;
use restaurant_chat_relay::{config::Config, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restaurant_chat_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    info!("Configuration loaded: {:?}", config);

    if !config.has_api_key() {
        warn!("GOOGLE_API_KEY is not set; /api/chat will answer with a configuration error");
    }

    let bind_address = config.bind_address();
    let server_url = config.server_url();
    let environment = config.environment.clone();
    let on_render = config.on_render;
    let port = config.port;

    let state = Arc::new(AppState::new(config).context("failed to build HTTP client")?);

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", bind_address))?;

    info!("Server running on {} ({})", server_url, environment);
    if on_render {
        info!("Running on Render. PORT: {}", port);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
