#![recursion_limit = "256"]
mod config;
mod generator;
mod routes;
mod state;
mod words;

use std::sync::Arc;

use generator::{Generator, UpstreamGenerator};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Non-fatal: relay endpoints answer 503 when no generator is configured.
    let generator: Option<Arc<dyn Generator>> = match config.generator_base_url.as_deref() {
        Some(base_url) => match UpstreamGenerator::new(base_url, config.timeouts) {
            Ok(client) => {
                tracing::info!(base_url, "generator relay initialized");
                Some(Arc::new(client) as Arc<dyn Generator>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "generator client build failed; blending disabled");
                None
            }
        },
        None => {
            tracing::warn!("GENERATOR_BASE_URL not set; blending disabled");
            None
        }
    };

    let state = state::AppState::new(generator);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "word blender listening");
    axum::serve(listener, app).await.expect("server failed");
}
