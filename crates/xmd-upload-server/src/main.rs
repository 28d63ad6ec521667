//! Example companion service: authenticated file upload.
//!
//! Receives files POSTed by clients that cannot write to local disk (e.g.
//! browser builds) and stores them under `example_output/`. Demonstration
//! quality on purpose: credentials live in a static in-code table and the
//! bind address is fixed; no configuration or environment variables are
//! read. No logic is shared with the documentation generator.

mod app;
mod auth;
mod handlers;

use tracing_subscriber::EnvFilter;

/// Address the example service binds to.
const BIND_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let router = app::create_router();

    let listener = match tokio::net::TcpListener::bind(BIND_ADDR).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, addr = BIND_ADDR, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("upload example listening on http://{BIND_ADDR}");

    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }
}
