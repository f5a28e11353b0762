//! `ward-stub`: standalone in-memory ward backend.
//!
//! Listens on `WARD_STUB_PORT` (default 54321, the local Supabase API
//! port) and seeds doctors from `WARD_STUB_DOCTORS`.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use ward_stub::{app, seed_doctors, AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("WARD_STUB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(54321);

    let state = AppState::new();
    if let Ok(list) = std::env::var("WARD_STUB_DOCTORS") {
        let seeded = seed_doctors(&state, &list);
        tracing::info!(seeded, "seeded doctors");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("ward-stub listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state).into_make_service()).await
}
