//! In-memory development backend for the ward.
//!
//! Speaks the slice of PostgREST that `ward-client` uses, so the CLI and
//! integration tests can run without a hosted database. Storage is
//! in-memory (DashMap) with no persistence: data is lost on restart.

pub mod error;
pub mod query;
pub mod routes;
pub mod store;

pub use error::StubError;
pub use routes::router;
pub use store::{AppState, Table};

use tower_http::trace::TraceLayer;

/// The router with request tracing, as served by the `ward-stub` binary.
pub fn app(state: AppState) -> axum::Router {
    router(state).layer(TraceLayer::new_for_http())
}

/// Seed one doctor per comma-separated name in `list`, skipping blanks.
/// Returns how many were added.
pub fn seed_doctors(state: &AppState, list: &str) -> usize {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| state.seed_doctor(name))
        .count()
}
