pub mod analytics;
pub mod bookings;
pub mod seats;
pub mod view;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// JSON API, mounted under `/api`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(analytics::routes())
}

/// Full application: the seat page at `/`, the JSON API under `/api`, and `/health`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(view::routes())
        .nest("/api", routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
