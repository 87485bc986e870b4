//! Occupancy statistics for the coach: booked and free seat counts, full rows,
//! rows that can still seat a maximum-size group, and the size of the last booking.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analytics", get(get_analytics))
}

/// GET /api/analytics
async fn get_analytics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.seats.lock().await.stats();

    tracing::debug!(
        booked = stats.booked_seats,
        available = stats.available_seats,
        full_rows = stats.full_rows,
        "analytics requested"
    );

    Json(stats)
}
