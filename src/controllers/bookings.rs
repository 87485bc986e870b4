use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Booking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/last", get(get_last_booking))
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub count: i64,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    success: bool,
    booking: Booking,
    available_seats: u32,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.inspect_err(|e| {
        tracing::warn!(status = %e.status(), "booking rejected: malformed body");
    })?;
    let mut seats = state.seats.lock().await;
    let booking = seats.book(req.count)?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            booking,
            available_seats: seats.available_count(),
        }),
    ))
}

// GET /api/bookings/last
async fn get_last_booking(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let seats = state.seats.lock().await;
    let booking = seats
        .last_booking()
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No seats booked yet".to_string()))?;

    Ok((StatusCode::OK, Json(booking)))
}
