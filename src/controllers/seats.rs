use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Seat, SeatStatus};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/rows", get(get_rows))
}

// GET /api/seats
#[derive(Debug, Deserialize)]
pub struct SeatsQuery {
    pub row: Option<i64>,
    pub status: Option<String>, // AVAILABLE, BOOKED
}

#[derive(Debug, Serialize)]
struct SeatResponse {
    id: u32,
    row: u32,
    status: SeatStatus,
}

impl From<&Seat> for SeatResponse {
    fn from(seat: &Seat) -> Self {
        SeatResponse {
            id: seat.id,
            row: seat.row,
            status: seat.status(),
        }
    }
}

async fn get_seats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeatsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = match params.status.as_deref() {
        Some(raw) => Some(SeatStatus::parse(raw).ok_or_else(|| {
            ApiError::BadRequest("status must be AVAILABLE | BOOKED".to_string())
        })?),
        None => None,
    };

    let seats = state.seats.lock().await;

    let row = match params.row {
        Some(r) => {
            let rows = seats.rows().len() as i64;
            if !(1..=rows).contains(&r) {
                return Err(ApiError::BadRequest(format!("row must be between 1 and {rows}")));
            }
            Some(r as u32)
        }
        None => None,
    };

    let payload: Vec<SeatResponse> = seats
        .seats()
        .iter()
        .filter(|s| row.map_or(true, |r| s.row == r))
        .filter(|s| status.map_or(true, |st| s.status() == st))
        .map(SeatResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(payload)))
}

// GET /api/seats/rows
#[derive(Debug, Serialize)]
struct RowResponse {
    row: u32,
    available: usize,
    seats: Vec<SeatResponse>,
}

async fn get_rows(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let seats = state.seats.lock().await;
    let payload: Vec<RowResponse> = seats
        .rows()
        .iter()
        .map(|r| RowResponse {
            row: r.row,
            available: r.available(),
            seats: r.seats.iter().map(SeatResponse::from).collect(),
        })
        .collect();

    Json(payload)
}
