use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::render;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show_page).post(book_from_form))
}

// GET /
async fn show_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let seats = state.seats.lock().await;
    Html(render::seat_page(&seats, None))
}

// POST / (the number input submits on change)
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub count: String,
}

impl BookingForm {
    /// Empty or non-numeric input counts as 0 and is rejected as out of range.
    pub fn requested(&self) -> i64 {
        self.count.trim().parse().unwrap_or(0)
    }
}

async fn book_from_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BookingForm>,
) -> impl IntoResponse {
    let mut seats = state.seats.lock().await;
    let error = seats.book(form.requested()).err().map(|e| e.to_string());
    Html(render::seat_page(&seats, error.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_input_parsing() {
        let form = |s: &str| BookingForm { count: s.to_string() };
        assert_eq!(form("3").requested(), 3);
        assert_eq!(form(" 5 ").requested(), 5);
        assert_eq!(form("").requested(), 0);
        assert_eq!(form("2.5").requested(), 0);
        assert_eq!(form("-4").requested(), -4);
        assert_eq!(form("1e0").requested(), 0);
        assert_eq!(form("0x3").requested(), 0);
    }
}
