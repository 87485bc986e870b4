use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Reasons a booking request is rejected. The seat map is left untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("You can book between {min} to {max} seats only.")]
    OutOfRange { requested: i64, min: u32, max: u32 },

    #[error("Not enough seats available.")]
    NotEnoughSeats { requested: u32, available: u32 },
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid seat layout: {0}")]
    Layout(#[from] validator::ValidationErrors),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Booking(BookingError::OutOfRange { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Booking(BookingError::NotEnoughSeats { .. }) => StatusCode::CONFLICT,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_messages_match_the_widget_text() {
        let err = BookingError::OutOfRange { requested: 9, min: 1, max: 7 };
        assert_eq!(err.to_string(), "You can book between 1 to 7 seats only.");

        let err = BookingError::NotEnoughSeats { requested: 5, available: 2 };
        assert_eq!(err.to_string(), "Not enough seats available.");
    }

    #[test]
    fn api_status_codes() {
        let out_of_range: ApiError = BookingError::OutOfRange { requested: 0, min: 1, max: 7 }.into();
        assert_eq!(out_of_range.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let full: ApiError = BookingError::NotEnoughSeats { requested: 3, available: 0 }.into();
        assert_eq!(full.status(), StatusCode::CONFLICT);

        assert_eq!(ApiError::BadRequest("row".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("none".into()).status(), StatusCode::NOT_FOUND);
    }
}
