use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a booking's seats were picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// All seats come from one row.
    SingleRow { row: u32 },
    /// No row had enough room, so the first available seats were taken.
    Scattered,
}

/// Result of one successful allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub seats: Vec<u32>,
    pub placement: Placement,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(seats: Vec<u32>, placement: Placement) -> Self {
        Booking {
            id: Uuid::new_v4(),
            seats,
            placement,
            booked_at: Utc::now(),
        }
    }

    /// "1, 2, 3" as shown under "Seats Booked:".
    pub fn seat_list(&self) -> String {
        self.seats
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_list_is_comma_separated() {
        let booking = Booking::new(vec![8, 9, 10], Placement::SingleRow { row: 2 });
        assert_eq!(booking.seat_list(), "8, 9, 10");
    }

    #[test]
    fn placement_serializes_with_tag() {
        let json = serde_json::to_value(Placement::SingleRow { row: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "single_row": { "row": 4 } }));
        let json = serde_json::to_value(Placement::Scattered).unwrap();
        assert_eq!(json, serde_json::json!("scattered"));
    }
}
