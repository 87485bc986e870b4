use serde::{Deserialize, Serialize};

/// Seat status as exposed through the API filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatStatus {
    Available,
    Booked,
}

impl SeatStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "AVAILABLE" => Some(SeatStatus::Available),
            "BOOKED" => Some(SeatStatus::Booked),
            _ => None,
        }
    }

    /// CSS class used by the grid view.
    pub fn css_class(self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Booked => "booked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: u32,
    pub row: u32,
    pub is_booked: bool,
}

impl Seat {
    /// Seat `id` in a coach with `seats_per_row` seats per row. Rows are 1-based.
    /// `seats_per_row` must be non-zero; `SeatMap::new` checks the layout first.
    pub(crate) fn new(id: u32, seats_per_row: u32) -> Self {
        Seat {
            id,
            row: id.div_ceil(seats_per_row),
            is_booked: false,
        }
    }

    pub fn status(&self) -> SeatStatus {
        if self.is_booked {
            SeatStatus::Booked
        } else {
            SeatStatus::Available
        }
    }

    pub fn is_available(&self) -> bool {
        !self.is_booked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_is_ceil_of_id_over_row_width() {
        assert_eq!(Seat::new(1, 7).row, 1);
        assert_eq!(Seat::new(7, 7).row, 1);
        assert_eq!(Seat::new(8, 7).row, 2);
        assert_eq!(Seat::new(78, 7).row, 12);
        assert_eq!(Seat::new(80, 7).row, 12);
    }

    #[test]
    fn status_follows_booked_flag() {
        let mut seat = Seat::new(3, 7);
        assert_eq!(seat.status(), SeatStatus::Available);
        seat.is_booked = true;
        assert_eq!(seat.status(), SeatStatus::Booked);
        assert_eq!(seat.status().css_class(), "booked");
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!(SeatStatus::parse("AVAILABLE"), Some(SeatStatus::Available));
        assert_eq!(SeatStatus::parse("BOOKED"), Some(SeatStatus::Booked));
        assert_eq!(SeatStatus::parse("booked"), None);
        assert_eq!(SeatStatus::parse("SOLD"), None);
    }
}
