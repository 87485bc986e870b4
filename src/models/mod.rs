pub mod seat;
pub mod booking;

pub use seat::{Seat, SeatStatus};
pub use booking::{Booking, Placement};
