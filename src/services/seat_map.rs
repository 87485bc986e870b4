//! In-memory seat map for one coach and the row-first allocation heuristic.
//!
//! Seats are kept as a single ordered sequence (`id` ascending). A request is
//! served from the first row that still has enough free seats; if no row can
//! take the whole group, the first free seats by id are used instead, even when
//! they span several rows.

use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::config::LayoutConfig;
use crate::error::{BookingError, ConfigError};
use crate::models::{Booking, Placement, Seat};

/// Smallest group a single request may book.
pub const MIN_SEATS_PER_REQUEST: u32 = 1;

#[derive(Debug, Clone)]
pub struct SeatMap {
    layout: LayoutConfig,
    seats: Vec<Seat>,
    last_booking: Option<Booking>,
}

/// One row of the grid, borrowed from the map.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RowView<'a> {
    pub row: u32,
    pub seats: &'a [Seat],
}

impl RowView<'_> {
    pub fn available(&self) -> usize {
        self.seats.iter().filter(|s| s.is_available()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupancyStats {
    pub total_seats: u32,
    pub booked_seats: u32,
    pub available_seats: u32,
    pub rows: u32,
    pub full_rows: u32,
    /// Rows that can still seat a maximum-size group together.
    pub rows_fitting_max_request: u32,
    pub last_booking_size: u32,
}

impl SeatMap {
    /// Builds an unbooked coach. The layout is validated here, so a zero row
    /// width or request size is an error rather than a division by zero later.
    pub fn new(layout: &LayoutConfig) -> Result<Self, ConfigError> {
        layout.validate()?;

        let seats = (1..=layout.total_seats)
            .map(|id| Seat::new(id, layout.seats_per_row))
            .collect();

        Ok(SeatMap {
            layout: layout.clone(),
            seats,
            last_booking: None,
        })
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: u32) -> Option<&Seat> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.seats.get(idx)
    }

    /// All rows in order, fully booked ones included. The last row may be short.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.seats
            .chunks(self.layout.seats_per_row as usize)
            .map(|chunk| RowView {
                row: chunk[0].row,
                seats: chunk,
            })
            .collect()
    }

    pub fn available_count(&self) -> u32 {
        self.seats.iter().filter(|s| s.is_available()).count() as u32
    }

    pub fn booked_count(&self) -> u32 {
        self.seats.iter().filter(|s| s.is_booked).count() as u32
    }

    pub fn last_booking(&self) -> Option<&Booking> {
        self.last_booking.as_ref()
    }

    /// Books `requested` seats and replaces the last booking with the result.
    ///
    /// `requested` is the raw user input, so anything outside
    /// `1..=max_seats_per_request` is rejected before availability is checked.
    /// On error nothing changes, including the previous last booking.
    pub fn book(&mut self, requested: i64) -> Result<Booking, BookingError> {
        let max = self.layout.max_seats_per_request;
        let count = u32::try_from(requested)
            .ok()
            .filter(|c| (MIN_SEATS_PER_REQUEST..=max).contains(c))
            .ok_or_else(|| {
                warn!(requested, max, "booking rejected: count out of range");
                BookingError::OutOfRange {
                    requested,
                    min: MIN_SEATS_PER_REQUEST,
                    max,
                }
            })?;

        let available = self.available_count();
        if available < count {
            warn!(requested = count, available, "booking rejected: not enough seats");
            return Err(BookingError::NotEnoughSeats {
                requested: count,
                available,
            });
        }

        let (ids, placement) = pick_seats(&self.seats, count as usize).ok_or(
            BookingError::NotEnoughSeats {
                requested: count,
                available,
            },
        )?;

        for seat in self.seats.iter_mut() {
            if ids.binary_search(&seat.id).is_ok() {
                debug_assert!(!seat.is_booked, "seat {} picked twice", seat.id);
                seat.is_booked = true;
            }
        }

        let booking = Booking::new(ids, placement);
        info!(
            booking_id = %booking.id,
            seats = %booking.seat_list(),
            ?placement,
            "seats booked"
        );
        self.last_booking = Some(booking.clone());
        Ok(booking)
    }

    pub fn stats(&self) -> OccupancyStats {
        let rows = self.rows();
        let max = self.layout.max_seats_per_request as usize;
        let booked = self.booked_count();

        OccupancyStats {
            total_seats: self.seats.len() as u32,
            booked_seats: booked,
            available_seats: self.seats.len() as u32 - booked,
            rows: rows.len() as u32,
            full_rows: rows.iter().filter(|r| r.available() == 0).count() as u32,
            rows_fitting_max_request: rows.iter().filter(|r| r.available() >= max).count() as u32,
            last_booking_size: self
                .last_booking
                .as_ref()
                .map_or(0, |b| b.seats.len() as u32),
        }
    }
}

/// Available seat ids grouped by row, rows ascending. Rows with no free seat are omitted.
fn available_by_row(seats: &[Seat]) -> Vec<(u32, Vec<u32>)> {
    let mut rows: Vec<(u32, Vec<u32>)> = Vec::new();
    for seat in seats.iter().filter(|s| s.is_available()) {
        match rows.last_mut() {
            Some((row, ids)) if *row == seat.row => ids.push(seat.id),
            _ => rows.push((seat.row, vec![seat.id])),
        }
    }
    rows
}

/// Chooses `count` free seats: first row that fits, else the first free seats overall.
/// Returned ids are ascending. `None` when fewer than `count` seats are free.
fn pick_seats(seats: &[Seat], count: usize) -> Option<(Vec<u32>, Placement)> {
    if let Some((row, ids)) = available_by_row(seats)
        .into_iter()
        .find(|(_, ids)| ids.len() >= count)
    {
        return Some((ids[..count].to_vec(), Placement::SingleRow { row }));
    }

    let ids: Vec<u32> = seats
        .iter()
        .filter(|s| s.is_available())
        .take(count)
        .map(|s| s.id)
        .collect();

    (ids.len() == count).then_some((ids, Placement::Scattered))
}
