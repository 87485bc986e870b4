pub mod config;
pub mod error;
pub mod models;
pub mod controllers;
pub mod render;
pub mod services;

use std::sync::Arc;
use tokio::sync::Mutex;

use services::seat_map::SeatMap;

// Shared state for the whole application. The seat map has exactly one owner;
// handlers hold the lock for the full read-or-book step so requests never interleave.
pub struct AppState {
    pub seats: Mutex<SeatMap>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, error::ConfigError> {
        let seats = SeatMap::new(&config.layout)?;
        tracing::info!(
            total_seats = config.layout.total_seats,
            seats_per_row = config.layout.seats_per_row,
            max_per_request = config.layout.max_seats_per_request,
            "seat map initialised"
        );

        Ok(Arc::new(Self {
            seats: Mutex::new(seats),
            config,
        }))
    }
}
