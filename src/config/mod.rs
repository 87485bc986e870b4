use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::ConfigError;

pub const DEFAULT_TOTAL_SEATS: u32 = 80;
pub const DEFAULT_SEATS_PER_ROW: u32 = 7;
pub const DEFAULT_MAX_SEATS_PER_REQUEST: u32 = 7;

// Top-level configuration: HTTP host settings plus the coach layout
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

/// Shape of the coach. Seats are numbered from 1 and filled into rows of
/// `seats_per_row`; the last row holds whatever is left over.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[validate(schema(function = "validate_request_fits_row"))]
pub struct LayoutConfig {
    #[validate(range(min = 1))]
    pub total_seats: u32,
    #[validate(range(min = 1))]
    pub seats_per_row: u32,
    #[validate(range(min = 1))]
    pub max_seats_per_request: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            total_seats: DEFAULT_TOTAL_SEATS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            max_seats_per_request: DEFAULT_MAX_SEATS_PER_REQUEST,
        }
    }
}

fn validate_request_fits_row(layout: &LayoutConfig) -> Result<(), ValidationError> {
    if layout.max_seats_per_request > layout.seats_per_row {
        let mut err = ValidationError::new("max_seats_per_request");
        err.message = Some("max_seats_per_request must not exceed seats_per_row".into());
        return Err(err);
    }
    Ok(())
}

// Flat view of every key, as it comes out of the environment
#[derive(Debug, Deserialize)]
struct Settings {
    host: String,
    port: u16,
    environment: String,
    rust_log: String,
    total_seats: u32,
    seats_per_row: u32,
    max_seats_per_request: u32,
}

impl Config {
    /// Defaults overridden by process environment variables (`PORT`, `TOTAL_SEATS`, ...).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(::config::Environment::default().try_parsing(true))
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        let settings: Settings = ::config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000_i64)?
            .set_default("environment", "development")?
            .set_default("rust_log", "seat_reservation=debug,tower_http=debug")?
            .set_default("total_seats", i64::from(DEFAULT_TOTAL_SEATS))?
            .set_default("seats_per_row", i64::from(DEFAULT_SEATS_PER_ROW))?
            .set_default("max_seats_per_request", i64::from(DEFAULT_MAX_SEATS_PER_REQUEST))?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        let layout = LayoutConfig {
            total_seats: settings.total_seats,
            seats_per_row: settings.seats_per_row,
            max_seats_per_request: settings.max_seats_per_request,
        };
        layout.validate()?;

        Ok(Config {
            app: AppConfig {
                host: settings.host,
                port: settings.port,
                environment: settings.environment,
                rust_log: settings.rust_log,
            },
            layout,
        })
    }
}
