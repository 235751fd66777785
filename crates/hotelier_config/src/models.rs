// --- File: crates/hotelier_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Booking Backend Config ---
// Base URL of the REST backend that owns rooms and bookings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// --- Availability Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA zone used to decide what "today" is, e.g. "Europe/Zurich".
    pub time_zone: String,
    /// Number of days covered by simulated booked dates, starting at the first of the month.
    pub simulation_window_days: u32,
    /// Chance that a Friday or Saturday is marked booked in simulated data.
    pub weekend_booking_probability: f64,
    /// Chance that any other day is marked booked in simulated data.
    pub weekday_booking_probability: f64,
    /// Lets the local fallback approve a stay against simulated booked dates.
    /// Turn off to refuse bookings whenever only simulated data is at hand.
    pub allow_simulated_verification: bool,
    /// Sessions untouched for this many seconds are dropped.
    pub session_idle_secs: u64,
    /// Route of the booking form that receives a verified selection.
    pub booking_route: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: "UTC".to_string(),
            simulation_window_days: 90,
            weekend_booking_probability: 0.7,
            weekday_booking_probability: 0.3,
            allow_simulated_verification: true,
            session_idle_secs: 1800,
            booking_route: "/bookings/new".to_string(),
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
