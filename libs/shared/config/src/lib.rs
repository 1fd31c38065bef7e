use std::env;
use tracing::warn;

/// Default forward window, in calendar days, for availability queries.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;
/// Default number of bookings accepted per doctor per calendar day.
pub const DEFAULT_DAILY_CAPACITY: u32 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub schedule_file: String,
    pub bookings_file: String,
    pub absences_file: String,
    pub horizon_days: u32,
    pub daily_capacity: u32,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            schedule_file: env::var("SCHEDULE_FILE")
                .unwrap_or_else(|_| "data/hospital_schedule.json".to_string()),
            bookings_file: env::var("BOOKINGS_FILE")
                .unwrap_or_else(|_| "data/bookings.json".to_string()),
            absences_file: env::var("ABSENCES_FILE")
                .unwrap_or_else(|_| "data/doctor_absences.json".to_string()),
            horizon_days: parse_env("BOOKING_HORIZON_DAYS", DEFAULT_HORIZON_DAYS),
            daily_capacity: parse_env("DAILY_BOOKING_CAPACITY", DEFAULT_DAILY_CAPACITY),
            port: parse_env("PORT", 3000),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schedule_file: "data/hospital_schedule.json".to_string(),
            bookings_file: "data/bookings.json".to_string(),
            absences_file: "data/doctor_absences.json".to_string(),
            horizon_days: DEFAULT_HORIZON_DAYS,
            daily_capacity: DEFAULT_DAILY_CAPACITY,
            port: 3000,
        }
    }
}

fn parse_env<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
