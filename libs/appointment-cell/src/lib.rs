pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::AppointmentError;
pub use models::*;
pub use router::appointment_routes;
pub use services::availability::AvailabilityService;
pub use services::booking::BookingService;
pub use services::consistency::LedgerConsistencyService;
pub use services::notify::{PatientNotifier, SmsLogNotifier};
