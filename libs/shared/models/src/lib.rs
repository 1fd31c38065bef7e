pub mod booking;
pub mod error;
pub mod schedule;

pub use booking::Booking;
pub use error::AppError;
pub use schedule::{AbsenceBook, ScheduleEntry};
