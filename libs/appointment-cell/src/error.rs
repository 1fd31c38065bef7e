use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;
use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("No doctor matching '{0}' was found in the schedule")]
    DoctorNotFound(String),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("{doctor} has no bookable '{time}' slot on {date}")]
    SlotUnavailable {
        doctor: String,
        date: NaiveDate,
        time: String,
    },

    #[error("Daily booking limit of {capacity} reached for {doctor} on {date}")]
    CapacityExceeded {
        doctor: String,
        date: NaiveDate,
        capacity: u32,
    },

    #[error("Booking {appointment_id} references doctor '{doctor}' who is not in the schedule")]
    ReferentialInconsistency {
        appointment_id: Uuid,
        doctor: String,
    },

    #[error("Ledger storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match &err {
            AppointmentError::DoctorNotFound(_) | AppointmentError::AppointmentNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            AppointmentError::SlotUnavailable { .. } | AppointmentError::CapacityExceeded { .. } => {
                AppError::Conflict(err.to_string())
            }
            AppointmentError::ReferentialInconsistency { .. } => {
                AppError::Inconsistency(err.to_string())
            }
            AppointmentError::Storage(_) => AppError::Storage(err.to_string()),
        }
    }
}
