use std::sync::Arc;

use tracing::warn;

use shared_storage::HospitalStore;

use crate::error::AppointmentError;

/// Audits the booking ledger against the schedule catalog.
pub struct LedgerConsistencyService {
    store: Arc<dyn HospitalStore>,
}

impl LedgerConsistencyService {
    pub fn new(store: Arc<dyn HospitalStore>) -> Self {
        Self { store }
    }

    /// Checks that every ledger booking still references a doctor present
    /// in the catalog. Returns the number of bookings checked, or the
    /// first orphaned booking as a distinct failure so callers can report
    /// a system-data problem rather than a user-input one.
    pub async fn verify_ledger(&self) -> Result<usize, AppointmentError> {
        let schedule = self.store.load_schedule().await;
        let ledger = self.store.load_bookings().await;

        for booking in &ledger {
            let known = schedule
                .iter()
                .any(|entry| entry.doctor == booking.doctor_name);
            if !known {
                warn!(
                    "Booking {} references unknown doctor '{}'",
                    booking.appointment_id, booking.doctor_name
                );
                return Err(AppointmentError::ReferentialInconsistency {
                    appointment_id: booking.appointment_id,
                    doctor: booking.doctor_name.clone(),
                });
            }
        }

        Ok(ledger.len())
    }
}
