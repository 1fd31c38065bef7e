use std::sync::Arc;

use chrono::Utc;
use serde_json::Map;
use tracing::{info, warn};
use uuid::Uuid;

use doctor_cell::services::matching;
use shared_models::Booking;
use shared_storage::HospitalStore;

use crate::error::AppointmentError;
use crate::models::BookAppointmentRequest;
use crate::services::notify::PatientNotifier;

/// Sole mutator of the booking ledger. Every read-modify-write sequence
/// runs under the store's ledger lock, so token numbers stay dense and
/// concurrent writers cannot drop each other's bookings.
pub struct BookingService {
    store: Arc<dyn HospitalStore>,
    notifier: Arc<dyn PatientNotifier>,
    daily_capacity: u32,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn HospitalStore>,
        notifier: Arc<dyn PatientNotifier>,
        daily_capacity: u32,
    ) -> Self {
        Self {
            store,
            notifier,
            daily_capacity,
        }
    }

    /// Book a slot for a patient.
    ///
    /// The requested (doctor, date, time) is validated against the current
    /// schedule and absence register before anything is written: the date's
    /// weekday must belong to one of the doctor's schedule rows, the time
    /// must equal that row's time block, and the doctor must not be on
    /// leave or absent that day. The token number is the booking's position
    /// in the day's queue, starting at 1 per doctor per date.
    pub async fn book(&self, request: BookAppointmentRequest) -> Result<Booking, AppointmentError> {
        info!(
            "Booking request for doctor '{}' on {} at '{}'",
            request.doctor_name, request.booking_date, request.booking_time
        );

        let schedule = self.store.load_schedule().await;
        let candidates: Vec<_> = schedule
            .iter()
            .filter(|entry| matching::name_matches(&request.doctor_name, &entry.doctor))
            .collect();

        let Some(first) = candidates.first() else {
            return Err(AppointmentError::DoctorNotFound(request.doctor_name));
        };
        let doctor_name = first.doctor.clone();

        let weekday = request.booking_date.format("%A").to_string();
        let entry = candidates
            .iter()
            .copied()
            .find(|entry| {
                !entry.is_on_leave()
                    && entry.covers_day(&weekday)
                    && entry.time == request.booking_time
            })
            .ok_or_else(|| AppointmentError::SlotUnavailable {
                doctor: doctor_name.clone(),
                date: request.booking_date,
                time: request.booking_time.clone(),
            })?;

        let absences = self.store.load_absences().await;
        if absences.is_absent(&entry.doctor, request.booking_date) {
            return Err(AppointmentError::SlotUnavailable {
                doctor: entry.doctor.clone(),
                date: request.booking_date,
                time: request.booking_time,
            });
        }

        let _guard = self.store.ledger_lock().lock().await;
        let mut ledger = self.store.load_bookings().await;

        let token_number = 1 + ledger
            .iter()
            .filter(|booking| booking.is_for(&entry.doctor, request.booking_date))
            .count() as u32;
        if token_number > self.daily_capacity {
            warn!(
                "{} is fully booked on {} (capacity {})",
                entry.doctor, request.booking_date, self.daily_capacity
            );
            return Err(AppointmentError::CapacityExceeded {
                doctor: entry.doctor.clone(),
                date: request.booking_date,
                capacity: self.daily_capacity,
            });
        }

        let booking = Booking {
            appointment_id: Uuid::new_v4(),
            token_number,
            patient_name: request.patient_name,
            patient_phone: request.patient_phone,
            doctor_name: entry.doctor.clone(),
            specialty: entry.specialty.clone(),
            booking_date: request.booking_date,
            day: weekday,
            booking_time: entry.time.clone(),
            clinic: entry.clinic.clone(),
            created_at: Some(Utc::now()),
            extra: Map::new(),
        };

        ledger.push(booking.clone());
        self.store.save_bookings(&ledger).await?;
        drop(_guard);

        info!(
            "Appointment {} confirmed with {} on {} (token {})",
            booking.appointment_id, booking.doctor_name, booking.booking_date, booking.token_number
        );

        let confirmation = format!(
            "Your appointment with {} is confirmed for {} {} at {}. Clinic: {}. Your token number is {}.",
            booking.doctor_name,
            booking.day,
            booking.booking_date,
            booking.booking_time,
            booking.clinic,
            booking.token_number
        );
        self.notifier.notify(&booking.patient_phone, &confirmation).await;

        Ok(booking)
    }

    /// Remove a booking by id. Either the booking is removed and the
    /// persisted ledger reflects it, or nothing changes.
    pub async fn cancel(&self, appointment_id: Uuid) -> Result<Booking, AppointmentError> {
        let _guard = self.store.ledger_lock().lock().await;
        let mut ledger = self.store.load_bookings().await;

        let index = ledger
            .iter()
            .position(|booking| booking.appointment_id == appointment_id)
            .ok_or(AppointmentError::AppointmentNotFound(appointment_id))?;

        let removed = ledger.remove(index);
        self.store.save_bookings(&ledger).await?;

        info!(
            "Cancelled appointment {} with {} on {}",
            removed.appointment_id, removed.doctor_name, removed.booking_date
        );
        Ok(removed)
    }

    /// Exact, case-sensitive match on the patient phone number.
    pub async fn find_by_phone(&self, phone: &str) -> Vec<Booking> {
        self.store
            .load_bookings()
            .await
            .into_iter()
            .filter(|booking| booking.patient_phone == phone)
            .collect()
    }

    pub async fn find_by_id(&self, appointment_id: Uuid) -> Option<Booking> {
        self.store
            .load_bookings()
            .await
            .into_iter()
            .find(|booking| booking.appointment_id == appointment_id)
    }
}
