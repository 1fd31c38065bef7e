use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use doctor_cell::services::matching;
use shared_models::ScheduleEntry;
use shared_storage::HospitalStore;

use crate::models::{Slot, SlotQuery};

/// Projects the weekly schedule across a rolling window of calendar days,
/// removing absences and fully booked dates.
pub struct AvailabilityService {
    store: Arc<dyn HospitalStore>,
    horizon_days: u32,
    daily_capacity: u32,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn HospitalStore>, horizon_days: u32, daily_capacity: u32) -> Self {
        Self {
            store,
            horizon_days,
            daily_capacity,
        }
    }

    /// Bookable slots over the horizon starting today. An empty result is
    /// a successful zero-result query, not an error.
    pub async fn compute_slots(&self, query: &SlotQuery) -> Vec<Slot> {
        self.compute_slots_on(query, Local::now().date_naive()).await
    }

    /// Same as [`compute_slots`](Self::compute_slots) with an explicit
    /// first day, so the window is deterministic under test.
    pub async fn compute_slots_on(&self, query: &SlotQuery, today: NaiveDate) -> Vec<Slot> {
        let schedule = self.store.load_schedule().await;

        let mut candidates: Vec<&ScheduleEntry> = schedule.iter().collect();
        if let Some(specialty) = query.specialty.as_deref() {
            candidates.retain(|entry| matching::specialty_matches(specialty, &entry.specialty));
        }
        if let Some(doctor) = query.doctor.as_deref() {
            candidates.retain(|entry| matching::name_matches(doctor, &entry.doctor));
        }
        // A time block marked on leave is never bookable, whatever the date.
        candidates.retain(|entry| !entry.is_on_leave());

        if candidates.is_empty() {
            debug!("No schedule candidates for doctor={:?} specialty={:?}", query.doctor, query.specialty);
            return Vec::new();
        }

        let absences = self.store.load_absences().await;
        // Snapshot the ledger under the writer lock so the capacity counts
        // are consistent with in-flight bookings.
        let ledger = {
            let _guard = self.store.ledger_lock().lock().await;
            self.store.load_bookings().await
        };

        let horizon = query.horizon_days.unwrap_or(self.horizon_days);
        let mut slots = Vec::new();

        for offset in 0..horizon {
            let date = today + Duration::days(i64::from(offset));
            let weekday = date.format("%A").to_string();

            for entry in &candidates {
                if !entry.covers_day(&weekday) {
                    continue;
                }
                if absences.is_absent(&entry.doctor, date) {
                    debug!("{} is absent on {}, skipping", entry.doctor, date);
                    continue;
                }

                let booked = ledger
                    .iter()
                    .filter(|booking| booking.is_for(&entry.doctor, date))
                    .count() as u32;
                if booked >= self.daily_capacity {
                    debug!("{} is fully booked on {} ({} bookings)", entry.doctor, date, booked);
                    continue;
                }

                slots.push(Slot {
                    doctor: entry.doctor.clone(),
                    specialty: entry.specialty.clone(),
                    clinic: entry.clinic.clone(),
                    date,
                    day: weekday.clone(),
                    time: entry.time.clone(),
                    remaining_capacity: self.daily_capacity - booked,
                });
            }
        }

        debug!("Computed {} available slots over {} days", slots.len(), horizon);
        slots
    }
}
