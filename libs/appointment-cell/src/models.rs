use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable (doctor, date, time-block) opportunity. Computed fresh on
/// every availability query and never cached, because the ledger may
/// change between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub doctor: String,
    pub specialty: String,
    pub clinic: String,
    pub date: NaiveDate,
    pub day: String,
    pub time: String,
    pub remaining_capacity: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotQuery {
    pub doctor: Option<String>,
    pub specialty: Option<String>,
    pub horizon_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_name: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub patient_name: String,
    pub patient_phone: String,
}
