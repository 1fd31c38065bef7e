use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A confirmed appointment as persisted in the booking ledger.
///
/// Created only by the booking service and removed only by cancellation;
/// never mutated in place. Fields not known to this build of the service
/// are kept in `extra` so a read-modify-write cycle preserves them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub appointment_id: Uuid,
    pub token_number: u32,
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_name: String,
    pub specialty: String,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub day: String,
    pub booking_time: String,
    pub clinic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    pub fn is_for(&self, doctor_name: &str, date: NaiveDate) -> bool {
        self.doctor_name == doctor_name && self.booking_date == date
    }
}
