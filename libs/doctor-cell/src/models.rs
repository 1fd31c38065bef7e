use serde::{Deserialize, Serialize};

/// Name-only view of a doctor, collapsed to one record per distinct name.
/// Used for disambiguation prompts when a query matches several doctors;
/// availability always works on the full schedule rows instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSummary {
    pub doctor: String,
    pub specialty: String,
}
