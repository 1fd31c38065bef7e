use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the weekly hospital schedule. A doctor can hold several rows
/// (different clinics or time blocks); callers must not collapse them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub doctor: String,
    pub specialty: String,
    pub clinic: String,
    pub days: Vec<String>,
    pub time: String,
}

impl ScheduleEntry {
    /// A time block containing "on leave" (any case) is never bookable.
    pub fn is_on_leave(&self) -> bool {
        self.time.to_lowercase().contains("on leave")
    }

    pub fn covers_day(&self, weekday: &str) -> bool {
        self.days.iter().any(|d| d.eq_ignore_ascii_case(weekday))
    }
}

/// Sparse map of doctor display name to the calendar dates on which their
/// weekly slot is suspended. A missing doctor or date means available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsenceBook(HashMap<String, HashSet<NaiveDate>>);

impl AbsenceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_absent(&self, doctor: &str, date: NaiveDate) -> bool {
        self.0.get(doctor).is_some_and(|dates| dates.contains(&date))
    }

    pub fn mark_absent(&mut self, doctor: impl Into<String>, date: NaiveDate) {
        self.0.entry(doctor.into()).or_default().insert(date);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
