use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use shared_models::ScheduleEntry;
use shared_storage::HospitalStore;

use crate::models::DoctorSummary;
use crate::services::matching;

/// Read-only queries over the weekly schedule catalog.
pub struct CatalogService {
    store: Arc<dyn HospitalStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn HospitalStore>) -> Self {
        Self { store }
    }

    /// All schedule rows whose doctor name matches the free-text query.
    /// A doctor holding several clinic/time rows yields all of them.
    pub async fn find_doctors(&self, query: &str) -> Vec<ScheduleEntry> {
        let schedule = self.store.load_schedule().await;
        let matches: Vec<ScheduleEntry> = schedule
            .into_iter()
            .filter(|entry| matching::name_matches(query, &entry.doctor))
            .collect();

        debug!("Doctor query '{}' matched {} schedule rows", query, matches.len());
        matches
    }

    /// Schedule rows whose specialty contains the query as a
    /// case-insensitive substring.
    pub async fn find_by_specialty(&self, query: &str) -> Vec<ScheduleEntry> {
        let schedule = self.store.load_schedule().await;
        let matches: Vec<ScheduleEntry> = schedule
            .into_iter()
            .filter(|entry| matching::specialty_matches(query, &entry.specialty))
            .collect();

        debug!("Specialty query '{}' matched {} schedule rows", query, matches.len());
        matches
    }

    /// Matching doctors collapsed to one summary per distinct name, for
    /// disambiguation prompts.
    pub async fn doctor_summaries(&self, query: &str) -> Vec<DoctorSummary> {
        let mut seen = HashSet::new();
        self.find_doctors(query)
            .await
            .into_iter()
            .filter(|entry| seen.insert(entry.doctor.clone()))
            .map(|entry| DoctorSummary {
                doctor: entry.doctor,
                specialty: entry.specialty,
            })
            .collect()
    }
}
