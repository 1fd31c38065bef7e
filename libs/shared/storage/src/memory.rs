use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use shared_models::{AbsenceBook, Booking, ScheduleEntry};

use crate::{HospitalStore, StorageError};

/// In-memory store used as a test double for the file-backed store.
pub struct InMemoryStore {
    schedule: Vec<ScheduleEntry>,
    absences: AbsenceBook,
    bookings: RwLock<Vec<Booking>>,
    ledger_lock: Mutex<()>,
    fail_saves: AtomicBool,
}

impl InMemoryStore {
    pub fn new(schedule: Vec<ScheduleEntry>, absences: AbsenceBook) -> Self {
        Self {
            schedule,
            absences,
            bookings: RwLock::new(Vec::new()),
            ledger_lock: Mutex::new(()),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
            ..self
        }
    }

    /// Make subsequent saves fail without touching the stored ledger, for
    /// exercising write-failure paths.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

#[async_trait]
impl HospitalStore for InMemoryStore {
    async fn load_schedule(&self) -> Vec<ScheduleEntry> {
        self.schedule.clone()
    }

    async fn load_absences(&self) -> AbsenceBook {
        self.absences.clone()
    }

    async fn load_bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    async fn save_bookings(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                path: "<memory>".into(),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        *self.bookings.write().await = bookings.to_vec();
        Ok(())
    }

    fn ledger_lock(&self) -> &Mutex<()> {
        &self.ledger_lock
    }
}
