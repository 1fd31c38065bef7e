use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::{AbsenceBook, Booking, ScheduleEntry};

use crate::{HospitalStore, StorageError};

/// Flat-file store reading the schedule, absence register, and booking
/// ledger from JSON files. Ledger writes go to a sibling temp file first
/// and are swapped in with an atomic rename.
pub struct JsonFileStore {
    schedule_path: PathBuf,
    absences_path: PathBuf,
    bookings_path: PathBuf,
    ledger_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            schedule_path: PathBuf::from(&config.schedule_file),
            absences_path: PathBuf::from(&config.absences_file),
            bookings_path: PathBuf::from(&config.bookings_file),
            ledger_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl HospitalStore for JsonFileStore {
    async fn load_schedule(&self) -> Vec<ScheduleEntry> {
        read_json_or_default(&self.schedule_path).await
    }

    async fn load_absences(&self) -> AbsenceBook {
        read_json_or_default(&self.absences_path).await
    }

    async fn load_bookings(&self) -> Vec<Booking> {
        read_json_or_default(&self.bookings_path).await
    }

    async fn save_bookings(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        let path = &self.bookings_path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let payload = serde_json::to_vec_pretty(bookings)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &payload)
            .await
            .map_err(|source| StorageError::Write {
                path: tmp_path.clone(),
                source,
            })?;
        fs::rename(&tmp_path, path)
            .await
            .map_err(|source| StorageError::Replace {
                path: path.clone(),
                source,
            })?;

        debug!("Saved {} bookings to {}", bookings.len(), path.display());
        Ok(())
    }

    fn ledger_lock(&self) -> &Mutex<()> {
        &self.ledger_lock
    }
}

/// Lenient read: a missing file, unreadable file, or invalid JSON all
/// resolve to the type's default so callers never fault on bad reference
/// data. Anything unexpected is logged.
async fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, treating as empty", path.display());
            return T::default();
        }
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("{} is not valid JSON, treating as empty: {}", path.display(), e);
            T::default()
        }
    }
}
