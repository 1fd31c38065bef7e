pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;
use tokio::sync::Mutex;

use shared_models::{AbsenceBook, Booking, ScheduleEntry};

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Storage boundary for the booking core.
///
/// The schedule and absence sources are read-only reference data; the
/// booking ledger is the only mutable state. Missing or malformed sources
/// read as empty so a broken data file never faults a caller. All ledger
/// read-modify-write sequences must run under `ledger_lock` so concurrent
/// bookings and cancellations cannot lose each other's writes.
#[async_trait]
pub trait HospitalStore: Send + Sync {
    async fn load_schedule(&self) -> Vec<ScheduleEntry>;

    async fn load_absences(&self) -> AbsenceBook;

    async fn load_bookings(&self) -> Vec<Booking>;

    /// Persist the full ledger. A failed save must leave the previously
    /// persisted snapshot intact.
    async fn save_bookings(&self, bookings: &[Booking]) -> Result<(), StorageError>;

    /// Single writer lock serializing every ledger mutation, and taken
    /// briefly by readers that need a consistent booking snapshot.
    fn ledger_lock(&self) -> &Mutex<()>;
}
