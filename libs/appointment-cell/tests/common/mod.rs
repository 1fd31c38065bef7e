use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Map;
use tokio::sync::Mutex;
use uuid::Uuid;

use appointment_cell::services::availability::AvailabilityService;
use appointment_cell::services::booking::BookingService;
use appointment_cell::services::notify::PatientNotifier;
use appointment_cell::BookAppointmentRequest;
use shared_models::{AbsenceBook, Booking, ScheduleEntry};
use shared_storage::InMemoryStore;

pub const HORIZON_DAYS: u32 = 14;
pub const DAILY_CAPACITY: u32 = 20;

/// 2025-08-18 is a Monday; tests pin the window start here so the
/// projected dates are deterministic.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 18).expect("valid date")
}

pub fn entry(doctor: &str, specialty: &str, clinic: &str, days: &[&str], time: &str) -> ScheduleEntry {
    ScheduleEntry {
        doctor: doctor.to_string(),
        specialty: specialty.to_string(),
        clinic: clinic.to_string(),
        days: days.iter().map(|d| d.to_string()).collect(),
        time: time.to_string(),
    }
}

pub fn sample_schedule() -> Vec<ScheduleEntry> {
    vec![
        entry(
            "Dr. Ali Mehdi",
            "Consultant Cardiologist",
            "Cardiac Care Clinic",
            &["Monday", "Wednesday"],
            "10:00AM TO 12:00PM",
        ),
        entry(
            "Dr. Ali Mehdi",
            "Consultant Cardiologist",
            "Heart OPD",
            &["Thursday"],
            "04:00PM TO 05:00PM",
        ),
        entry(
            "Dr. Sara Khan",
            "Consultant Physicians/Specialists Internal Medicine",
            "Medical OPD",
            &["Monday", "Tuesday"],
            "09:00AM TO 11:00AM",
        ),
        entry(
            "Prof. Imran Qureshi",
            "Consultant Neurologist",
            "Neurology Clinic",
            &["Wednesday"],
            "On Leave",
        ),
    ]
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl PatientNotifier for RecordingNotifier {
    async fn notify(&self, phone: &str, message: &str) {
        self.messages
            .lock()
            .await
            .push((phone.to_string(), message.to_string()));
    }
}

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub availability: AvailabilityService,
    pub booking: BookingService,
}

pub fn context() -> TestContext {
    context_with(sample_schedule(), AbsenceBook::new(), Vec::new())
}

pub fn context_with(
    schedule: Vec<ScheduleEntry>,
    absences: AbsenceBook,
    bookings: Vec<Booking>,
) -> TestContext {
    let store = Arc::new(InMemoryStore::new(schedule, absences).with_bookings(bookings));
    let notifier = Arc::new(RecordingNotifier::default());
    TestContext {
        availability: AvailabilityService::new(store.clone(), HORIZON_DAYS, DAILY_CAPACITY),
        booking: BookingService::new(store.clone(), notifier.clone(), DAILY_CAPACITY),
        store,
        notifier,
    }
}

pub fn seeded_booking(doctor: &str, date: NaiveDate, token: u32) -> Booking {
    Booking {
        appointment_id: Uuid::new_v4(),
        token_number: token,
        patient_name: format!("Patient {}", token),
        patient_phone: format!("0300-{:07}", token),
        doctor_name: doctor.to_string(),
        specialty: "Consultant Cardiologist".to_string(),
        booking_date: date,
        day: date.format("%A").to_string(),
        booking_time: "10:00AM TO 12:00PM".to_string(),
        clinic: "Cardiac Care Clinic".to_string(),
        created_at: None,
        extra: Map::new(),
    }
}

pub fn book_request(doctor: &str, date: NaiveDate, time: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        doctor_name: doctor.to_string(),
        booking_date: date,
        booking_time: time.to_string(),
        patient_name: "Hamza Tariq".to_string(),
        patient_phone: "0300-1234567".to_string(),
    }
}
