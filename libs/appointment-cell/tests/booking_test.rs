mod common;

use assert_matches::assert_matches;
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use appointment_cell::AppointmentError;
use shared_models::AbsenceBook;

use common::{
    book_request, context, context_with, monday, sample_schedule, seeded_booking, DAILY_CAPACITY,
};

#[tokio::test]
async fn test_book_assigns_first_token_and_persists() {
    let ctx = context();

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");

    assert_eq!(booking.token_number, 1);
    assert_eq!(booking.doctor_name, "Dr. Ali Mehdi");
    assert_eq!(booking.specialty, "Consultant Cardiologist");
    assert_eq!(booking.clinic, "Cardiac Care Clinic");
    assert_eq!(booking.day, "Monday");

    let ledger = ctx.store.bookings().await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].appointment_id, booking.appointment_id);
}

#[tokio::test]
async fn test_tokens_are_dense_per_doctor_per_day() {
    let ctx = context();

    for expected in 1..=3u32 {
        let booking = ctx
            .booking
            .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
            .await
            .expect("booking should succeed");
        assert_eq!(booking.token_number, expected);
    }

    // A different date restarts the sequence.
    let next_week = ctx
        .booking
        .book(book_request(
            "ali mehdi",
            monday() + Duration::days(7),
            "10:00AM TO 12:00PM",
        ))
        .await
        .expect("booking should succeed");
    assert_eq!(next_week.token_number, 1);
}

#[tokio::test]
async fn test_booking_past_capacity_fails_and_leaves_ledger_unchanged() {
    let full_day: Vec<_> = (1..=DAILY_CAPACITY)
        .map(|n| seeded_booking("Dr. Ali Mehdi", monday(), n))
        .collect();
    let ctx = context_with(sample_schedule(), AbsenceBook::new(), full_day);

    let result = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await;

    assert_matches!(
        result,
        Err(AppointmentError::CapacityExceeded { capacity, .. }) if capacity == DAILY_CAPACITY
    );
    assert_eq!(ctx.store.bookings().await.len(), DAILY_CAPACITY as usize);
}

#[tokio::test]
async fn test_book_unknown_doctor_fails() {
    let ctx = context();

    let result = ctx
        .booking
        .book(book_request("nobody", monday(), "10:00AM TO 12:00PM"))
        .await;

    assert_matches!(result, Err(AppointmentError::DoctorNotFound(_)));
    assert!(ctx.store.bookings().await.is_empty());
}

#[tokio::test]
async fn test_book_on_wrong_weekday_fails() {
    let ctx = context();
    let tuesday = monday() + Duration::days(1);

    let result = ctx
        .booking
        .book(book_request("ali mehdi", tuesday, "10:00AM TO 12:00PM"))
        .await;

    assert_matches!(result, Err(AppointmentError::SlotUnavailable { .. }));
}

#[tokio::test]
async fn test_book_with_wrong_time_block_fails() {
    let ctx = context();

    let result = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "08:00AM TO 09:00AM"))
        .await;

    assert_matches!(result, Err(AppointmentError::SlotUnavailable { .. }));
}

#[tokio::test]
async fn test_book_on_absence_date_fails() {
    let mut absences = AbsenceBook::new();
    absences.mark_absent("Dr. Ali Mehdi", monday());
    let ctx = context_with(sample_schedule(), absences, Vec::new());

    let result = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await;

    assert_matches!(result, Err(AppointmentError::SlotUnavailable { .. }));
}

#[tokio::test]
async fn test_on_leave_row_is_never_bookable() {
    let ctx = context();
    let wednesday = monday() + Duration::days(2);

    let result = ctx
        .booking
        .book(book_request("imran qureshi", wednesday, "On Leave"))
        .await;

    assert_matches!(result, Err(AppointmentError::SlotUnavailable { .. }));
}

#[tokio::test]
async fn test_cancel_restores_prior_ledger() {
    let ctx = context();
    let before = ctx.store.bookings().await;

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");
    let removed = ctx
        .booking
        .cancel(booking.appointment_id)
        .await
        .expect("cancel should succeed");

    assert_eq!(removed.appointment_id, booking.appointment_id);
    assert_eq!(ctx.store.bookings().await, before);
}

#[tokio::test]
async fn test_cancel_twice_fails_without_changing_ledger() {
    let ctx = context();

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");
    ctx.booking
        .cancel(booking.appointment_id)
        .await
        .expect("first cancel should succeed");

    let result = ctx.booking.cancel(booking.appointment_id).await;

    assert_matches!(result, Err(AppointmentError::AppointmentNotFound(id)) if id == booking.appointment_id);
    assert!(ctx.store.bookings().await.is_empty());
}

#[tokio::test]
async fn test_find_by_id_unknown_is_empty_not_fault() {
    let ctx = context();
    assert!(ctx.booking.find_by_id(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_find_by_phone_is_exact_match() {
    let ctx = context();

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");

    let found = ctx.booking.find_by_phone(&booking.patient_phone).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].appointment_id, booking.appointment_id);

    assert!(ctx.booking.find_by_phone("0300-0000000").await.is_empty());
}

#[tokio::test]
async fn test_unknown_ledger_fields_survive_a_booking_cycle() {
    let mut seeded = seeded_booking("Dr. Ali Mehdi", monday(), 1);
    seeded
        .extra
        .insert("referral_code".to_string(), json!("REF-778"));
    let ctx = context_with(sample_schedule(), AbsenceBook::new(), vec![seeded.clone()]);

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");
    ctx.booking
        .cancel(booking.appointment_id)
        .await
        .expect("cancel should succeed");

    let ledger = ctx.store.bookings().await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].extra.get("referral_code"), Some(&json!("REF-778")));
}

#[tokio::test]
async fn test_failed_save_fails_booking_and_keeps_ledger() {
    let ctx = context();
    ctx.store.fail_saves(true);

    let result = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await;

    assert_matches!(result, Err(AppointmentError::Storage(_)));
    assert!(ctx.store.bookings().await.is_empty());
}

#[tokio::test]
async fn test_confirmation_sms_is_sent_after_booking() {
    let ctx = context();

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");

    let messages = ctx.notifier.messages.lock().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, booking.patient_phone);
    assert!(messages[0].1.contains("Dr. Ali Mehdi"));
    assert!(messages[0].1.contains("token number 1"));
}

#[tokio::test]
async fn test_failed_booking_sends_no_sms() {
    let ctx = context();

    let _ = ctx
        .booking
        .book(book_request("nobody", monday(), "10:00AM TO 12:00PM"))
        .await;

    assert!(ctx.notifier.messages.lock().await.is_empty());
}

#[tokio::test]
async fn test_booking_resolves_canonical_doctor_name() {
    let ctx = context();

    // Reversed, lower-cased query still resolves to the catalog row.
    let booking = ctx
        .booking
        .book(book_request("mehdi ali", monday(), "10:00AM TO 12:00PM"))
        .await
        .expect("booking should succeed");

    assert_eq!(booking.doctor_name, "Dr. Ali Mehdi");
}

#[tokio::test]
async fn test_booking_matches_row_by_time_when_doctor_has_many() {
    let ctx = context();
    let thursday = monday() + Duration::days(3);

    let booking = ctx
        .booking
        .book(book_request("ali mehdi", thursday, "04:00PM TO 05:00PM"))
        .await
        .expect("booking should succeed");

    assert_eq!(booking.clinic, "Heart OPD");
    assert_eq!(booking.day, "Thursday");
}
