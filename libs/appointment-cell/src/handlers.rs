use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::AppError;

use crate::models::{BookAppointmentRequest, SlotQuery};
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;
use crate::services::consistency::LedgerConsistencyService;

#[derive(Clone)]
pub struct AppointmentCellState {
    pub availability: Arc<AvailabilityService>,
    pub booking: Arc<BookingService>,
    pub consistency: Arc<LedgerConsistencyService>,
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<AppointmentCellState>,
    Query(query): Query<SlotQuery>,
) -> Json<Value> {
    let slots = state.availability.compute_slots(&query).await;

    Json(json!({
        "success": true,
        "total": slots.len(),
        "slots": slots
    }))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentCellState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.booking.book(request).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!(
            "Appointment confirmed with {} on {} at {}. Token number {}.",
            booking.doctor_name, booking.booking_date, booking.booking_time, booking.token_number
        ),
        "booking": booking
    })))
}

#[axum::debug_handler]
pub async fn find_appointments_by_phone(
    State(state): State<AppointmentCellState>,
    Path(phone): Path<String>,
) -> Json<Value> {
    let appointments = state.booking.find_by_phone(&phone).await;

    Json(json!({
        "success": true,
        "total": appointments.len(),
        "appointments": appointments
    }))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
) -> Json<Value> {
    // An id that was never issued is an empty result, not a fault.
    let appointments: Vec<_> = state.booking.find_by_id(appointment_id).await.into_iter().collect();

    Json(json!({
        "success": true,
        "total": appointments.len(),
        "appointments": appointments
    }))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let removed = state.booking.cancel(appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": format!(
            "Appointment {} with {} on {} has been cancelled.",
            removed.appointment_id, removed.doctor_name, removed.booking_date
        )
    })))
}

#[axum::debug_handler]
pub async fn verify_ledger_consistency(
    State(state): State<AppointmentCellState>,
) -> Result<Json<Value>, AppError> {
    let checked = state.consistency.verify_ledger().await?;

    Ok(Json(json!({
        "success": true,
        "checked": checked
    })))
}
