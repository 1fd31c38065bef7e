use axum::{routing::get, Router};

use appointment_cell::handlers::AppointmentCellState;
use appointment_cell::router::appointment_routes;
use doctor_cell::handlers::DoctorCellState;
use doctor_cell::router::doctor_routes;

pub fn create_router(
    doctor_state: DoctorCellState,
    appointment_state: AppointmentCellState,
) -> Router {
    Router::new()
        .route("/", get(|| async { "HealthLine booking API is running!" }))
        .nest("/doctors", doctor_routes(doctor_state))
        .nest("/appointments", appointment_routes(appointment_state))
}
