use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, AppointmentCellState};

pub fn appointment_routes(state: AppointmentCellState) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/slots", get(handlers::get_available_slots))
        .route("/consistency", get(handlers::verify_ledger_consistency))
        .route("/by-phone/{phone}", get(handlers::find_appointments_by_phone))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .with_state(state)
}
