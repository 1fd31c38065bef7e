use axum::{routing::get, Router};

use crate::handlers::{self, DoctorCellState};

pub fn doctor_routes(state: DoctorCellState) -> Router {
    Router::new()
        .route("/search", get(handlers::search_doctors))
        .route("/summaries", get(handlers::list_doctor_summaries))
        .route("/specialty", get(handlers::search_by_specialty))
        .with_state(state)
}
