use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::services::catalog::CatalogService;

#[derive(Clone)]
pub struct DoctorCellState {
    pub catalog: Arc<CatalogService>,
}

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpecialtySearchQuery {
    pub specialty: String,
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<DoctorCellState>,
    Query(query): Query<DoctorSearchQuery>,
) -> Json<Value> {
    let doctors = state.catalog.find_doctors(&query.name).await;

    Json(json!({
        "success": true,
        "total": doctors.len(),
        "doctors": doctors
    }))
}

#[axum::debug_handler]
pub async fn list_doctor_summaries(
    State(state): State<DoctorCellState>,
    Query(query): Query<DoctorSearchQuery>,
) -> Json<Value> {
    let doctors = state.catalog.doctor_summaries(&query.name).await;

    Json(json!({
        "success": true,
        "total": doctors.len(),
        "doctors": doctors
    }))
}

#[axum::debug_handler]
pub async fn search_by_specialty(
    State(state): State<DoctorCellState>,
    Query(query): Query<SpecialtySearchQuery>,
) -> Json<Value> {
    let doctors = state.catalog.find_by_specialty(&query.specialty).await;

    Json(json!({
        "success": true,
        "total": doctors.len(),
        "doctors": doctors
    }))
}
