use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SessionAvailability;
use crate::services::booking;
use crate::state::AppState;

// GET /api/slots?date=&department=
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub department: String,
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<BTreeMap<String, SessionAvailability>>, AppError> {
    let slots = booking::list_availability(&state, &query.date, &query.department)?;
    Ok(Json(slots))
}
