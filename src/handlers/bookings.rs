use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, CreateBookingRequest, RescheduleRequest};
use crate::services::booking;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EmployeeQuery {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
}

// POST /api/book
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let (booking, qr_code) = booking::create(&state, &req).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "booking confirmed".to_string(),
            booking,
            qr_code,
        }),
    ))
}

// PUT /api/update-booking-date
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleResponse {
    pub message: String,
    pub updated_booking: Booking,
}

pub async fn reschedule_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, AppError> {
    let updated_booking = booking::reschedule(&state, &req).await?;
    Ok(Json(RescheduleResponse {
        message: "booking rescheduled".to_string(),
        updated_booking,
    }))
}

// GET /api/check-status — an existing booking is the success case.
pub async fn check_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<Booking>, AppError> {
    let booking = booking::status(&state, &query.employee_id)?;
    Ok(Json(booking))
}

// GET /api/check-booking — an existing booking is the error case.
pub async fn check_booking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    booking::ensure_not_booked(&state, &query.employee_id)?;
    Ok(Json(serde_json::json!({ "booked": false })))
}

// DELETE /api/booking
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    booking::cancel(&state, &query.employee_id)?;
    Ok(Json(serde_json::json!({ "message": "booking cancelled" })))
}
