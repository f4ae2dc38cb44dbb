use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, CreateBookingRequest, RescheduleRequest, SessionAvailability};
use crate::services::allocator;
use crate::services::capacity::CapacityPolicy;
use crate::state::AppState;

/// Create a booking: validate, commit through the allocator, then generate
/// the confirmation QR. Generation happens strictly after commit and never
/// undoes it; on failure the booking is returned without a QR data URL.
pub async fn create(
    state: &AppState,
    req: &CreateBookingRequest,
) -> Result<(Booking, Option<String>), AppError> {
    req.validate(&state.config).map_err(AppError::Validation)?;

    let policy = CapacityPolicy::new(state.config.slot_capacity, state.config.department_quota);
    let booking = {
        let mut db = state.db.lock().unwrap();
        allocator::reserve(&mut db, &policy, req)?
    };
    tracing::info!(
        employee_id = %booking.employee_id,
        date = %booking.date,
        session = %booking.session,
        "booking created"
    );

    let qr_data_url = match state.artifacts.generate(&booking.employee_id).await {
        Ok(png) => Some(format!("data:image/png;base64,{}", BASE64.encode(png))),
        Err(e) => {
            tracing::warn!(
                employee_id = %booking.employee_id,
                "QR generation failed, booking stands: {e:#}"
            );
            None
        }
    };

    Ok((booking, qr_data_url))
}

pub async fn reschedule(state: &AppState, req: &RescheduleRequest) -> Result<Booking, AppError> {
    req.validate(&state.config).map_err(AppError::Validation)?;

    let policy = CapacityPolicy::new(state.config.slot_capacity, state.config.department_quota);
    let booking = {
        let mut db = state.db.lock().unwrap();
        allocator::reschedule(&mut db, &policy, &req.employee_id, &req.new_date, &req.new_session)?
    };
    tracing::info!(
        employee_id = %booking.employee_id,
        date = %booking.date,
        session = %booking.session,
        "booking rescheduled"
    );
    Ok(booking)
}

/// Status lookup: an existing booking is the success case.
pub fn status(state: &AppState, employee_id: &str) -> Result<Booking, AppError> {
    let db = state.db.lock().unwrap();
    queries::find_booking(&db, employee_id)?
        .ok_or_else(|| AppError::NotFound(format!("no booking for employee {employee_id}")))
}

/// Pre-booking duplicate check: an existing booking is the error case.
pub fn ensure_not_booked(state: &AppState, employee_id: &str) -> Result<(), AppError> {
    let db = state.db.lock().unwrap();
    match queries::find_booking(&db, employee_id)? {
        Some(_) => Err(AppError::DuplicateBooking),
        None => Ok(()),
    }
}

pub fn cancel(state: &AppState, employee_id: &str) -> Result<(), AppError> {
    let deleted = {
        let db = state.db.lock().unwrap();
        queries::delete_booking(&db, employee_id)?
    };
    if !deleted {
        return Err(AppError::NotFound(format!(
            "no booking for employee {employee_id}"
        )));
    }
    tracing::info!(employee_id, "booking cancelled");
    Ok(())
}

/// Seat picture for every configured session on one (date, department) pair.
pub fn list_availability(
    state: &AppState,
    date: &str,
    department: &str,
) -> Result<BTreeMap<String, SessionAvailability>, AppError> {
    let policy = CapacityPolicy::new(state.config.slot_capacity, state.config.department_quota);
    let db = state.db.lock().unwrap();

    let mut result = BTreeMap::new();
    for session in &state.config.sessions {
        let slot_count = queries::count_slot(&db, date, session, None)?;
        let dept_count = queries::count_slot_department(&db, date, session, department, None)?;
        result.insert(session.clone(), policy.availability(slot_count, dept_count));
    }
    Ok(result)
}
