use chrono::Utc;
use rusqlite::{Connection, TransactionBehavior};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, CreateBookingRequest};
use crate::services::capacity::CapacityPolicy;

/// Reserve a seat for a new booking.
///
/// The duplicate check, both occupancy counts and the insert run inside one
/// IMMEDIATE transaction. SQLite takes the database write lock at BEGIN, so
/// the counts cannot go stale before the insert commits, even with other
/// service instances writing to the same database file. Counting and then
/// inserting without that lock is exactly the race this module exists to
/// close.
pub fn reserve(
    conn: &mut Connection,
    policy: &CapacityPolicy,
    req: &CreateBookingRequest,
) -> Result<Booking, AppError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    // The UNIQUE(employee_id) constraint backs this check; under the write
    // lock the two can never disagree.
    if queries::find_booking(&tx, &req.employee_id)?.is_some() {
        return Err(AppError::DuplicateBooking);
    }

    let slot_count = queries::count_slot(&tx, &req.date, &req.session, None)?;
    let dept_count =
        queries::count_slot_department(&tx, &req.date, &req.session, &req.department, None)?;
    if let Err(denied) = policy.admit(slot_count, dept_count) {
        tracing::debug!(
            employee_id = %req.employee_id,
            date = %req.date,
            session = %req.session,
            "admission denied: {denied}"
        );
        return Err(denied.into());
    }

    let now = Utc::now().naive_utc();
    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        employee_id: req.employee_id.clone(),
        name: req.name.clone(),
        division: req.division.clone(),
        department: req.department.clone(),
        date: req.date.clone(),
        session: req.session.clone(),
        barcode: req.employee_id.clone(),
        created_at: now,
        updated_at: now,
    };
    queries::insert_booking(&tx, &booking)?;
    tx.commit()?;

    Ok(booking)
}

/// Move an existing booking to a new (date, session) slot.
///
/// Same transactional discipline as [`reserve`]; the destination counts
/// exclude the booking being moved so an employee never collides with
/// themselves.
pub fn reschedule(
    conn: &mut Connection,
    policy: &CapacityPolicy,
    employee_id: &str,
    new_date: &str,
    new_session: &str,
) -> Result<Booking, AppError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let Some(existing) = queries::find_booking(&tx, employee_id)? else {
        return Err(AppError::NotFound(format!(
            "no booking for employee {employee_id}"
        )));
    };

    let slot_count = queries::count_slot(&tx, new_date, new_session, Some(employee_id))?;
    let dept_count = queries::count_slot_department(
        &tx,
        new_date,
        new_session,
        &existing.department,
        Some(employee_id),
    )?;
    if let Err(denied) = policy.admit(slot_count, dept_count) {
        tracing::debug!(
            employee_id,
            new_date,
            new_session,
            "reschedule denied: {denied}"
        );
        return Err(denied.into());
    }

    let now = Utc::now().naive_utc();
    queries::update_booking_slot(&tx, employee_id, new_date, new_session, &now)?;
    tx.commit()?;

    Ok(Booking {
        date: new_date.to_string(),
        session: new_session.to_string(),
        updated_at: now,
        ..existing
    })
}
