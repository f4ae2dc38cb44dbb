use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::Booking;

pub fn find_booking(conn: &Connection, employee_id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, employee_id, name, division, department, date, session, barcode, created_at, updated_at
         FROM bookings WHERE employee_id = ?1",
        params![employee_id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    let created_at = booking.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let updated_at = booking.updated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO bookings (id, employee_id, name, division, department, date, session, barcode, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            booking.id,
            booking.employee_id,
            booking.name,
            booking.division,
            booking.department,
            booking.date,
            booking.session,
            booking.barcode,
            created_at,
            updated_at,
        ],
    )?;
    Ok(())
}

pub fn update_booking_slot(
    conn: &Connection,
    employee_id: &str,
    date: &str,
    session: &str,
    updated_at: &NaiveDateTime,
) -> anyhow::Result<bool> {
    let updated_at = updated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let count = conn.execute(
        "UPDATE bookings SET date = ?1, session = ?2, updated_at = ?3 WHERE employee_id = ?4",
        params![date, session, updated_at, employee_id],
    )?;
    Ok(count > 0)
}

pub fn delete_booking(conn: &Connection, employee_id: &str) -> anyhow::Result<bool> {
    let count = conn.execute(
        "DELETE FROM bookings WHERE employee_id = ?1",
        params![employee_id],
    )?;
    Ok(count > 0)
}

/// Occupancy of a (date, session) slot. `exclude_employee` keeps a booking
/// that is being moved from counting against its own destination.
pub fn count_slot(
    conn: &Connection,
    date: &str,
    session: &str,
    exclude_employee: Option<&str>,
) -> anyhow::Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM bookings
         WHERE date = ?1 AND session = ?2 AND (?3 IS NULL OR employee_id != ?3)",
        params![date, session, exclude_employee],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn count_slot_department(
    conn: &Connection,
    date: &str,
    session: &str,
    department: &str,
    exclude_employee: Option<&str>,
) -> anyhow::Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM bookings
         WHERE date = ?1 AND session = ?2 AND department = ?3
           AND (?4 IS NULL OR employee_id != ?4)",
        params![date, session, department, exclude_employee],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let employee_id: String = row.get(1)?;
    let name: String = row.get(2)?;
    let division: String = row.get(3)?;
    let department: String = row.get(4)?;
    let date: String = row.get(5)?;
    let session: String = row.get(6)?;
    let barcode: String = row.get(7)?;
    let created_at_str: String = row.get(8)?;
    let updated_at_str: String = row.get(9)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        employee_id,
        name,
        division,
        department,
        date,
        session,
        barcode,
        created_at,
        updated_at,
    })
}
