use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::*;

const SELECT_COLUMNS: &str =
    "SELECT id, patient_name, date, time, status, type, notes, phone, doctor FROM appointments";

pub fn insert_appointment(conn: &Connection, appt: &Appointment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (id, patient_name, date, time, status, type, notes, phone, doctor)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            appt.id,
            appt.patient_name,
            appt.date,
            wire_time::format(&appt.time),
            appt.status.as_str(),
            appt.appointment_type.as_str(),
            appt.notes,
            appt.phone,
            appt.doctor,
        ],
    )?;
    Ok(())
}

/// Overwrite every column of an existing row.
pub fn update_appointment(conn: &Connection, appt: &Appointment) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE appointments SET patient_name = ?2, date = ?3, time = ?4, status = ?5,
         type = ?6, notes = ?7, phone = ?8, doctor = ?9 WHERE id = ?1",
        params![
            appt.id,
            appt.patient_name,
            appt.date,
            wire_time::format(&appt.time),
            appt.status.as_str(),
            appt.appointment_type.as_str(),
            appt.notes,
            appt.phone,
            appt.doctor,
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Appointment".into(),
            id: appt.id.to_string(),
        });
    }
    Ok(())
}

/// Returns whether a row was removed.
pub fn delete_appointment(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let changed = conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()?;
    row.map(appointment_from_row).transpose()
}

/// All appointments, or one calendar day's, by date then time.
pub fn list_appointments(
    conn: &Connection,
    date: Option<NaiveDate>,
) -> Result<Vec<Appointment>, DatabaseError> {
    let rows: Vec<AppointmentRow> = match date {
        Some(day) => {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} WHERE date = ?1 ORDER BY date, time, id"
            ))?;
            let rows = stmt.query_map(params![day], read_row)?;
            rows.collect::<Result<_, _>>()?
        }
        None => {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY date, time, id"))?;
            let rows = stmt.query_map([], read_row)?;
            rows.collect::<Result<_, _>>()?
        }
    };

    rows.into_iter().map(appointment_from_row).collect()
}

type AppointmentRow = (
    i64,
    String,
    NaiveDate,
    String,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AppointmentRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn appointment_from_row(row: AppointmentRow) -> Result<Appointment, DatabaseError> {
    let (id, patient_name, date, time, status, appointment_type, notes, phone, doctor) = row;
    let time = wire_time::parse(&time).map_err(|e| DatabaseError::InvalidValue {
        field: "appointments.time",
        reason: format!("{time:?}: {e}"),
    })?;
    Ok(Appointment {
        id,
        patient_name,
        date,
        time,
        status: AppointmentStatus::from_str(&status)?,
        appointment_type: AppointmentType::from_str(&appointment_type)?,
        notes,
        phone,
        doctor,
    })
}
