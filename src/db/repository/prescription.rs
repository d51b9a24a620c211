use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::{from_json_column, to_json_column};
use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_prescription(conn: &Connection, rx: &Prescription) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO prescriptions (id, patient_id, patient_name, date, medications,
         instructions, status, doctor, renewal_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            rx.id,
            rx.patient_id,
            rx.patient_name,
            rx.date,
            to_json_column("prescriptions.medications", &rx.medications)?,
            rx.instructions,
            rx.status.as_str(),
            rx.doctor,
            rx.renewal_date,
        ],
    )?;
    Ok(())
}

/// Newest first, as the prescriptions screen lists them.
pub fn list_prescriptions(conn: &Connection) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, patient_name, date, medications, instructions, status,
         doctor, renewal_date FROM prescriptions ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, NaiveDate>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, NaiveDate>(8)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, patient_id, patient_name, date, medications, instructions, status, doctor, renewal_date) =
            row?;
        out.push(Prescription {
            id,
            patient_id,
            patient_name,
            date,
            medications: from_json_column("prescriptions.medications", &medications)?,
            instructions,
            status: PrescriptionStatus::from_str(&status)?,
            doctor,
            renewal_date,
        });
    }
    Ok(out)
}
