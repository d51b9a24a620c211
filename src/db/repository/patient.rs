use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::{from_json_column, to_json_column};
use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (id, name, age, gender, phone, email, last_visit, insurance,
         insurance_id, medical_history, avatar)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            patient.id,
            patient.name,
            patient.age,
            patient.gender,
            patient.phone,
            patient.email,
            patient.last_visit,
            patient.insurance.as_str(),
            patient.insurance_id,
            to_json_column("patients.medical_history", &patient.medical_history)?,
            patient.avatar,
        ],
    )?;
    Ok(())
}

pub fn delete_patient(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let changed = conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, age, gender, phone, email, last_visit, insurance, insurance_id,
         medical_history, avatar FROM patients ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, u16>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, NaiveDate>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, String>(8)?,
            row.get::<_, String>(9)?,
            row.get::<_, Option<String>>(10)?,
        ))
    })?;

    let mut patients = Vec::new();
    for row in rows {
        let (id, name, age, gender, phone, email, last_visit, insurance, insurance_id, history, avatar) =
            row?;
        patients.push(Patient {
            id,
            name,
            age,
            gender,
            phone,
            email,
            last_visit,
            insurance: InsuranceScheme::from_str(&insurance)?,
            insurance_id,
            medical_history: from_json_column("patients.medical_history", &history)?,
            avatar,
        });
    }
    Ok(patients)
}
