//! Demo records for a fresh install (`CLINICDESK_SEED=1`).

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Appointment, AppointmentStatus, AppointmentType, InsuranceScheme, Patient};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Five appointments over two days, one canceled and one pending.
pub fn demo_appointments() -> Vec<Appointment> {
    let rows = [
        (1, "Ahmed Alami", (2025, 5, 13), (9, 0), AppointmentStatus::Confirmed, AppointmentType::CheckUp, "Regular check-up, patient has hypertension"),
        (2, "Fatima Benali", (2025, 5, 13), (10, 30), AppointmentStatus::Confirmed, AppointmentType::FollowUp, "Follow-up after medication change"),
        (3, "Karim Tazi", (2025, 5, 13), (14, 0), AppointmentStatus::Canceled, AppointmentType::Consultation, "New patient consultation"),
        (4, "Leila Chraibi", (2025, 5, 14), (11, 0), AppointmentStatus::Confirmed, AppointmentType::CheckUp, "Annual physical examination"),
        (5, "Omar Ziani", (2025, 5, 14), (15, 30), AppointmentStatus::Pending, AppointmentType::FollowUp, "Follow-up for chronic condition"),
    ];

    rows.into_iter()
        .filter_map(|(id, name, (y, m, d), (h, min), status, kind, notes)| {
            Some(Appointment {
                id,
                patient_name: name.to_string(),
                date: date(y, m, d)?,
                time: time(h, min)?,
                status,
                appointment_type: kind,
                notes: notes.to_string(),
                phone: None,
                doctor: None,
            })
        })
        .collect()
}

pub fn demo_patients() -> Vec<Patient> {
    let rows: [(i64, &str, u16, &str, (i32, u32, u32), InsuranceScheme, &str, &[&str]); 6] = [
        (1, "Ahmed Alami", 45, "Male", (2025, 5, 10), InsuranceScheme::Cnss, "CNSS-123456789", &["Hypertension", "Diabetes Type 2"]),
        (2, "Fatima Benali", 32, "Female", (2025, 5, 5), InsuranceScheme::Ramed, "RAMED-987654321", &["Asthma"]),
        (3, "Karim Tazi", 28, "Male", (2025, 4, 20), InsuranceScheme::Cnss, "CNSS-456789123", &["Allergies"]),
        (4, "Leila Chraibi", 52, "Female", (2025, 5, 8), InsuranceScheme::Private, "PRV-789123456", &["Arthritis"]),
        (5, "Omar Ziani", 64, "Male", (2025, 4, 15), InsuranceScheme::Ramed, "RAMED-321654987", &["Coronary Artery Disease", "Hypertension"]),
        (6, "Salma Idrissi", 29, "Female", (2025, 5, 1), InsuranceScheme::Cnss, "CNSS-654321987", &[]),
    ];

    rows.into_iter()
        .filter_map(|(id, name, age, gender, (y, m, d), insurance, insurance_id, history)| {
            let slug = name.to_lowercase().replace(' ', ".");
            Some(Patient {
                id,
                name: name.to_string(),
                age,
                gender: gender.to_string(),
                phone: format!("+212 6XX-XXXXX{id}"),
                email: format!("{slug}@example.com"),
                last_visit: date(y, m, d)?,
                insurance,
                insurance_id: insurance_id.to_string(),
                medical_history: history.iter().map(|h| h.to_string()).collect(),
                avatar: None,
            })
        })
        .collect()
}
