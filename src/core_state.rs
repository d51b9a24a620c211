//! Shared application state.
//!
//! `ClinicState` is the one owner of the in-memory stores (appointment
//! book, patient registry, prescription register) and of the SQLite
//! connection that persists them. Handlers get it through an `Arc`.
//!
//! Every mutation runs under the store's write lock. Appointments are
//! written to SQLite first and applied in memory after; patients and
//! prescriptions are applied first (the registry assigns and validates)
//! and rolled back if the write fails. Either way a failed write leaves
//! memory and disk in agreement.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::models::{
    Appointment, AppointmentPatch, AppointmentQuery, AppointmentStatus, NewAppointment,
    NewPatient, NewPrescription, Patient, PatientQuery, Prescription, PrescriptionQuery,
    require, ValidationError,
};
use crate::patients::{self, PatientRegistry};
use crate::prescriptions::{self, PrescriptionRegister};
use crate::schedule::{self, AppointmentBook, DayBoundary};
use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock poisoned")]
    LockPoisoned,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub struct ClinicState {
    conn: Mutex<Connection>,
    appointments: RwLock<AppointmentBook>,
    patients: RwLock<PatientRegistry>,
    prescriptions: RwLock<PrescriptionRegister>,
    day_boundary: DayBoundary,
}

impl ClinicState {
    /// Open (or create) the database at `path` and load every store.
    pub fn open(path: &Path, day_boundary: DayBoundary) -> Result<Self, CoreError> {
        let conn = db::open_database(path)?;
        tracing::info!(path = %path.display(), "Clinic database opened");
        Self::from_connection(conn, day_boundary)
    }

    /// Fresh in-memory database (tests, demos).
    pub fn in_memory(day_boundary: DayBoundary) -> Result<Self, CoreError> {
        Self::from_connection(db::open_memory_database()?, day_boundary)
    }

    fn from_connection(conn: Connection, day_boundary: DayBoundary) -> Result<Self, CoreError> {
        let appointments = AppointmentBook::from_records(db::list_appointments(&conn, None)?);
        let patients = PatientRegistry::from_records(db::list_patients(&conn)?);
        let prescriptions = PrescriptionRegister::from_records(db::list_prescriptions(&conn)?);

        tracing::info!(
            appointments = appointments.len(),
            patients = patients.len(),
            prescriptions = prescriptions.records().len(),
            "Clinic stores loaded"
        );

        Ok(Self {
            conn: Mutex::new(conn),
            appointments: RwLock::new(appointments),
            patients: RwLock::new(patients),
            prescriptions: RwLock::new(prescriptions),
            day_boundary,
        })
    }

    /// Insert the demo data set into empty stores. Returns whether anything
    /// was written.
    pub fn seed_if_empty(&self) -> Result<bool, CoreError> {
        let mut book = self.write_appointments()?;
        let mut registry = self.patients.write().map_err(|_| CoreError::LockPoisoned)?;
        if !book.is_empty() || !registry.is_empty() {
            return Ok(false);
        }

        let appointments = seed::demo_appointments();
        let patients = seed::demo_patients();
        {
            let mut conn = self.conn()?;
            let tx = conn.transaction().map_err(DatabaseError::from)?;
            for appt in &appointments {
                db::insert_appointment(&tx, appt)?;
            }
            for patient in &patients {
                db::insert_patient(&tx, patient)?;
            }
            tx.commit().map_err(DatabaseError::from)?;
        }

        tracing::info!(
            appointments = appointments.len(),
            patients = patients.len(),
            "Seeded demo data"
        );
        *book = AppointmentBook::from_records(appointments);
        *registry = PatientRegistry::from_records(patients);
        Ok(true)
    }

    pub fn today(&self) -> NaiveDate {
        schedule::today(self.day_boundary)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.conn.lock().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Appointments ────────────────────────────────────────

    pub fn read_appointments(&self) -> Result<RwLockReadGuard<'_, AppointmentBook>, CoreError> {
        self.appointments.read().map_err(|_| CoreError::LockPoisoned)
    }

    fn write_appointments(&self) -> Result<RwLockWriteGuard<'_, AppointmentBook>, CoreError> {
        self.appointments.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn list_appointments(&self, query: AppointmentQuery) -> Result<Vec<Appointment>, CoreError> {
        let book = self.read_appointments()?;
        Ok(book.query(query).into_iter().cloned().collect())
    }

    pub fn get_appointment(&self, id: i64) -> Result<Option<Appointment>, CoreError> {
        Ok(self.read_appointments()?.get(id).cloned())
    }

    pub fn add_appointment(&self, new: NewAppointment) -> Result<Appointment, CoreError> {
        require("patientName", &new.patient_name)?;

        let mut book = self.write_appointments()?;
        let preview = Appointment::from_new(book.next_id(), new.clone());
        db::insert_appointment(&*self.conn()?, &preview)?;

        let added = book.add(new).clone();
        tracing::info!(id = added.id, date = %added.date, "Appointment scheduled");
        Ok(added)
    }

    pub fn cancel_appointment(&self, id: i64) -> Result<Option<Appointment>, CoreError> {
        self.set_appointment_status(id, AppointmentStatus::Canceled, AppointmentBook::cancel)
    }

    pub fn restore_appointment(&self, id: i64) -> Result<Option<Appointment>, CoreError> {
        self.set_appointment_status(id, AppointmentStatus::Confirmed, AppointmentBook::restore)
    }

    fn set_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
        apply: fn(&mut AppointmentBook, i64) -> Option<&Appointment>,
    ) -> Result<Option<Appointment>, CoreError> {
        let mut book = self.write_appointments()?;
        let Some(mut next) = book.get(id).cloned() else {
            tracing::debug!(id, "Status change for unknown appointment ignored");
            return Ok(None);
        };
        next.status = status;
        db::update_appointment(&*self.conn()?, &next)?;

        let updated = apply(&mut *book, id).cloned();
        tracing::info!(id, status = status.as_str(), "Appointment status changed");
        Ok(updated)
    }

    /// `Ok(None)` when the id is unknown; nothing is written.
    pub fn update_appointment(
        &self,
        id: i64,
        patch: AppointmentPatch,
    ) -> Result<Option<Appointment>, CoreError> {
        if let Some(name) = &patch.patient_name {
            require("patientName", name)?;
        }

        let mut book = self.write_appointments()?;
        let Some(mut next) = book.get(id).cloned() else {
            tracing::debug!(id, "Update for unknown appointment ignored");
            return Ok(None);
        };
        next.apply(patch.clone());
        db::update_appointment(&*self.conn()?, &next)?;

        let updated = book.update(id, patch).cloned();
        tracing::info!(id, "Appointment updated");
        Ok(updated)
    }

    /// `Ok(None)` when the id is unknown.
    pub fn delete_appointment(&self, id: i64) -> Result<Option<Appointment>, CoreError> {
        let mut book = self.write_appointments()?;
        if book.get(id).is_none() {
            return Ok(None);
        }
        db::delete_appointment(&*self.conn()?, id)?;
        let removed = book.delete(id);
        tracing::info!(id, "Appointment deleted");
        Ok(removed)
    }

    // ── Patients ────────────────────────────────────────────

    pub fn read_patients(&self) -> Result<RwLockReadGuard<'_, PatientRegistry>, CoreError> {
        self.patients.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn list_patients(&self, query: &PatientQuery) -> Result<Vec<Patient>, CoreError> {
        let registry = self.read_patients()?;
        let term = query.search.as_deref().unwrap_or_default();
        Ok(patients::by_insurance(registry.search(term), query.insurance)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn add_patient(&self, new: NewPatient) -> Result<Patient, CoreError> {
        let today = self.today();
        let mut registry = self.patients.write().map_err(|_| CoreError::LockPoisoned)?;

        let added = registry.add(new, today)?.clone();
        if let Err(e) = db::insert_patient(&*self.conn()?, &added) {
            registry.delete(added.id);
            return Err(e.into());
        }
        tracing::info!(id = added.id, insurance = added.insurance.as_str(), "Patient registered");
        Ok(added)
    }

    pub fn delete_patient(&self, id: i64) -> Result<Option<Patient>, CoreError> {
        let mut registry = self.patients.write().map_err(|_| CoreError::LockPoisoned)?;
        if registry.get(id).is_none() {
            return Ok(None);
        }
        db::delete_patient(&*self.conn()?, id)?;
        tracing::info!(id, "Patient deleted");
        Ok(registry.delete(id))
    }

    // ── Prescriptions ───────────────────────────────────────

    pub fn list_prescriptions(&self, query: &PrescriptionQuery) -> Result<Vec<Prescription>, CoreError> {
        let register = self.prescriptions.read().map_err(|_| CoreError::LockPoisoned)?;
        let term = query.search.as_deref().unwrap_or_default();
        Ok(prescriptions::by_status(register.search(term), query.status)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn add_prescription(&self, new: NewPrescription) -> Result<Prescription, CoreError> {
        let today = self.today();
        let registry = self.read_patients()?;
        let mut register = self.prescriptions.write().map_err(|_| CoreError::LockPoisoned)?;

        let patient = registry.get(new.patient_id);
        let added = register.create(new, patient, today)?.clone();
        if let Err(e) = db::insert_prescription(&*self.conn()?, &added) {
            register.remove(added.id);
            return Err(e.into());
        }
        tracing::info!(id = added.id, patient_id = added.patient_id, "Prescription issued");
        Ok(added)
    }
}
