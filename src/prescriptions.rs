//! Prescription register: issuing prescriptions to registered patients,
//! search by patient or drug name, and the status tabs.

use chrono::{Duration, NaiveDate};

use crate::models::{
    require, NewPrescription, Patient, Prescription, PrescriptionStatus, ValidationError,
};

/// Days between issue and the renewal reminder.
pub const RENEWAL_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Default, Clone)]
pub struct PrescriptionRegister {
    prescriptions: Vec<Prescription>,
}

impl PrescriptionRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(prescriptions: Vec<Prescription>) -> Self {
        Self { prescriptions }
    }

    pub fn records(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn next_id(&self) -> i64 {
        self.prescriptions.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    /// Issue a prescription. The patient name is copied from the registry
    /// record so the prescription survives later renames.
    pub fn create(
        &mut self,
        new: NewPrescription,
        patient: Option<&Patient>,
        today: NaiveDate,
    ) -> Result<&Prescription, ValidationError> {
        let patient = patient.ok_or(ValidationError::UnknownPatient(new.patient_id))?;
        require("doctor", &new.doctor)?;

        let medications: Vec<_> = new
            .medications
            .into_iter()
            .filter(|m| !m.name.trim().is_empty())
            .collect();
        if medications.is_empty() {
            return Err(ValidationError::NoMedications);
        }

        let id = self.next_id();
        self.prescriptions.push(Prescription {
            id,
            patient_id: patient.id,
            patient_name: patient.name.clone(),
            date: today,
            medications,
            instructions: new.instructions,
            status: PrescriptionStatus::Active,
            doctor: new.doctor,
            renewal_date: today + Duration::days(RENEWAL_PERIOD_DAYS),
        });
        tracing::debug!(id, patient_id = patient.id, "Prescription issued");
        Ok(&self.prescriptions[self.prescriptions.len() - 1])
    }

    pub fn remove(&mut self, id: i64) -> Option<Prescription> {
        let pos = self.prescriptions.iter().position(|p| p.id == id)?;
        Some(self.prescriptions.remove(pos))
    }

    /// Matches the patient name or any medication name, case-insensitively.
    pub fn search(&self, term: &str) -> Vec<&Prescription> {
        let needle = term.trim().to_lowercase();
        self.prescriptions
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.patient_name.to_lowercase().contains(&needle)
                    || p.medications
                        .iter()
                        .any(|m| m.name.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

/// Status tab over an already-searched list. `None` is the "all" tab.
pub fn by_status(list: Vec<&Prescription>, status: Option<PrescriptionStatus>) -> Vec<&Prescription> {
    match status {
        None => list,
        Some(s) => list.into_iter().filter(|p| p.status == s).collect(),
    }
}
