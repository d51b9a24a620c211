//! Patient registry: registration, removal, search, and the per-scheme
//! (CNSS / RAMED / private) views of the patient list.

use chrono::NaiveDate;

use crate::models::{require, InsuranceScheme, NewPatient, Patient, ValidationError};

/// Placeholder avatar service used when the form leaves the picture empty.
const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";
const AVATAR_POOL: i64 = 70;

#[derive(Debug, Default, Clone)]
pub struct PatientRegistry {
    patients: Vec<Patient>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    pub fn records(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        self.patients.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    pub fn get(&self, id: i64) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Register a patient. `today` becomes the last visit date.
    pub fn add(&mut self, new: NewPatient, today: NaiveDate) -> Result<&Patient, ValidationError> {
        validate(&new)?;
        let id = self.next_id();
        let avatar = new
            .avatar
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| default_avatar(id));

        self.patients.push(Patient {
            id,
            name: new.name.trim().to_string(),
            age: new.age,
            gender: new.gender,
            phone: new.phone,
            email: new.email,
            last_visit: today,
            insurance: new.insurance,
            insurance_id: new.insurance_id,
            medical_history: new
                .medical_history
                .into_iter()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
            avatar: Some(avatar),
        });
        tracing::debug!(id, "Patient registered");
        Ok(&self.patients[self.patients.len() - 1])
    }

    /// Silent no-op for an unknown id.
    pub fn delete(&mut self, id: i64) -> Option<Patient> {
        let pos = self.patients.iter().position(|p| p.id == id)?;
        Some(self.patients.remove(pos))
    }

    /// Case-insensitive match on name, email or insurance label.
    /// A blank term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&Patient> {
        let needle = term.trim().to_lowercase();
        self.patients
            .iter()
            .filter(|p| needle.is_empty() || matches_term(p, &needle))
            .collect()
    }
}

/// Insurance tab over an already-searched list. `None` keeps every scheme.
pub fn by_insurance(list: Vec<&Patient>, scheme: Option<InsuranceScheme>) -> Vec<&Patient> {
    match scheme {
        None => list,
        Some(s) => list.into_iter().filter(|p| p.insurance == s).collect(),
    }
}

fn matches_term(patient: &Patient, needle: &str) -> bool {
    patient.name.to_lowercase().contains(needle)
        || patient.email.to_lowercase().contains(needle)
        || patient.insurance.as_str().to_lowercase().contains(needle)
}

fn validate(new: &NewPatient) -> Result<(), ValidationError> {
    require("name", &new.name)?;
    require("phone", &new.phone)?;
    require("insuranceId", &new.insurance_id)?;
    Ok(())
}

fn default_avatar(id: i64) -> String {
    format!("{AVATAR_BASE_URL}?img={}", id % AVATAR_POOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 13).unwrap()
    }

    fn new_patient(name: &str, email: &str, insurance: InsuranceScheme) -> NewPatient {
        NewPatient {
            name: name.into(),
            age: 40,
            gender: "Female".into(),
            phone: "+212 600000000".into(),
            email: email.into(),
            insurance,
            insurance_id: format!("{}-1", insurance.as_str()),
            medical_history: vec!["Asthma".into(), "  ".into()],
            avatar: None,
        }
    }

    fn seeded() -> PatientRegistry {
        let mut reg = PatientRegistry::new();
        reg.add(new_patient("Ahmed Alami", "ahmed.alami@example.com", InsuranceScheme::Cnss), today())
            .unwrap();
        reg.add(new_patient("Fatima Benali", "fatima@example.com", InsuranceScheme::Ramed), today())
            .unwrap();
        reg.add(new_patient("Leila Chraibi", "leila@example.com", InsuranceScheme::Private), today())
            .unwrap();
        reg
    }

    #[test]
    fn add_assigns_ids_and_stamps_visit() {
        let reg = seeded();
        let ids: Vec<i64> = reg.records().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(reg.records().iter().all(|p| p.last_visit == today()));
    }

    #[test]
    fn add_drops_blank_history_and_fills_avatar() {
        let reg = seeded();
        let first = reg.get(1).unwrap();
        assert_eq!(first.medical_history, vec!["Asthma".to_string()]);
        assert_eq!(first.avatar.as_deref(), Some("https://i.pravatar.cc/150?img=1"));
    }

    #[test]
    fn add_requires_phone_and_insurance_id() {
        let mut reg = PatientRegistry::new();
        let mut p = new_patient("Omar", "o@example.com", InsuranceScheme::Cnss);
        p.phone = String::new();
        assert_eq!(reg.add(p, today()).unwrap_err(), ValidationError::Required("phone"));

        let mut p = new_patient("Omar", "o@example.com", InsuranceScheme::Cnss);
        p.insurance_id = " ".into();
        assert_eq!(reg.add(p, today()).unwrap_err(), ValidationError::Required("insuranceId"));
        assert!(reg.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let reg = seeded();
        assert_eq!(reg.search("ALAMI").len(), 1);
        assert_eq!(reg.search("example.com").len(), 3);
        assert_eq!(reg.search("ramed")[0].name, "Fatima Benali");
        assert_eq!(reg.search("").len(), 3);
        assert!(reg.search("nobody").is_empty());
    }

    #[test]
    fn by_insurance_groups() {
        let reg = seeded();
        assert_eq!(by_insurance(reg.search(""), Some(InsuranceScheme::Cnss)).len(), 1);
        assert_eq!(by_insurance(reg.search(""), Some(InsuranceScheme::Private))[0].id, 3);
        assert_eq!(by_insurance(reg.search(""), None).len(), 3);
        // Search narrows first, then the scheme
        assert!(by_insurance(reg.search("fatima"), Some(InsuranceScheme::Cnss)).is_empty());
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut reg = seeded();
        assert!(reg.delete(42).is_none());
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.delete(2).unwrap().name, "Fatima Benali");
        assert_eq!(reg.next_id(), 4);
    }
}
