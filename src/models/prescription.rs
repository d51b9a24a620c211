use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::PrescriptionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationLine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub date: NaiveDate,
    pub medications: Vec<MedicationLine>,
    pub instructions: String,
    pub status: PrescriptionStatus,
    pub doctor: String,
    pub renewal_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub patient_id: i64,
    pub medications: Vec<MedicationLine>,
    #[serde(default)]
    pub instructions: String,
    pub doctor: String,
}
