use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::InsuranceScheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: u16,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub last_visit: NaiveDate,
    pub insurance: InsuranceScheme,
    pub insurance_id: String,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Registration form. `lastVisit` is stamped by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    #[serde(default)]
    pub age: u16,
    #[serde(default)]
    pub gender: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub insurance: InsuranceScheme,
    pub insurance_id: String,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}
