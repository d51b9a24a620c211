use chrono::NaiveDate;
use serde::Deserialize;

use super::enums::{InsuranceScheme, PrescriptionStatus, StatusTab};

/// Selected calendar day plus list tab, as the appointments screen sends them.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct AppointmentQuery {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub tab: StatusTab,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PatientQuery {
    pub search: Option<String>,
    pub insurance: Option<InsuranceScheme>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PrescriptionQuery {
    pub search: Option<String>,
    /// `None` means every status (the "all" tab).
    pub status: Option<PrescriptionStatus>,
}
