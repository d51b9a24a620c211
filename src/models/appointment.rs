use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType};

/// A scheduled patient encounter. `id` is unique within the book and
/// assigned by it; callers never choose one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub date: NaiveDate,
    #[serde(with = "wire_time")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
}

/// Form submission for a new appointment. Status is never accepted from
/// the caller: new appointments always start `confirmed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: String,
    pub date: NaiveDate,
    #[serde(with = "wire_time")]
    pub time: NaiveTime,
    #[serde(rename = "type", default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub doctor: Option<String>,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub patient_name: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "wire_time::option")]
    pub time: Option<NaiveTime>,
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "type")]
    pub appointment_type: Option<AppointmentType>,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub doctor: Option<String>,
}

impl Appointment {
    pub fn from_new(id: i64, new: NewAppointment) -> Self {
        Self {
            id,
            patient_name: new.patient_name,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Confirmed,
            appointment_type: new.appointment_type,
            notes: new.notes,
            phone: new.phone,
            doctor: new.doctor,
        }
    }

    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(v) = patch.patient_name {
            self.patient_name = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.time {
            self.time = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.appointment_type {
            self.appointment_type = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if patch.doctor.is_some() {
            self.doctor = patch.doctor;
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.status == AppointmentStatus::Canceled
    }
}

/// `HH:MM` wall-clock times. Seconds are accepted on input and dropped.
pub mod wire_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    }

    pub fn format(time: &NaiveTime) -> String {
        time.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid time {raw:?}: {e}")))
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.serialize_some(&super::format(t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|r| {
                super::parse(&r)
                    .map_err(|e| serde::de::Error::custom(format!("invalid time {r:?}: {e}")))
            })
            .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        Appointment {
            id: 1,
            patient_name: "Ahmed Alami".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 13).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            status: AppointmentStatus::Confirmed,
            appointment_type: AppointmentType::CheckUp,
            notes: "Regular check-up".into(),
            phone: None,
            doctor: None,
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["patientName"], "Ahmed Alami");
        assert_eq!(json["date"], "2025-05-13");
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["type"], "Check-up");
        assert_eq!(json["status"], "confirmed");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn new_appointment_rejects_malformed_date() {
        let body = r#"{"patientName":"X","date":"2025-13-40","time":"08:00"}"#;
        assert!(serde_json::from_str::<NewAppointment>(body).is_err());
    }

    #[test]
    fn new_appointment_defaults_type_and_notes() {
        let body = r#"{"patientName":"X","date":"2025-06-01","time":"08:00"}"#;
        let new: NewAppointment = serde_json::from_str(body).unwrap();
        assert_eq!(new.appointment_type, AppointmentType::Consultation);
        assert_eq!(new.notes, "");
    }

    #[test]
    fn time_accepts_seconds_on_input() {
        let body = r#"{"patientName":"X","date":"2025-06-01","time":"08:15:30"}"#;
        let new: NewAppointment = serde_json::from_str(body).unwrap();
        assert_eq!(wire_time::format(&new.time), "08:15");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut appt = sample();
        let patch: AppointmentPatch =
            serde_json::from_str(r#"{"time":"11:45","notes":"moved"}"#).unwrap();
        appt.apply(patch);
        assert_eq!(wire_time::format(&appt.time), "11:45");
        assert_eq!(appt.notes, "moved");
        assert_eq!(appt.patient_name, "Ahmed Alami");
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn from_new_starts_confirmed() {
        let new = NewAppointment {
            patient_name: "X".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            appointment_type: AppointmentType::Consultation,
            notes: String::new(),
            phone: None,
            doctor: None,
        };
        let appt = Appointment::from_new(6, new);
        assert_eq!(appt.id, 6);
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
    }
}
