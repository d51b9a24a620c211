//! Appointment list filters: selected calendar day, then status tab.
//! Both preserve the relative order of their input.

use chrono::NaiveDate;

use crate::models::{Appointment, StatusTab};

impl StatusTab {
    pub fn admits(&self, appt: &Appointment) -> bool {
        match self {
            StatusTab::Upcoming => !appt.is_canceled(),
            StatusTab::All => true,
            StatusTab::Canceled => appt.is_canceled(),
        }
    }
}

/// Appointments falling on `selected`, or everything when no day is selected.
///
/// `date` is a plain calendar day, so equality is calendar-day equality
/// with no time zone involved.
pub fn on_date<'a, I>(appointments: I, selected: Option<NaiveDate>) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    match selected {
        None => appointments.into_iter().collect(),
        Some(day) => appointments.into_iter().filter(|a| a.date == day).collect(),
    }
}

pub fn by_tab<'a, I>(appointments: I, tab: StatusTab) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .filter(|a| tab.admits(a))
        .collect()
}
