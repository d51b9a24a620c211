//! Appointment scheduling core.
//!
//! `AppointmentBook` is the single owner of the appointment collection.
//! Everything a screen shows is derived from it on demand: the calendar
//! buckets (`bucket`), the selected-day and status-tab filters (`filter`),
//! and the week strip (`calendar`). Derivations are full rebuilds; the
//! collection is small (tens to hundreds of records).
//!
//! Mutations addressed by id are total: an unknown id leaves the book
//! unchanged and returns `None`.

pub mod bucket;
pub mod calendar;
pub mod filter;

pub use bucket::{bucket_by_date, DateBuckets};
pub use calendar::{day_indicators, today, week_of, week_view, CalendarDay, DayBoundary, DayIndicators};

use crate::models::{Appointment, AppointmentPatch, AppointmentQuery, AppointmentStatus, NewAppointment};

#[derive(Debug, Default, Clone)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from persisted records.
    pub fn from_records(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Raw collection, in insertion order.
    pub fn records(&self) -> &[Appointment] {
        &self.appointments
    }

    /// `max(id) + 1`, or 1 for an empty book.
    pub fn next_id(&self) -> i64 {
        self.appointments.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
    }

    pub fn get(&self, id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|a| a.id == id)
    }

    pub fn add(&mut self, new: NewAppointment) -> &Appointment {
        let appt = Appointment::from_new(self.next_id(), new);
        tracing::debug!(id = appt.id, date = %appt.date, "Appointment added");
        self.appointments.push(appt);
        &self.appointments[self.appointments.len() - 1]
    }

    pub fn cancel(&mut self, id: i64) -> Option<&Appointment> {
        self.set_status(id, AppointmentStatus::Canceled)
    }

    pub fn restore(&mut self, id: i64) -> Option<&Appointment> {
        self.set_status(id, AppointmentStatus::Confirmed)
    }

    fn set_status(&mut self, id: i64, status: AppointmentStatus) -> Option<&Appointment> {
        let appt = self.get_mut(id)?;
        appt.status = status;
        tracing::debug!(id, status = status.as_str(), "Appointment status changed");
        Some(&*appt)
    }

    pub fn update(&mut self, id: i64, patch: AppointmentPatch) -> Option<&Appointment> {
        let appt = self.get_mut(id)?;
        appt.apply(patch);
        Some(&*appt)
    }

    /// Remove permanently. Returns the removed record.
    pub fn delete(&mut self, id: i64) -> Option<Appointment> {
        let pos = self.appointments.iter().position(|a| a.id == id)?;
        Some(self.appointments.remove(pos))
    }

    pub fn buckets(&self) -> DateBuckets<'_> {
        bucket_by_date(&self.appointments)
    }

    /// Selected-day filter, then status tab, in display order.
    pub fn query(&self, query: AppointmentQuery) -> Vec<&Appointment> {
        let on_day = filter::on_date(&self.appointments, query.date);
        let mut out = filter::by_tab(on_day, query.tab);
        sort_for_display(&mut out);
        out
    }
}

/// Display order: by date, then time, then id.
pub fn sort_for_display(list: &mut [&Appointment]) {
    list.sort_by(|a, b| (a.date, a.time, a.id).cmp(&(b.date, b.time, b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentType, StatusTab};
    use chrono::{NaiveDate, NaiveTime};

    fn new_appt(name: &str, date: &str, time: &str) -> NewAppointment {
        NewAppointment {
            patient_name: name.into(),
            date: date.parse().unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            appointment_type: AppointmentType::Consultation,
            notes: String::new(),
            phone: None,
            doctor: None,
        }
    }

    fn book_with_five() -> AppointmentBook {
        let mut book = AppointmentBook::new();
        book.add(new_appt("Ahmed Alami", "2025-05-13", "09:00"));
        book.add(new_appt("Fatima Benali", "2025-05-13", "10:30"));
        book.add(new_appt("Karim Tazi", "2025-05-13", "14:00"));
        book.add(new_appt("Leila Chraibi", "2025-05-14", "11:00"));
        book.add(new_appt("Omar Ziani", "2025-05-14", "15:30"));
        book
    }

    #[test]
    fn first_id_is_one() {
        let mut book = AppointmentBook::new();
        assert_eq!(book.add(new_appt("X", "2025-06-01", "08:00")).id, 1);
    }

    #[test]
    fn add_after_max_id_five_yields_six_confirmed() {
        let mut book = book_with_five();
        let added = book.add(new_appt("X", "2025-06-01", "08:00"));
        assert_eq!(added.id, 6);
        assert_eq!(added.status, AppointmentStatus::Confirmed);
        assert_eq!(added.appointment_type, AppointmentType::Consultation);
    }

    #[test]
    fn next_id_follows_max_not_len() {
        let mut book = book_with_five();
        book.delete(2);
        book.delete(3);
        assert_eq!(book.len(), 3);
        assert_eq!(book.next_id(), 6);
        book.delete(5);
        assert_eq!(book.next_id(), 5);
    }

    #[test]
    fn cancel_then_restore_round_trips() {
        let mut book = book_with_five();
        let id = book.add(new_appt("X", "2025-06-01", "08:00")).id;
        let before = book.get(id).cloned().unwrap();

        assert_eq!(book.cancel(id).unwrap().status, AppointmentStatus::Canceled);
        let after = book.restore(id).cloned().unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn restore_confirms_pending_appointment() {
        let mut book = book_with_five();
        book.update(5, AppointmentPatch {
            status: Some(AppointmentStatus::Pending),
            ..Default::default()
        });
        assert_eq!(book.restore(5).unwrap().status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn mutations_on_deleted_id_are_noops() {
        let mut book = book_with_five();
        assert!(book.delete(3).is_some());
        let snapshot = book.records().to_vec();

        assert!(book.cancel(3).is_none());
        assert!(book.restore(3).is_none());
        assert!(book.delete(3).is_none());
        assert!(book.update(3, AppointmentPatch::default()).is_none());
        assert_eq!(book.records(), snapshot.as_slice());
    }

    #[test]
    fn unfiltered_query_orders_by_date_then_time() {
        let mut book = AppointmentBook::new();
        book.add(new_appt("A", "2025-05-14", "08:00"));
        book.add(new_appt("B", "2025-05-13", "10:30"));
        book.add(new_appt("C", "2025-05-13", "09:00"));
        let names: Vec<&str> = book.query(AppointmentQuery::default()).iter().map(|a| a.patient_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn query_applies_date_then_tab() {
        let mut book = book_with_five();
        book.cancel(3);
        let day = NaiveDate::from_ymd_opt(2025, 5, 13);

        let upcoming = book.query(AppointmentQuery { date: day, tab: StatusTab::Upcoming });
        assert_eq!(upcoming.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);

        let canceled = book.query(AppointmentQuery { date: day, tab: StatusTab::Canceled });
        assert_eq!(canceled.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);

        let everything = book.query(AppointmentQuery::default());
        assert_eq!(everything.len(), 5);
    }

    #[test]
    fn buckets_follow_mutations() {
        let mut book = book_with_five();
        assert_eq!(book.buckets().len(), 2);
        book.delete(4);
        book.delete(5);
        let buckets = book.buckets();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.values().next().unwrap().len(), 3);
    }
}
