//! Calendar bucketing: appointments grouped under their calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Appointment;

/// Calendar day -> that day's appointments, ascending by time.
pub type DateBuckets<'a> = BTreeMap<NaiveDate, Vec<&'a Appointment>>;

/// Group appointments by their `date` field.
///
/// Full rebuild on every call. Within a day the sort is stable, so two
/// appointments at the same time keep their collection order.
pub fn bucket_by_date<'a, I>(appointments: I) -> DateBuckets<'a>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut buckets: DateBuckets<'a> = BTreeMap::new();
    for appt in appointments {
        buckets.entry(appt.date).or_default().push(appt);
    }
    for day in buckets.values_mut() {
        day.sort_by_key(|a| a.time);
    }
    buckets
}
