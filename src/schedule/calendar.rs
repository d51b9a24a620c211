//! Calendar views derived from the date buckets: the Sunday-first week
//! strip and per-day status indicators.

use chrono::{Datelike, Duration, Local, NaiveDate, Utc};
use serde::Serialize;

use super::bucket::DateBuckets;
use crate::models::{Appointment, AppointmentStatus};

/// Which clock decides what "today" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    #[default]
    Local,
    Utc,
}

impl std::str::FromStr for DayBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            other => Err(format!("unknown day boundary {other:?} (expected local or utc)")),
        }
    }
}

pub fn today(boundary: DayBoundary) -> NaiveDate {
    match boundary {
        DayBoundary::Local => Local::now().date_naive(),
        DayBoundary::Utc => Utc::now().date_naive(),
    }
}

/// The seven days of the week containing `date`, Sunday first.
/// `None` when that week runs past the ends of the calendar.
pub fn week_of(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let offset = Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    let start = date.checked_sub_signed(offset)?;
    let mut week = [start; 7];
    for (i, day) in week.iter_mut().enumerate().skip(1) {
        *day = start.checked_add_signed(Duration::days(i as i64))?;
    }
    Some(week)
}

/// Dot indicators shown on a calendar cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayIndicators {
    pub confirmed: bool,
    pub pending: bool,
    pub canceled: bool,
}

pub fn day_indicators(entries: &[&Appointment]) -> DayIndicators {
    let has = |status| entries.iter().any(|a| a.status == status);
    DayIndicators {
        confirmed: has(AppointmentStatus::Confirmed),
        pending: has(AppointmentStatus::Pending),
        canceled: has(AppointmentStatus::Canceled),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub indicators: DayIndicators,
    pub appointments: Vec<&'a Appointment>,
}

/// `None` under the same condition as [`week_of`].
pub fn week_view<'a>(
    buckets: &DateBuckets<'a>,
    date: NaiveDate,
    today: NaiveDate,
) -> Option<Vec<CalendarDay<'a>>> {
    let days = week_of(date)?
        .into_iter()
        .map(|day| {
            let appointments = buckets.get(&day).cloned().unwrap_or_default();
            CalendarDay {
                date: day,
                is_today: day == today,
                indicators: day_indicators(&appointments),
                appointments,
            }
        })
        .collect();
    Some(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentType;
    use crate::schedule::bucket::bucket_by_date;
    use chrono::{NaiveTime, Weekday};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn appt(id: i64, date: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_name: format!("Patient {id}"),
            date: d(date),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            status,
            appointment_type: AppointmentType::Consultation,
            notes: String::new(),
            phone: None,
            doctor: None,
        }
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-05-14 is a Wednesday.
        let week = week_of(d("2025-05-14")).unwrap();
        assert_eq!(week[0], d("2025-05-11"));
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6], d("2025-05-17"));
    }

    #[test]
    fn sunday_is_its_own_week_start() {
        assert_eq!(week_of(d("2025-05-11")).unwrap()[0], d("2025-05-11"));
    }

    #[test]
    fn week_crosses_month_boundary() {
        let week = week_of(d("2025-06-01")).unwrap();
        assert_eq!(week[0], d("2025-06-01"));
        let week = week_of(d("2025-05-31")).unwrap();
        assert_eq!(week[0], d("2025-05-25"));
        assert_eq!(week[6], d("2025-05-31"));
    }

    #[test]
    fn indicators_reflect_statuses_present() {
        let a = appt(1, "2025-05-13", AppointmentStatus::Confirmed);
        let b = appt(2, "2025-05-13", AppointmentStatus::Canceled);
        let ind = day_indicators(&[&a, &b]);
        assert!(ind.confirmed);
        assert!(!ind.pending);
        assert!(ind.canceled);
        assert_eq!(day_indicators(&[]), DayIndicators::default());
    }

    #[test]
    fn failed_has_no_indicator() {
        let a = appt(1, "2025-05-13", AppointmentStatus::Failed);
        assert_eq!(day_indicators(&[&a]), DayIndicators::default());
    }

    #[test]
    fn week_view_fills_seven_days() {
        let list = vec![
            appt(1, "2025-05-13", AppointmentStatus::Confirmed),
            appt(2, "2025-05-14", AppointmentStatus::Pending),
            appt(3, "2025-05-20", AppointmentStatus::Confirmed),
        ];
        let buckets = bucket_by_date(&list);
        let view = week_view(&buckets, d("2025-05-13"), d("2025-05-14")).unwrap();
        assert_eq!(view.len(), 7);
        let counts: Vec<usize> = view.iter().map(|day| day.appointments.len()).collect();
        assert_eq!(counts, vec![0, 0, 1, 1, 0, 0, 0]);
        assert!(view[3].is_today);
        assert!(view[3].indicators.pending);
    }

    #[test]
    fn week_at_calendar_edges_does_not_overflow() {
        // A week fits only when the edge day is itself the week's end.
        let max = NaiveDate::MAX;
        assert_eq!(week_of(max).is_some(), max.weekday() == Weekday::Sat);
        let min = NaiveDate::MIN;
        assert_eq!(week_of(min).is_some(), min.weekday() == Weekday::Sun);

        let buckets = DateBuckets::new();
        assert_eq!(week_view(&buckets, max, max).is_some(), week_of(max).is_some());
        assert_eq!(week_view(&buckets, min, min).is_some(), week_of(min).is_some());
    }

    #[test]
    fn day_boundary_parses() {
        assert_eq!("UTC".parse::<DayBoundary>().unwrap(), DayBoundary::Utc);
        assert_eq!(" local ".parse::<DayBoundary>().unwrap(), DayBoundary::Local);
        assert!("gmt+1".parse::<DayBoundary>().is_err());
    }
}
