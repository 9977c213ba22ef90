//! Calendar Month Grid
//!
//! Sunday-first month layout and event placement.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::CalendarEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
    pub weekend: bool,
}

/// First day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Move by `delta` months, crossing year boundaries
    pub fn shift(&self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self { year: index.div_euclid(12), month: index.rem_euclid(12) as u32 + 1 }
    }

    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Whole weeks covering the month, Sunday first
    pub fn weeks(&self) -> Vec<[CalendarDay; 7]> {
        let first = self.first_day();
        let lead = first.weekday().num_days_from_sunday() as i64;
        let mut cursor = first - Duration::days(lead);
        let next_month = self.shift(1).first_day();

        let mut weeks = Vec::new();
        while cursor < next_month {
            let week = std::array::from_fn(|i| {
                let date = cursor + Duration::days(i as i64);
                CalendarDay {
                    date,
                    in_month: date.month() == self.month && date.year() == self.year,
                    weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                }
            });
            weeks.push(week);
            cursor += Duration::days(7);
        }
        weeks
    }
}

/// Events whose span covers `day`, ordered by start time
pub fn events_on<'a>(events: &'a [CalendarEvent], day: NaiveDate) -> Vec<&'a CalendarEvent> {
    let mut found: Vec<_> = events
        .iter()
        .filter(|e| {
            let start = e.start_date.date_naive();
            let end = e.end_date.date_naive().max(start);
            start <= day && day <= end
        })
        .collect();
    found.sort_by_key(|e| e.start_date);
    found
}

/// Local date from the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn event(id: u32, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("Event {}", id),
            description: None,
            start_date: DateTime::parse_from_rfc3339(start).unwrap(),
            end_date: DateTime::parse_from_rfc3339(end).unwrap(),
        }
    }

    #[test]
    fn test_may_2025_grid() {
        // May 1st 2025 is a Thursday
        let weeks = Month { year: 2025, month: 5 }.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0].date, NaiveDate::from_ymd_opt(2025, 4, 27).unwrap());
        assert!(!weeks[0][0].in_month);
        assert!(weeks[0][0].weekend);
        assert_eq!(weeks[0][4].date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert!(weeks[0][4].in_month);
        assert!(!weeks[0][4].weekend);
        assert_eq!(weeks[4][6].date, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
    }

    #[test]
    fn test_month_starting_sunday() {
        // June 1st 2025 is a Sunday
        let weeks = Month { year: 2025, month: 6 }.weeks();
        assert_eq!(weeks[0][0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(weeks.len(), 5);
    }

    #[test]
    fn test_shift_across_years() {
        let jan = Month { year: 2025, month: 1 };
        assert_eq!(jan.shift(-1), Month { year: 2024, month: 12 });
        assert_eq!(jan.shift(11), Month { year: 2025, month: 12 });
        assert_eq!(jan.shift(12), Month { year: 2026, month: 1 });
        assert_eq!(jan.label(), "January 2025");
    }

    #[test]
    fn test_events_on_spans_days() {
        let events = vec![
            event(1, "2025-05-12T14:00:00Z", "2025-05-12T15:00:00Z"),
            event(2, "2025-05-11T09:00:00Z", "2025-05-13T10:00:00Z"),
            event(3, "2025-05-15T09:00:00Z", "2025-05-15T10:00:00Z"),
        ];
        let day = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        let ids: Vec<u32> = events_on(&events, day).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let empty = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
        assert!(events_on(&events, empty).is_empty());
    }
}
