//! Week alignment and week reference parsing

use crate::error::{Result, WorklogError};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Monday of the week containing `date`.
///
/// Idempotent: aligning an already aligned date returns it unchanged.
pub fn align_to_week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday 00:00:00 of the week containing `at`.
pub fn align_datetime(at: NaiveDateTime) -> NaiveDateTime {
    align_to_week_start(at.date()).and_time(NaiveTime::MIN)
}

/// Aligned start of the current local week
pub fn current_week_start() -> NaiveDate {
    align_to_week_start(Local::now().date_naive())
}

/// Move `week` by `delta` whole weeks and re-align.
pub fn shift_week(week: NaiveDate, delta: i64) -> NaiveDate {
    align_to_week_start(week + Duration::weeks(delta))
}

/// Whether forward navigation from `week` is allowed given the current week.
pub fn can_go_next(week: NaiveDate, current: NaiveDate) -> bool {
    align_to_week_start(week) < align_to_week_start(current)
}

/// A user-supplied reference to a week
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekReference {
    /// The week containing today
    Current,
    /// The week before the current one
    Previous,
    /// A number of whole weeks before the current one
    WeeksAgo(u32),
    /// The week containing a specific date
    Containing(NaiveDate),
}

impl WeekReference {
    /// Parse a week reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "this" | "current" | "today" | "this week" | "now" => Ok(WeekReference::Current),
            "last" | "previous" | "last week" | "prev" => Ok(WeekReference::Previous),
            _ if normalized.ends_with(" weeks ago") || normalized.ends_with(" week ago") => {
                let count = normalized
                    .trim_end_matches(" weeks ago")
                    .trim_end_matches(" week ago")
                    .trim();
                count
                    .parse::<u32>()
                    .map(WeekReference::WeeksAgo)
                    .map_err(|_| WorklogError::InvalidWeekReference(input.to_string()))
            }
            _ => NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
                .map(WeekReference::Containing)
                .map_err(|_| WorklogError::InvalidWeekReference(input.to_string())),
        }
    }

    /// Resolve to an aligned week start relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        let current = align_to_week_start(today);
        match self {
            WeekReference::Current => current,
            WeekReference::Previous => shift_week(current, -1),
            WeekReference::WeeksAgo(n) => shift_week(current, -(*n as i64)),
            WeekReference::Containing(date) => align_to_week_start(*date),
        }
    }

    /// Resolve and reject weeks that start after the current week.
    pub fn resolve_past(&self, today: NaiveDate) -> Result<NaiveDate> {
        let week = self.resolve(today);
        if week > align_to_week_start(today) {
            return Err(WorklogError::FutureWeek(week));
        }
        Ok(week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_align_midweek() {
        // Friday, Jan 17, 2025
        assert_eq!(align_to_week_start(date(2025, 1, 17)), date(2025, 1, 13));
    }

    #[test]
    fn test_align_sunday_goes_back_six_days() {
        assert_eq!(align_to_week_start(date(2025, 1, 19)), date(2025, 1, 13));
    }

    #[test]
    fn test_align_monday_unchanged() {
        assert_eq!(align_to_week_start(date(2025, 1, 13)), date(2025, 1, 13));
    }

    #[test]
    fn test_align_across_year_boundary() {
        // Wednesday, Jan 1, 2025
        assert_eq!(align_to_week_start(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_align_is_idempotent() {
        let mut d = date(2024, 2, 20);
        for _ in 0..30 {
            let once = align_to_week_start(d);
            assert_eq!(align_to_week_start(once), once);
            d = d + Duration::days(1);
        }
    }

    #[test]
    fn test_align_datetime_truncates_time() {
        let at = date(2025, 1, 16).and_hms_opt(17, 45, 3).unwrap();
        assert_eq!(
            align_datetime(at),
            date(2025, 1, 13).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(date(2025, 1, 13), 1), date(2025, 1, 20));
        assert_eq!(shift_week(date(2025, 1, 13), -2), date(2024, 12, 30));
        // Unaligned input is re-aligned
        assert_eq!(shift_week(date(2025, 1, 15), 0), date(2025, 1, 13));
    }

    #[test]
    fn test_can_go_next() {
        let current = date(2025, 1, 15);
        assert!(can_go_next(date(2025, 1, 6), current));
        assert!(!can_go_next(date(2025, 1, 13), current));
    }

    #[test]
    fn test_parse_named_refs() {
        assert_eq!(WeekReference::parse("this").unwrap(), WeekReference::Current);
        assert_eq!(WeekReference::parse("Today").unwrap(), WeekReference::Current);
        assert_eq!(WeekReference::parse("last").unwrap(), WeekReference::Previous);
        assert_eq!(
            WeekReference::parse("3 weeks ago").unwrap(),
            WeekReference::WeeksAgo(3)
        );
        assert_eq!(
            WeekReference::parse("1 week ago").unwrap(),
            WeekReference::WeeksAgo(1)
        );
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(
            WeekReference::parse("17-01-2025").unwrap(),
            WeekReference::Containing(date(2025, 1, 17))
        );
        assert_eq!(
            WeekReference::parse("2025-01-17").unwrap(),
            WeekReference::Containing(date(2025, 1, 17))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(WeekReference::parse("someday").is_err());
        assert!(WeekReference::parse("x weeks ago").is_err());
        assert!(WeekReference::parse("32-01-2025").is_err());
    }

    #[test]
    fn test_resolve() {
        let today = date(2025, 1, 17);
        assert_eq!(WeekReference::Current.resolve(today), date(2025, 1, 13));
        assert_eq!(WeekReference::Previous.resolve(today), date(2025, 1, 6));
        assert_eq!(WeekReference::WeeksAgo(3).resolve(today), date(2024, 12, 23));
        assert_eq!(
            WeekReference::Containing(date(2024, 12, 25)).resolve(today),
            date(2024, 12, 23)
        );
    }

    #[test]
    fn test_resolve_past_rejects_future_week() {
        let today = date(2025, 1, 17);
        let next = WeekReference::Containing(date(2025, 1, 20));
        assert!(matches!(
            next.resolve_past(today),
            Err(WorklogError::FutureWeek(_))
        ));
        // Later day in the current week is fine
        let sunday = WeekReference::Containing(date(2025, 1, 19));
        assert_eq!(sunday.resolve_past(today).unwrap(), date(2025, 1, 13));
    }
}
