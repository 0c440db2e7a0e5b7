//! Business-day arithmetic over a year-scoped holiday calendar.
//!
//! Filing deadlines are published as "the Nth working day from a start
//! date", so everything in this module reduces to one question: is a given
//! date a business day, and if not, which nearby date is.

mod colombia;
mod loader;

pub use loader::HolidayDataError;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Set of non-business dates for a single calendar year.
///
/// Weekends are always non-business days; the holiday set adds the national
/// observances on top. The calendar also remembers which year it covers so
/// callers can refuse to scan past the data instead of silently treating
/// uncovered days as working days.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    year: i32,
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build a calendar from an explicit holiday set.
    ///
    /// Dates outside `year` are rejected; a calendar must not pretend to
    /// know about observances it was never given.
    pub fn new(year: i32, holidays: HashSet<NaiveDate>) -> Result<Self, HolidayDataError> {
        if let Some(outside) = holidays.iter().find(|date| date.year() != year) {
            return Err(HolidayDataError::OutsideCoverage {
                date: *outside,
                year,
            });
        }

        Ok(Self { year, holidays })
    }

    /// The official Colombian holiday calendar for 2026.
    pub fn colombia_2026() -> Self {
        Self {
            year: 2026,
            holidays: colombia::colombia_2026(),
        }
    }

    /// Load a replacement holiday table from a `fecha,nombre` CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(year: i32, path: P) -> Result<Self, HolidayDataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(year, file)
    }

    /// Load a replacement holiday table from any CSV reader.
    pub fn from_reader<R: Read>(year: i32, reader: R) -> Result<Self, HolidayDataError> {
        let holidays = loader::parse_holiday_rows(reader)?;
        Self::new(year, holidays)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// True when `date` falls inside the year this calendar has data for.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// A business day is a weekday that is not a designated holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// The `n`-th business day at or after `start`, zero-indexed.
    ///
    /// `start` itself is the first candidate: with `n == 0` a weekday start
    /// is returned unchanged, while a weekend or holiday start is skipped,
    /// never counted. The scan terminates because at most two consecutive
    /// weekend days separate working days once the holiday set runs out;
    /// callers that need every scanned day to be holiday-checked must keep
    /// the scan inside [`covers`](Self::covers) — `FilingCalendar::validate`
    /// enforces that for the shipped rule tables.
    pub fn nth_business_day(&self, start: NaiveDate, n: usize) -> NaiveDate {
        let mut date = start;
        let mut remaining = n;
        loop {
            if self.is_business_day(date) {
                if remaining == 0 {
                    return date;
                }
                remaining -= 1;
            }
            date = date + Duration::days(1);
        }
    }

    /// The first `len` business days at or after `start`, in order.
    ///
    /// The scan stops at the edge of holiday coverage rather than guessing
    /// about a year it has no data for, so the result may be shorter than
    /// `len`. Callers that need the full horizon check the length — that is
    /// what turns an under-provisioned holiday table into a loud
    /// configuration error instead of a wrong deadline.
    pub fn business_day_sequence(&self, start: NaiveDate, len: usize) -> Vec<NaiveDate> {
        let mut sequence = Vec::with_capacity(len);
        let mut date = start;
        while sequence.len() < len && self.covers(date) {
            if self.is_business_day(date) {
                sequence.push(date);
            }
            date = date + Duration::days(1);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn weekends_only(year: i32) -> HolidayCalendar {
        HolidayCalendar::new(year, HashSet::new()).expect("empty set always valid")
    }

    #[test]
    fn weekday_start_is_its_own_first_business_day() {
        let calendar = weekends_only(2026);
        let tuesday = date(2026, 2, 10);
        assert_eq!(calendar.nth_business_day(tuesday, 0), tuesday);
    }

    #[test]
    fn weekend_start_is_skipped_not_counted() {
        let calendar = weekends_only(2026);
        let saturday = date(2026, 2, 14);
        assert_eq!(calendar.nth_business_day(saturday, 0), date(2026, 2, 16));
    }

    #[test]
    fn holiday_start_is_skipped_not_counted() {
        let calendar = HolidayCalendar::colombia_2026();
        // 2026-01-01 is Año Nuevo, a Thursday.
        assert_eq!(
            calendar.nth_business_day(date(2026, 1, 1), 0),
            date(2026, 1, 2)
        );
    }

    #[test]
    fn sequence_skips_weekends() {
        let calendar = weekends_only(2026);
        let sequence = calendar.business_day_sequence(date(2026, 2, 10), 10);
        assert_eq!(sequence.first(), Some(&date(2026, 2, 10)));
        assert_eq!(sequence.last(), Some(&date(2026, 2, 23)));
        assert!(!sequence.contains(&date(2026, 2, 14)));
        assert!(!sequence.contains(&date(2026, 2, 15)));
    }

    #[test]
    fn sequence_never_lands_on_weekend_or_holiday() {
        let calendar = HolidayCalendar::colombia_2026();
        for day in calendar.business_day_sequence(date(2026, 1, 1), 120) {
            assert!(
                !matches!(day.weekday(), Weekday::Sat | Weekday::Sun),
                "landed on weekend {day}"
            );
            assert!(!calendar.is_holiday(day), "landed on holiday {day}");
        }
    }

    #[test]
    fn shifted_san_jose_monday_is_skipped() {
        let calendar = HolidayCalendar::colombia_2026();
        // San José observes on Monday 2026-03-23; Friday 2026-03-20 jumps
        // straight to Tuesday 2026-03-24.
        assert_eq!(
            calendar.nth_business_day(date(2026, 3, 20), 1),
            date(2026, 3, 24)
        );
    }

    #[test]
    fn rejects_holidays_outside_declared_year() {
        let mut holidays = HashSet::new();
        holidays.insert(date(2025, 12, 25));
        let error = HolidayCalendar::new(2026, holidays).expect_err("wrong year rejected");
        match error {
            HolidayDataError::OutsideCoverage { date: d, year } => {
                assert_eq!(d, date(2025, 12, 25));
                assert_eq!(year, 2026);
            }
            other => panic!("expected coverage error, got {other:?}"),
        }
    }

    #[test]
    fn coverage_is_year_scoped() {
        let calendar = HolidayCalendar::colombia_2026();
        assert!(calendar.covers(date(2026, 12, 31)));
        assert!(!calendar.covers(date(2027, 1, 1)));
    }

    #[test]
    fn sequence_stops_at_the_edge_of_coverage() {
        let calendar = weekends_only(2026);
        // Ten business days from 2026-12-28 would cross into 2027; only the
        // covered tail of December comes back.
        let sequence = calendar.business_day_sequence(date(2026, 12, 28), 10);
        assert_eq!(
            sequence,
            vec![
                date(2026, 12, 28),
                date(2026, 12, 29),
                date(2026, 12, 30),
                date(2026, 12, 31),
            ]
        );
    }
}
