use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Filing window identified by year and fiscal bucket.
///
/// Buckets follow the filing cadence, not calendar quarters:
/// December through April is bucket 1, May through August bucket 2 and
/// September through November bucket 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub quarter: u8,
}

impl Period {
    pub const fn new(year: i32, quarter: u8) -> Self {
        Self { year, quarter }
    }
}

/// The two annual-return years considered for a given evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingYears {
    pub last_year: i32,
    pub last_two_years: i32,
}

pub const fn bucket_for_month(month: u32) -> u8 {
    match month {
        5..=8 => 2,
        9..=11 => 3,
        _ => 1,
    }
}

pub fn current_period(today: NaiveDate) -> Period {
    Period::new(today.year(), bucket_for_month(today.month()))
}

/// Window whose interim return and trial balance are due.
///
/// December opens bucket 1 of the following filing cycle, so its predecessor
/// is bucket 3 of the same year; January through April roll back a year.
pub fn previous_period(today: NaiveDate) -> Period {
    let current = current_period(today);
    match current.quarter {
        1 if today.month() == 12 => Period::new(current.year, 3),
        1 => Period::new(current.year - 1, 3),
        quarter => Period::new(current.year, quarter - 1),
    }
}

pub fn reporting_years(today: NaiveDate) -> ReportingYears {
    ReportingYears {
        last_year: today.year() - 1,
        last_two_years: today.year() - 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn every_month_maps_to_its_bucket() {
        let expected = [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 1];
        for (month, bucket) in (1..=12).zip(expected) {
            assert_eq!(bucket_for_month(month), bucket, "month {month}");
            assert_eq!(current_period(date(2024, month, 1)).quarter, bucket);
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket_for_month(4), 1);
        assert_eq!(bucket_for_month(5), 2);
        assert_eq!(bucket_for_month(8), 2);
        assert_eq!(bucket_for_month(9), 3);
        assert_eq!(bucket_for_month(11), 3);
        assert_eq!(bucket_for_month(12), 1);
    }

    #[test]
    fn previous_period_rolls_back_a_year_early_in_the_year() {
        assert_eq!(previous_period(date(2024, 1, 10)), Period::new(2023, 3));
        assert_eq!(previous_period(date(2024, 4, 30)), Period::new(2023, 3));
    }

    #[test]
    fn december_keeps_the_same_year() {
        assert_eq!(current_period(date(2024, 12, 5)), Period::new(2024, 1));
        assert_eq!(previous_period(date(2024, 12, 5)), Period::new(2024, 3));
    }

    #[test]
    fn later_buckets_step_back_within_the_year() {
        assert_eq!(previous_period(date(2024, 6, 15)), Period::new(2024, 1));
        assert_eq!(previous_period(date(2024, 10, 1)), Period::new(2024, 2));
    }

    #[test]
    fn reporting_years_trail_the_evaluation_year() {
        let years = reporting_years(date(2024, 6, 15));
        assert_eq!(years.last_year, 2023);
        assert_eq!(years.last_two_years, 2022);
    }
}
