//! Defines the inclusive year range over which observations are sampled,
//! and the fixed calendar anchor each year is sampled at.

use crate::error::InputError;
use chrono::{DateTime, TimeZone, Utc};

/// Earliest year with Meteomatics archive coverage for the requested
/// quantities. UI sliders should not offer years before this.
pub const EARLIEST_YEAR: i32 = 1941;

/// Latest year with complete archive coverage.
pub const LATEST_YEAR: i32 = 2023;

/// Month of the yearly sampling anchor (July).
pub(crate) const ANCHOR_MONTH: u32 = 7;

/// Day-of-month of the yearly sampling anchor.
pub(crate) const ANCHOR_DAY: u32 = 22;

/// Hour-of-day (UTC) of the yearly sampling anchor.
pub(crate) const ANCHOR_HOUR: u32 = 15;

/// An inclusive range of years, each sampled once at the fixed anchor
/// (July 22, 15:00 UTC).
///
/// A `TimeRange` can only be constructed through [`TimeRange::new`], so any
/// value of this type is already ordered and within the supported archive
/// window. Downstream code (query building, extraction) relies on that.
///
/// # Examples
///
/// ```
/// use meteotrend::TimeRange;
///
/// let range = TimeRange::new(2000, 2003).unwrap();
/// assert_eq!(range.year_count(), 4);
/// assert!(TimeRange::new(2003, 2000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start_year: i32,
    end_year: i32,
}

impl TimeRange {
    /// Creates a validated year range.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidYearRange`] when `end_year < start_year`,
    /// and [`InputError::YearOutOfRange`] when either year falls outside
    /// [`EARLIEST_YEAR`]..=[`LATEST_YEAR`].
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, InputError> {
        if end_year < start_year {
            return Err(InputError::InvalidYearRange {
                start_year,
                end_year,
            });
        }
        for year in [start_year, end_year] {
            if !(EARLIEST_YEAR..=LATEST_YEAR).contains(&year) {
                return Err(InputError::YearOutOfRange(year));
            }
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// First year of the range (inclusive).
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year of the range (inclusive).
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of yearly samples the range produces.
    pub fn year_count(&self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }

    /// Iterates the years of the range in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    /// The anchor timestamps the query samples, one per year, ascending.
    pub fn anchor_dates(&self) -> Vec<DateTime<Utc>> {
        self.years().map(anchor_date).collect()
    }

    /// The anchor of the first year, formatted for the upstream query.
    pub(crate) fn start_anchor_string(&self) -> String {
        anchor_string(self.start_year)
    }

    /// The anchor of the last year, formatted for the upstream query.
    pub(crate) fn end_anchor_string(&self) -> String {
        anchor_string(self.end_year)
    }
}

/// The sampling anchor of one year: July 22, 15:00:00 UTC.
pub fn anchor_date(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, ANCHOR_MONTH, ANCHOR_DAY, ANCHOR_HOUR, 0, 0)
        .single()
        .expect("July 22 15:00 UTC exists in every year")
}

/// The anchor formatted the way the Meteomatics URL grammar expects.
fn anchor_string(year: i32) -> String {
    format!("{year}-{ANCHOR_MONTH:02}-{ANCHOR_DAY:02}T{ANCHOR_HOUR:02}:00:00Z")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_count_is_inclusive() {
        let range = TimeRange::new(2000, 2003).unwrap();
        assert_eq!(range.year_count(), 4);
        assert_eq!(range.anchor_dates().len(), 4);
    }

    #[test]
    fn single_year_range_has_one_sample() {
        let range = TimeRange::new(2010, 2010).unwrap();
        assert_eq!(range.year_count(), 1);
        assert_eq!(range.anchor_dates().len(), 1);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = TimeRange::new(2003, 2000).unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidYearRange {
                start_year: 2003,
                end_year: 2000,
            }
        ));
    }

    #[test]
    fn rejects_years_outside_archive_window() {
        assert!(matches!(
            TimeRange::new(1900, 2000).unwrap_err(),
            InputError::YearOutOfRange(1900)
        ));
        assert!(matches!(
            TimeRange::new(2000, 2085).unwrap_err(),
            InputError::YearOutOfRange(2085)
        ));
    }

    #[test]
    fn anchors_fall_on_july_22_at_1500_utc() {
        let range = TimeRange::new(2000, 2003).unwrap();
        let expected: Vec<DateTime<Utc>> = (2000..=2003)
            .map(|y| Utc.with_ymd_and_hms(y, 7, 22, 15, 0, 0).unwrap())
            .collect();
        assert_eq!(range.anchor_dates(), expected);
    }

    #[test]
    fn anchor_strings_match_url_grammar() {
        let range = TimeRange::new(2000, 2003).unwrap();
        assert_eq!(range.start_anchor_string(), "2000-07-22T15:00:00Z");
        assert_eq!(range.end_anchor_string(), "2003-07-22T15:00:00Z");
    }
}
