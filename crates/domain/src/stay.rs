// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay interval validation and overlap arithmetic.
//!
//! A stay interval is the half-open date range `[check_in, check_out)` of a
//! booking. The check-out day is not occupied, so a departure and an arrival
//! on the same day never conflict.
//!
//! ## Invariants
//!
//! - `check_out > check_in` (enforced at construction, an interval can never
//!   be observed in an invalid state)
//! - `nights() >= 1` follows from the above

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated check-in/check-out date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayInterval {
    /// The arrival date.
    check_in: NaiveDate,
    /// The departure date. Always strictly after `check_in`.
    check_out: NaiveDate,
}

impl StayInterval {
    /// Creates a new `StayInterval`.
    ///
    /// # Arguments
    ///
    /// * `check_in` - The arrival date
    /// * `check_out` - The departure date
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayInterval` if `check_out` is not
    /// strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayInterval {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in this stay.
    ///
    /// Always at least 1 for a validated interval.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Checks whether this stay intersects another.
    ///
    /// Intervals are half-open, so a stay checking out on the day another
    /// checks in does not overlap it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Checks whether a calendar date falls within this stay.
    ///
    /// The check-out date itself is not an occupied night.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

impl std::fmt::Display for StayInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_interval_has_positive_nights() {
        let stay = StayInterval::new(date(2026, 3, 2), date(2026, 3, 5)).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_single_night_stay() {
        let stay = StayInterval::new(date(2026, 3, 2), date(2026, 3, 3)).unwrap();
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn test_checkout_equal_to_checkin_rejected() {
        let result = StayInterval::new(date(2026, 3, 2), date(2026, 3, 2));
        assert!(matches!(
            result,
            Err(DomainError::InvalidStayInterval { .. })
        ));
    }

    #[test]
    fn test_checkout_before_checkin_rejected() {
        let result = StayInterval::new(date(2026, 3, 5), date(2026, 3, 2));
        assert!(result.is_err());
    }

    #[test]
    fn test_overlapping_stays() {
        let a = StayInterval::new(date(2026, 3, 2), date(2026, 3, 6)).unwrap();
        let b = StayInterval::new(date(2026, 3, 5), date(2026, 3, 9)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_stay_overlaps() {
        let outer = StayInterval::new(date(2026, 3, 1), date(2026, 3, 10)).unwrap();
        let inner = StayInterval::new(date(2026, 3, 4), date(2026, 3, 6)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        let a = StayInterval::new(date(2026, 3, 2), date(2026, 3, 6)).unwrap();
        let b = StayInterval::new(date(2026, 3, 6), date(2026, 3, 9)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_stays_do_not_overlap() {
        let a = StayInterval::new(date(2026, 3, 2), date(2026, 3, 4)).unwrap();
        let b = StayInterval::new(date(2026, 3, 10), date(2026, 3, 12)).unwrap();
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_occupied_nights_only() {
        let stay = StayInterval::new(date(2026, 3, 2), date(2026, 3, 4)).unwrap();
        assert!(stay.contains(date(2026, 3, 2)));
        assert!(stay.contains(date(2026, 3, 3)));
        assert!(!stay.contains(date(2026, 3, 4)));
        assert!(!stay.contains(date(2026, 3, 1)));
    }
}
