//! Tenure model for elapsed employment time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Months in a year used when prorating tenure.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Days in a year used when prorating the day component of tenure.
const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Elapsed employment time expressed as years, months and days.
///
/// Months are expected in `0..=11` and days in `0..=30`, but larger values
/// are accepted and simply contribute proportionally more tenure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenurePeriod {
    /// Whole years of service.
    pub years: u32,
    /// Additional months of service.
    pub months: u32,
    /// Additional days of service.
    pub days: u32,
}

impl TenurePeriod {
    /// Creates a new tenure period.
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Converts the tenure to a single fractional number of years.
    ///
    /// Computed as `years + months / 12 + days / 365`. The 12-month and
    /// 365-day conventions are mixed, so the result is only meaningful to two
    /// decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::TenurePeriod;
    /// use rust_decimal::Decimal;
    ///
    /// let tenure = TenurePeriod::new(2, 6, 0);
    /// assert_eq!(tenure.years_equivalent(), Decimal::new(25, 1));
    /// ```
    pub fn years_equivalent(&self) -> Decimal {
        Decimal::from(self.years)
            + Decimal::from(self.months) / MONTHS_PER_YEAR
            + Decimal::from(self.days) / DAYS_PER_YEAR
    }

    /// Returns true when months or days exceed their customary ranges.
    pub fn has_out_of_range_components(&self) -> bool {
        self.months > 11 || self.days > 30
    }

    /// Returns true when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}
