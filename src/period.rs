use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// days in every month of the local calculation
pub const DAYS_PER_MONTH: i64 = 30;

pub const MONTHS_PER_YEAR: i64 = 12;

/// a year/month/day date as entered by the user
///
/// No calendar validation happens here: the values are whatever the caller
/// supplies, in whichever calendar the caller uses (typically Bikram Sambat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarTriple {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarTriple {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// elapsed time between two dates, normalized to 30-day months and 12-month years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_decimal_months: Decimal,
}

impl TimeBreakdown {
    /// compute the breakdown from `start` to `end`
    ///
    /// A negative day difference borrows one 30-day month, then a negative
    /// month difference borrows one year. Every field is then floored at zero
    /// on its own, so an end date before the start date never yields negative
    /// components. The floored fields need not add up to
    /// `total_decimal_months` in that case; see [`TimeBreakdown::is_consistent`].
    pub fn between(start: CalendarTriple, end: CalendarTriple) -> Self {
        let mut year_diff = i64::from(end.year) - i64::from(start.year);
        let mut month_diff = i64::from(end.month) - i64::from(start.month);
        let mut day_diff = i64::from(end.day) - i64::from(start.day);

        if day_diff < 0 {
            month_diff -= 1;
            day_diff += DAYS_PER_MONTH;
        }
        if month_diff < 0 {
            year_diff -= 1;
            month_diff += MONTHS_PER_YEAR;
        }

        let total = Decimal::from(year_diff * MONTHS_PER_YEAR + month_diff)
            + Decimal::from(day_diff) / Decimal::from(DAYS_PER_MONTH);

        Self {
            years: floor_to_u32(year_diff),
            months: floor_to_u32(month_diff),
            days: floor_to_u32(day_diff),
            total_decimal_months: total.max(Decimal::ZERO),
        }
    }

    /// months left over after the whole years, with days as a fraction of 30
    pub fn remaining_months(&self) -> Decimal {
        Decimal::from(self.months) + Decimal::from(self.days) / Decimal::from(DAYS_PER_MONTH)
    }

    /// true when the individual fields reconstruct `total_decimal_months`
    pub fn is_consistent(&self) -> bool {
        let rebuilt = Decimal::from(u64::from(self.years) * MONTHS_PER_YEAR as u64)
            + self.remaining_months();
        rebuilt == self.total_decimal_months
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

fn floor_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
