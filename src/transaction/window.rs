//! Time-window presets for the transaction filters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// How far back the transaction list should reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DurationWindow {
    /// No time constraint.
    #[default]
    Default,
    /// Only transactions dated exactly yesterday.
    LastDay,
    /// Transactions from the last 7 days, including today.
    LastWeek,
    /// Transactions since the same day one calendar month ago.
    LastMonth,
    /// Transactions since the same day six calendar months ago.
    LastHalfYear,
    /// Transactions since the same day one calendar year ago.
    LastYear,
}

impl DurationWindow {
    /// Whether this is the "no constraint" option.
    pub fn is_default(self) -> bool {
        self == Self::Default
    }

    /// The text shown in the filter menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Any time",
            Self::LastDay => "Last day",
            Self::LastWeek => "Last week",
            Self::LastMonth => "Last month",
            Self::LastHalfYear => "Last half-year",
            Self::LastYear => "Last year",
        }
    }

    /// The date constraint this window puts on transactions, relative to `today`.
    ///
    /// Returns `None` for [DurationWindow::Default].
    pub fn cutoff(self, today: Date) -> Option<DateCutoff> {
        match self {
            Self::Default => None,
            Self::LastDay => Some(DateCutoff::Exactly(days_before(today, 1))),
            Self::LastWeek => Some(DateCutoff::OnOrAfter(days_before(today, 7))),
            Self::LastMonth => Some(DateCutoff::OnOrAfter(months_before(today, 1))),
            Self::LastHalfYear => Some(DateCutoff::OnOrAfter(months_before(today, 6))),
            Self::LastYear => Some(DateCutoff::OnOrAfter(months_before(today, 12))),
        }
    }
}

/// A constraint on transaction dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCutoff {
    /// The date must equal this date.
    Exactly(Date),
    /// The date must be on or after this date.
    OnOrAfter(Date),
}

impl DateCutoff {
    /// Whether `date` satisfies the constraint.
    pub fn contains(self, date: Date) -> bool {
        match self {
            Self::Exactly(cutoff) => date == cutoff,
            Self::OnOrAfter(cutoff) => date >= cutoff,
        }
    }
}

fn days_before(date: Date, days: i64) -> Date {
    date.checked_sub(Duration::days(days)).unwrap_or(Date::MIN)
}

/// Step back whole calendar months. The day is clamped to the length of the
/// target month, so 31 March minus one month is 28 (or 29) February.
fn months_before(date: Date, months: i32) -> Date {
    let month_index = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - months;
    let year = month_index.div_euclid(12);
    let month = match Month::try_from((month_index.rem_euclid(12) + 1) as u8) {
        Ok(month) => month,
        Err(_) => return Date::MIN,
    };
    let day = date.day().min(last_day_of_month(year, month));

    Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{DateCutoff, DurationWindow, months_before};

    #[test]
    fn default_has_no_cutoff() {
        assert_eq!(DurationWindow::Default.cutoff(date!(2024 - 05 - 10)), None);
    }

    #[test]
    fn last_day_is_exactly_yesterday() {
        let cutoff = DurationWindow::LastDay.cutoff(date!(2024 - 03 - 01)).unwrap();

        assert_eq!(cutoff, DateCutoff::Exactly(date!(2024 - 02 - 29)));
        assert!(cutoff.contains(date!(2024 - 02 - 29)));
        assert!(!cutoff.contains(date!(2024 - 03 - 01)));
        assert!(!cutoff.contains(date!(2024 - 02 - 28)));
    }

    #[test]
    fn last_week_is_seven_days_back() {
        let cutoff = DurationWindow::LastWeek.cutoff(date!(2024 - 01 - 03)).unwrap();

        assert_eq!(cutoff, DateCutoff::OnOrAfter(date!(2023 - 12 - 27)));
        assert!(cutoff.contains(date!(2024 - 01 - 03)));
        assert!(!cutoff.contains(date!(2023 - 12 - 26)));
    }

    #[test]
    fn month_windows_use_calendar_months() {
        let today = date!(2024 - 05 - 15);

        assert_eq!(
            DurationWindow::LastMonth.cutoff(today),
            Some(DateCutoff::OnOrAfter(date!(2024 - 04 - 15)))
        );
        assert_eq!(
            DurationWindow::LastHalfYear.cutoff(today),
            Some(DateCutoff::OnOrAfter(date!(2023 - 11 - 15)))
        );
        assert_eq!(
            DurationWindow::LastYear.cutoff(today),
            Some(DateCutoff::OnOrAfter(date!(2023 - 05 - 15)))
        );
    }

    #[test]
    fn month_arithmetic_clamps_to_month_end() {
        assert_eq!(months_before(date!(2024 - 03 - 31), 1), date!(2024 - 02 - 29));
        assert_eq!(months_before(date!(2023 - 03 - 31), 1), date!(2023 - 02 - 28));
        assert_eq!(months_before(date!(2024 - 08 - 31), 6), date!(2024 - 02 - 29));
        assert_eq!(months_before(date!(2024 - 02 - 29), 12), date!(2023 - 02 - 28));
    }

    #[test]
    fn month_arithmetic_crosses_year_boundary() {
        assert_eq!(months_before(date!(2024 - 01 - 10), 1), date!(2023 - 12 - 10));
        assert_eq!(months_before(date!(2024 - 02 - 10), 6), date!(2023 - 08 - 10));
    }
}
