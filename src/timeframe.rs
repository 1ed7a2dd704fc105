//! Lookback timeframe selection and window resolution.
//!
//! Maps the fixed set of user-selectable timeframe labels to a concrete
//! lower-bound timestamp relative to "now". The set is closed at the CLI
//! level via [`clap::ValueEnum`], so an out-of-range label is a programming
//! error, not a runtime condition.

use chrono::{Duration, Local, NaiveDateTime};
use clap::ValueEnum;

/// A user-selectable lookback duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    /// Last 7 days.
    OneWeek,
    /// Last 30 days.
    OneMonth,
    /// Last 90 days.
    ThreeMonths,
    /// Last 180 days.
    SixMonths,
}

/// The lower bound of the publish-date filter for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    /// Items published at or after this instant are kept.
    pub since: NaiveDateTime,
}

impl TimeWindow {
    /// Whether a publish timestamp falls inside the window. The lower
    /// bound is inclusive.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.since
    }
}

impl Timeframe {
    /// Human-readable label shown in run metadata and output titles.
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::OneWeek => "1 Week",
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
        }
    }

    /// Lookback depth in days.
    pub fn lookback_days(self) -> i64 {
        match self {
            Timeframe::OneWeek => 7,
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 90,
            Timeframe::SixMonths => 180,
        }
    }

    /// Resolve the window ending at `now`.
    pub fn window_ending(self, now: NaiveDateTime) -> TimeWindow {
        TimeWindow {
            since: now - Duration::days(self.lookback_days()),
        }
    }

    /// Resolve the window ending at the current local time.
    pub fn window(self) -> TimeWindow {
        self.window_ending(Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_window_is_exactly_now_minus_days() {
        let now = at(2025, 8, 6);
        for (tf, days) in [
            (Timeframe::OneWeek, 7),
            (Timeframe::OneMonth, 30),
            (Timeframe::ThreeMonths, 90),
            (Timeframe::SixMonths, 180),
        ] {
            let window = tf.window_ending(now);
            assert_eq!(now - window.since, Duration::days(days));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Timeframe::OneWeek.label(), "1 Week");
        assert_eq!(Timeframe::OneMonth.label(), "1 Month");
        assert_eq!(Timeframe::ThreeMonths.label(), "3 Months");
        assert_eq!(Timeframe::SixMonths.label(), "6 Months");
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        let window = Timeframe::OneWeek.window_ending(at(2025, 8, 6));
        assert!(window.contains(window.since));
        assert!(window.contains(at(2025, 8, 6)));
        assert!(!window.contains(window.since - Duration::seconds(1)));
    }
}
