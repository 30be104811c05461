use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HOUR_MS, Ms, Span};

/// Hours of operation for the day/week hour grid.
pub const OPEN_HOUR: u32 = 5; // 05:00
pub const CLOSE_HOUR: u32 = 24; // midnight

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

/// The visible frame of the calendar: a contiguous run of whole days.
///
/// Construction is the only way to obtain one, so the span is always at
/// least one day wide and `days` is never empty. Weeks start on Monday;
/// months are padded out to full weeks on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    mode: ViewMode,
    span: Span,
    days: Vec<NaiveDate>,
}

impl TimeWindow {
    pub fn day(anchor: NaiveDate) -> Self {
        Self::from_days(ViewMode::Day, vec![anchor])
    }

    pub fn week(anchor: NaiveDate) -> Self {
        let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
        let days = (0..7).map(|i| monday + Duration::days(i)).collect();
        Self::from_days(ViewMode::Week, days)
    }

    pub fn month(anchor: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
            .expect("first of month is a valid date");
        let (next_year, next_month) = if anchor.month() == 12 {
            (anchor.year() + 1, 1)
        } else {
            (anchor.year(), anchor.month() + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("first of next month is a valid date")
            - Duration::days(1);

        let grid_start = first - Duration::days(first.weekday().num_days_from_monday() as i64);
        let grid_end = last + Duration::days((6 - last.weekday().num_days_from_monday()) as i64);
        let count = (grid_end - grid_start).num_days() + 1;
        let days = (0..count).map(|i| grid_start + Duration::days(i)).collect();
        Self::from_days(ViewMode::Month, days)
    }

    fn from_days(mode: ViewMode, days: Vec<NaiveDate>) -> Self {
        debug_assert!(!days.is_empty(), "TimeWindow must cover at least one day");
        let start = day_start_ms(days[0]);
        let end = day_start_ms(days[days.len() - 1] + Duration::days(1));
        Self {
            mode,
            span: Span::new(start, end),
            days,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn contains(&self, t: Ms) -> bool {
        self.span.contains_instant(t)
    }

    /// Lane index of `date` within the window, if visible.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }

    /// The hour-grid span of one day: `[OPEN_HOUR, CLOSE_HOUR)`.
    pub fn hour_grid(date: NaiveDate) -> Span {
        let base = day_start_ms(date);
        Span::new(
            base + OPEN_HOUR as Ms * HOUR_MS,
            base + CLOSE_HOUR as Ms * HOUR_MS,
        )
    }

    /// Number of hour slots on the day/week grid.
    pub fn hour_count() -> u32 {
        CLOSE_HOUR - OPEN_HOUR
    }
}

pub fn to_ms(dt: NaiveDateTime) -> Ms {
    dt.and_utc().timestamp_millis()
}

pub fn day_start_ms(date: NaiveDate) -> Ms {
    to_ms(date.and_time(NaiveTime::MIN))
}

/// Calendar date an instant falls on, if representable.
pub fn date_of(t: Ms) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(t).map(|dt| dt.date_naive())
}
