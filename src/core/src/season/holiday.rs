use crate::season::SeasonWindow;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Closed blackout interval: no fixture is placed on `start..=end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HolidayInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        HolidayInterval {
            name: None,
            start,
            end,
        }
    }

    pub fn named(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        HolidayInterval {
            name: Some(name.into()),
            start,
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Unordered set of holiday intervals. Overlapping intervals are kept as they are.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    intervals: Vec<HolidayInterval>,
}

impl HolidayCalendar {
    pub fn new(intervals: Vec<HolidayInterval>) -> Self {
        HolidayCalendar { intervals }
    }

    pub fn intervals(&self) -> &[HolidayInterval] {
        &self.intervals
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.intervals.iter().any(|holiday| holiday.contains(date))
    }

    /// The draw pool: every `weekday` of the window outside all holidays, in date order.
    pub fn available_dates(&self, window: &SeasonWindow, weekday: Weekday) -> Vec<NaiveDate> {
        window
            .occurrences(weekday)
            .into_iter()
            .filter(|date| !self.contains(*date))
            .collect()
    }
}
