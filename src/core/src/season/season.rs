use crate::utils::DateUtils;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Inclusive date range a league is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        SeasonWindow { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn occurrences(&self, weekday: Weekday) -> Vec<NaiveDate> {
        DateUtils::weekdays_between(self.start, self.end, weekday)
    }
}
