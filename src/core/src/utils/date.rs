use chrono::{Datelike, Days, NaiveDate, Weekday};

pub struct DateUtils;

impl DateUtils {
    /// First date on or after `date` that falls on `weekday`.
    pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
        let current = date.weekday().num_days_from_monday();
        let target = weekday.num_days_from_monday();

        let offset = (7 + target - current) % 7;

        date.checked_add_days(Days::new(offset as u64))
    }

    /// Every occurrence of `weekday` between `start` and `end`, both inclusive.
    pub fn weekdays_between(start: NaiveDate, end: NaiveDate, weekday: Weekday) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }

        match Self::next_weekday(start, weekday) {
            Some(first) => first.iter_weeks().take_while(|date| *date <= end).collect(),
            None => Vec::new(),
        }
    }

    pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days()
    }
}
