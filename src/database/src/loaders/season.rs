use chrono::NaiveDate;
use league_core::{HolidayInterval, SeasonWindow};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEntity {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub holidays: Vec<HolidayEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntity {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SeasonEntity {
    pub fn window(&self) -> SeasonWindow {
        SeasonWindow::new(self.start_date, self.end_date)
    }

    pub fn holiday_intervals(&self) -> Vec<HolidayInterval> {
        self.holidays
            .iter()
            .map(|holiday| HolidayInterval::named(holiday.name.clone(), holiday.start_date, holiday.end_date))
            .collect()
    }
}
