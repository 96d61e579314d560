use crate::team::TeamId;
use crate::utils::DateUtils;
use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One generated match: both teams meet on `date` as part of `round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSlot {
    pub round: u32,
    pub date: NaiveDate,
    pub kickoff: NaiveDateTime,
    pub home: TeamId,
    pub away: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl FixtureSlot {
    pub fn involves(&self, team_id: &str) -> bool {
        self.home == team_id || self.away == team_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleTour {
    pub round: u32,
    pub date: NaiveDate,
    pub items: Vec<FixtureSlot>,
}

/// Generated fixtures grouped by round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub tours: Vec<ScheduleTour>,
}

impl Schedule {
    pub fn from_fixtures(fixtures: Vec<FixtureSlot>) -> Self {
        let mut tours = Vec::new();

        for (round, group) in &fixtures.into_iter().chunk_by(|slot| slot.round) {
            let items: Vec<FixtureSlot> = group.collect();
            let date = items[0].date;

            tours.push(ScheduleTour { round, date, items });
        }

        Schedule { tours }
    }

    pub fn rounds(&self) -> usize {
        self.tours.len()
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &FixtureSlot> {
        self.tours.iter().flat_map(|tour| &tour.items)
    }

    pub fn for_team(&self, team_id: &str) -> Vec<&FixtureSlot> {
        self.fixtures().filter(|slot| slot.involves(team_id)).collect()
    }

    pub fn in_window(&self, from_date: NaiveDate, days: i64) -> Vec<&FixtureSlot> {
        self.fixtures()
            .filter(|slot| (0..=days).contains(&DateUtils::days_between(from_date, slot.date)))
            .collect()
    }

    pub fn for_team_in_window(&self, team_id: &str, from_date: NaiveDate, days: i64) -> Vec<&FixtureSlot> {
        self.in_window(from_date, days)
            .into_iter()
            .filter(|slot| slot.involves(team_id))
            .collect()
    }
}
