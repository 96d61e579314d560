use crate::error::{LeagueError, LeagueResult};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

const DEFAULT_KICKOFF_HOUR: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub play_weekday: Weekday,
    pub slots_per_play_date: usize,
    pub kickoff: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        ScheduleSettings {
            play_weekday: Weekday::Fri,
            slots_per_play_date: 1,
            kickoff: NaiveTime::from_hms_opt(DEFAULT_KICKOFF_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
            venue: None,
        }
    }
}

impl ScheduleSettings {
    pub fn new(play_weekday: Weekday, slots_per_play_date: usize) -> Self {
        ScheduleSettings {
            play_weekday,
            slots_per_play_date,
            ..Default::default()
        }
    }

    pub fn with_kickoff(mut self, kickoff: NaiveTime) -> Self {
        self.kickoff = kickoff;
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn validate(&self) -> LeagueResult<()> {
        if self.slots_per_play_date == 0 {
            return Err(LeagueError::InvalidSlotsPerPlayDate);
        }

        Ok(())
    }

    /// Half the roster plays on each date, rounded up and capped at `max`.
    pub fn slots_for_roster(team_count: usize, max: usize) -> usize {
        team_count.div_ceil(2).clamp(1, max.max(1))
    }

    /// Fixed lookup used by older deployments: 4 teams share a date in pairs,
    /// 6 teams in threes, any other roster plays one match per date.
    pub fn legacy_slots_for_roster(team_count: usize) -> usize {
        match team_count {
            4 => 2,
            6 => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ScheduleSettings::default();

        assert_eq!(settings.play_weekday, Weekday::Fri);
        assert_eq!(settings.slots_per_play_date, 1);
        assert_eq!(settings.kickoff, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_slots_rejected() {
        let settings = ScheduleSettings::new(Weekday::Fri, 0);
        assert_eq!(settings.validate(), Err(LeagueError::InvalidSlotsPerPlayDate));
    }

    #[test]
    fn test_slots_for_roster() {
        assert_eq!(ScheduleSettings::slots_for_roster(2, 3), 1);
        assert_eq!(ScheduleSettings::slots_for_roster(4, 3), 2);
        assert_eq!(ScheduleSettings::slots_for_roster(5, 3), 3);
        assert_eq!(ScheduleSettings::slots_for_roster(10, 3), 3);
        assert_eq!(ScheduleSettings::slots_for_roster(10, 0), 1);
    }

    #[test]
    fn test_legacy_lookup() {
        assert_eq!(ScheduleSettings::legacy_slots_for_roster(4), 2);
        assert_eq!(ScheduleSettings::legacy_slots_for_roster(6), 3);
        assert_eq!(ScheduleSettings::legacy_slots_for_roster(5), 1);
        assert_eq!(ScheduleSettings::legacy_slots_for_roster(8), 1);
    }
}
