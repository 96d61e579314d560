use crate::team::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A goal (or basket) credited to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringEvent {
    pub player_id: PlayerId,
    pub team_id: TeamId,
}

impl ScoringEvent {
    pub fn new(player_id: impl Into<PlayerId>, team_id: impl Into<TeamId>) -> Self {
        ScoringEvent {
            player_id: player_id.into(),
            team_id: team_id.into(),
        }
    }
}

/// Recorded outcome of a match. Only `finished` results count towards tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: String,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub finished: bool,
    #[serde(default)]
    pub scoring_events: Vec<ScoringEvent>,
}

impl MatchResult {
    /// A scheduled match without a result yet.
    pub fn new(match_id: impl Into<String>, home_team_id: impl Into<TeamId>, away_team_id: impl Into<TeamId>) -> Self {
        MatchResult {
            match_id: match_id.into(),
            home_team_id: home_team_id.into(),
            away_team_id: away_team_id.into(),
            home_score: 0,
            away_score: 0,
            finished: false,
            scoring_events: Vec::new(),
        }
    }

    /// Records the final score and marks the match finished.
    pub fn with_score(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = home_score;
        self.away_score = away_score;
        self.finished = true;
        self
    }

    pub fn with_event(mut self, event: ScoringEvent) -> Self {
        self.scoring_events.push(event);
        self
    }

    pub fn total(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }

    /// Home side's score compared with the away side's.
    pub fn home_outcome(&self) -> Ordering {
        self.home_score.cmp(&self.away_score)
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}
