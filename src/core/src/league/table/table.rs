use crate::error::{InvalidScoreReason, LeagueError, LeagueResult};
use crate::league::MatchResult;
use crate::league::table::{Outcome, ScoringPolicy};
use crate::team::{TeamId, TeamRef};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub scored_for: u64,
    pub scored_against: u64,
    pub points: u64,
}

impl StandingRow {
    pub fn new(team_id: TeamId) -> Self {
        StandingRow {
            team_id,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            scored_for: 0,
            scored_against: 0,
            points: 0,
        }
    }

    pub fn difference(&self) -> i64 {
        self.scored_for as i64 - self.scored_against as i64
    }

    fn record(&mut self, scored: u32, conceded: u32, outcome: Outcome, policy: &ScoringPolicy) {
        self.played += 1;
        self.scored_for += u64::from(scored);
        self.scored_against += u64::from(conceded);

        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }

        self.points += u64::from(policy.points(outcome));
    }

    /// Table order: points, difference and scored, all descending, then team id.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.difference().cmp(&self.difference()))
            .then_with(|| other.scored_for.cmp(&self.scored_for))
            .then_with(|| self.team_id.cmp(&other.team_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<StandingRow>,
}

impl LeagueTable {
    /// Builds the ranked table from finished matches.
    ///
    /// Teams without a finished match are left out of the table.
    pub fn compute(teams: &[TeamRef], matches: &[MatchResult], policy: &ScoringPolicy) -> LeagueResult<Self> {
        let mut rows: Vec<StandingRow> = teams.iter().map(|team| StandingRow::new(team.id.clone())).collect();

        let index: HashMap<&str, usize> = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| (team.id.as_str(), idx))
            .collect();

        for result in matches.iter().filter(|m| m.finished) {
            let (home_idx, away_idx) = Self::resolve(result, &index)?;
            let (home_outcome, away_outcome) = Self::classify(result, policy)?;

            rows[home_idx].record(result.home_score, result.away_score, home_outcome, policy);
            rows[away_idx].record(result.away_score, result.home_score, away_outcome, policy);
        }

        let mut rows: Vec<StandingRow> = rows.into_iter().filter(|row| row.played > 0).collect();
        rows.sort_by(StandingRow::rank_cmp);

        debug!("league table computed: {} rows from {} matches", rows.len(), matches.len());

        Ok(LeagueTable { rows })
    }

    fn resolve(result: &MatchResult, index: &HashMap<&str, usize>) -> LeagueResult<(usize, usize)> {
        let lookup = |team_id: &TeamId| {
            index
                .get(team_id.as_str())
                .copied()
                .ok_or_else(|| LeagueError::UnknownTeamReference {
                    match_id: result.match_id.clone(),
                    team_id: team_id.clone(),
                })
        };

        let home = lookup(&result.home_team_id)?;
        let away = lookup(&result.away_team_id)?;

        if home == away {
            return Err(LeagueError::SelfMatch {
                match_id: result.match_id.clone(),
            });
        }

        Ok((home, away))
    }

    fn classify(result: &MatchResult, policy: &ScoringPolicy) -> LeagueResult<(Outcome, Outcome)> {
        match result.home_outcome() {
            Ordering::Greater => Ok((Outcome::Win, Outcome::Loss)),
            Ordering::Less => Ok((Outcome::Loss, Outcome::Win)),
            Ordering::Equal if policy.allows_draws => Ok((Outcome::Draw, Outcome::Draw)),
            Ordering::Equal => Err(LeagueError::InvalidScore {
                match_id: result.match_id.clone(),
                reason: InvalidScoreReason::DrawNotAllowed,
            }),
        }
    }

    pub fn get(&self) -> &[StandingRow] {
        &self.rows
    }

    pub fn position(&self, team_id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.team_id == team_id)
    }

    pub fn leader(&self) -> Option<&StandingRow> {
        self.rows.first()
    }
}

pub fn compute_standings(
    teams: &[TeamRef],
    matches: &[MatchResult],
    policy: &ScoringPolicy,
) -> LeagueResult<Vec<StandingRow>> {
    LeagueTable::compute(teams, matches, policy).map(|table| table.rows)
}
