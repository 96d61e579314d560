use crate::league::{MatchResult, StandingRow};
use crate::team::TeamId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchHighlight {
    pub match_id: String,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
}

impl From<&MatchResult> for MatchHighlight {
    fn from(result: &MatchResult) -> Self {
        MatchHighlight {
            match_id: result.match_id.clone(),
            home_team_id: result.home_team_id.clone(),
            away_team_id: result.away_team_id.clone(),
            home_score: result.home_score,
            away_score: result.away_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamHighlight {
    pub team_id: TeamId,
    pub value: u64,
}

/// Percentages of won, drawn and lost team results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutcomeShares {
    pub won: f32,
    pub drawn: f32,
    pub lost: f32,
}

/// Competition-wide totals over finished matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueStatistics {
    pub matches: u32,
    pub total_scored: u64,
    pub average_per_match: f32,
    pub highest_scoring_match: Option<MatchHighlight>,
    pub biggest_margin: Option<MatchHighlight>,
    pub best_attack: Option<TeamHighlight>,
    pub best_defence: Option<TeamHighlight>,
    pub outcome_shares: OutcomeShares,
}

impl LeagueStatistics {
    pub fn from_results(matches: &[MatchResult]) -> Self {
        let mut statistics = LeagueStatistics::default();

        let mut highest: Option<&MatchResult> = None;
        let mut biggest: Option<&MatchResult> = None;

        for result in matches.iter().filter(|m| m.finished) {
            statistics.matches += 1;
            statistics.total_scored += result.total();

            if highest.is_none_or(|current| result.total() > current.total()) {
                highest = Some(result);
            }

            // draws never count as a margin
            if result.margin() > 0 && biggest.is_none_or(|current| result.margin() > current.margin()) {
                biggest = Some(result);
            }
        }

        if statistics.matches > 0 {
            statistics.average_per_match = statistics.total_scored as f32 / statistics.matches as f32;
        }

        statistics.highest_scoring_match = highest.map(MatchHighlight::from);
        statistics.biggest_margin = biggest.map(MatchHighlight::from);

        statistics
    }

    /// Adds the table-based figures. On equal values the higher ranked team is kept.
    pub fn with_standings(mut self, rows: &[StandingRow]) -> Self {
        let mut attack: Option<&StandingRow> = None;
        let mut defence: Option<&StandingRow> = None;

        for row in rows {
            if attack.is_none_or(|current| row.scored_for > current.scored_for) {
                attack = Some(row);
            }
            if defence.is_none_or(|current| row.scored_against < current.scored_against) {
                defence = Some(row);
            }
        }

        self.best_attack = attack.map(|row| TeamHighlight {
            team_id: row.team_id.clone(),
            value: row.scored_for,
        });
        self.best_defence = defence.map(|row| TeamHighlight {
            team_id: row.team_id.clone(),
            value: row.scored_against,
        });

        let played: u64 = rows.iter().map(|row| u64::from(row.played)).sum();
        if played > 0 {
            let share = |count: u64| (count as f64 * 100.0 / played as f64) as f32;

            self.outcome_shares = OutcomeShares {
                won: share(rows.iter().map(|row| u64::from(row.won)).sum()),
                drawn: share(rows.iter().map(|row| u64::from(row.drawn)).sum()),
                lost: share(rows.iter().map(|row| u64::from(row.lost)).sum()),
            };
        }

        self
    }
}
