use crate::error::{LeagueError, LeagueResult};
use crate::league::MatchResult;
use crate::team::{PlayerId, TeamId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const GENERAL_LEADERBOARD_SIZE: usize = 20;
pub const CATEGORY_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub tally: u32,
}

/// Top `top_n` scorers over finished matches, by tally then player id.
///
/// A player's team is the one credited on their first scoring event.
pub fn compute_scorers(matches: &[MatchResult], top_n: usize) -> LeagueResult<Vec<ScorerRow>> {
    let mut tallies: HashMap<&str, ScorerRow> = HashMap::new();

    for result in matches.iter().filter(|m| m.finished) {
        for event in &result.scoring_events {
            if !result.involves(&event.team_id) {
                return Err(LeagueError::UnknownTeamReference {
                    match_id: result.match_id.clone(),
                    team_id: event.team_id.clone(),
                });
            }

            tallies
                .entry(event.player_id.as_str())
                .or_insert_with(|| ScorerRow {
                    player_id: event.player_id.clone(),
                    team_id: event.team_id.clone(),
                    tally: 0,
                })
                .tally += 1;
        }
    }

    Ok(tallies
        .into_values()
        .sorted_by(|a, b| b.tally.cmp(&a.tally).then_with(|| a.player_id.cmp(&b.player_id)))
        .take(top_n)
        .collect())
}
