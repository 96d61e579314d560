use crate::team::TeamId;
use std::fmt;

/// Validation failures raised by the fixture generator and the standings engine.
///
/// All of them are deterministic: the same input always fails the same way,
/// so callers should surface them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    InsufficientTeams { found: usize },
    NoAvailableDates,
    InvalidSlotsPerPlayDate,
    InvalidScore { match_id: String, reason: InvalidScoreReason },
    UnknownTeamReference { match_id: String, team_id: TeamId },
    SelfMatch { match_id: String },
    DuplicateTeam { team_id: TeamId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidScoreReason {
    Negative,
    DrawNotAllowed,
}

impl fmt::Display for LeagueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueError::InsufficientTeams { found } => {
                write!(f, "at least 2 teams required to generate a schedule (found {})", found)
            }
            LeagueError::NoAvailableDates => {
                write!(f, "no available dates found for matches in the season window")
            }
            LeagueError::InvalidSlotsPerPlayDate => {
                write!(f, "slots per play date must be at least 1")
            }
            LeagueError::InvalidScore { match_id, reason } => match reason {
                InvalidScoreReason::Negative => {
                    write!(f, "match {}: score must not be negative", match_id)
                }
                InvalidScoreReason::DrawNotAllowed => {
                    write!(f, "match {}: drawn score is not allowed by the scoring policy", match_id)
                }
            },
            LeagueError::UnknownTeamReference { match_id, team_id } => {
                write!(f, "match {}: team {} is not part of the roster", match_id, team_id)
            }
            LeagueError::SelfMatch { match_id } => {
                write!(f, "match {}: a team cannot play itself", match_id)
            }
            LeagueError::DuplicateTeam { team_id } => {
                write!(f, "team {} appears more than once in the roster", team_id)
            }
        }
    }
}

impl std::error::Error for LeagueError {}

pub type LeagueResult<T> = Result<T, LeagueError>;
