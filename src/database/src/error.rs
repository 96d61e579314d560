use league_core::LeagueError;
use std::fmt;

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownSeason { league_id: String, season_id: String },
    UnknownPlayer { match_id: String, player_id: String },
    League(LeagueError),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Io(err) => write!(f, "IO error: {}", err),
            DatabaseError::Json(err) => write!(f, "JSON error: {}", err),
            DatabaseError::UnknownSeason { league_id, season_id } => {
                write!(f, "league {} references unknown season {}", league_id, season_id)
            }
            DatabaseError::UnknownPlayer { match_id, player_id } => {
                write!(f, "match {}: goal by unknown player {}", match_id, player_id)
            }
            DatabaseError::League(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Io(err) => Some(err),
            DatabaseError::Json(err) => Some(err),
            DatabaseError::League(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Io(err)
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Json(err)
    }
}

impl From<LeagueError> for DatabaseError {
    fn from(err: LeagueError) -> Self {
        DatabaseError::League(err)
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
