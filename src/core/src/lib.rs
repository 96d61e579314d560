pub mod error;
pub mod league;
pub mod season;
pub mod team;
pub mod utils;

pub use error::{InvalidScoreReason, LeagueError, LeagueResult};

// Re-export league items
pub use league::{
    // Fixture generation
    FixtureGenerator, FixtureSlot, Pairing, RotationBuffer, RoundRobin,
    Schedule, ScheduleSettings, ScheduleTour,
    // Standings
    LeagueTable, Outcome, ScoringPolicy, Sport, StandingRow, compute_standings,
    ScorerRow, compute_scorers, CATEGORY_LEADERBOARD_SIZE, GENERAL_LEADERBOARD_SIZE,
    LeagueStatistics, MatchHighlight, OutcomeShares, TeamHighlight,
    MatchResult, ScoringEvent,
    Competition, CompetitionReport, StandingsAggregator,
};

pub use season::{HolidayCalendar, HolidayInterval, SeasonWindow};
pub use team::{PlayerId, TeamId, TeamRef};
pub use utils::*;
