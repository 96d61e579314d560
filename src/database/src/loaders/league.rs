use chrono::Weekday;
use league_core::Sport;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntity {
    pub id: String,
    pub name: String,
    pub sport_type: Sport,
    pub age_category: String,
    pub season_id: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub play_day: Option<Weekday>,
    #[serde(default)]
    pub slots_per_play_date: Option<usize>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub players: Vec<PlayerEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub round: Option<u32>,
    #[serde(default)]
    pub result: Option<ResultEntity>,
}

/// Raw scores are signed in the export; negative values are rejected on conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntity {
    pub home_score: i64,
    pub away_score: i64,
    pub is_finished: bool,
    #[serde(default)]
    pub goals: Vec<GoalEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntity {
    pub player_id: String,
    #[serde(default)]
    pub minute: Option<u32>,
}

fn default_active() -> bool {
    true
}
