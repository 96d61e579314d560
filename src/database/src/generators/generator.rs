use crate::loaders::{DatabaseEntity, LeagueEntity, MatchEntity, TeamEntity};
use crate::{DatabaseError, DatabaseResult};
use league_core::{
    Competition, HolidayCalendar, InvalidScoreReason, LeagueError, MatchResult, ScheduleSettings, ScoringEvent,
    SeasonWindow, TeamRef,
};
use log::debug;
use std::collections::HashMap;

const MAX_SLOTS_PER_PLAY_DATE: usize = 3;

/// Everything the core needs for one league: schedule inputs and recorded results.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub competition: Competition,
    /// Active teams in name order, the roster fixtures are drawn from.
    pub schedule_teams: Vec<TeamRef>,
    pub season: SeasonWindow,
    pub calendar: HolidayCalendar,
    pub settings: ScheduleSettings,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> DatabaseResult<Vec<LeagueData>> {
        data.leagues
            .iter()
            .filter(|league| league.is_active)
            .map(|league| Self::generate_league(league, data))
            .collect()
    }

    fn generate_league(league: &LeagueEntity, data: &DatabaseEntity) -> DatabaseResult<LeagueData> {
        let season = data
            .seasons
            .iter()
            .find(|season| season.id == league.season_id)
            .ok_or_else(|| DatabaseError::UnknownSeason {
                league_id: league.id.clone(),
                season_id: league.season_id.clone(),
            })?;

        let schedule_teams = Self::generate_schedule_teams(league);

        let mut settings = ScheduleSettings::default();
        if let Some(play_day) = league.play_day {
            settings.play_weekday = play_day;
        }
        settings.slots_per_play_date = league
            .slots_per_play_date
            .unwrap_or_else(|| ScheduleSettings::slots_for_roster(schedule_teams.len(), MAX_SLOTS_PER_PLAY_DATE));
        settings.venue = league.venue.clone();

        let competition = Competition {
            id: league.id.clone(),
            name: league.name.clone(),
            category: league.age_category.clone(),
            sport: league.sport_type,
            teams: league.teams.iter().map(Self::generate_team).collect(),
            matches: Self::generate_matches(league)?,
        };

        debug!(
            "league {} prepared: {} teams, {} matches, {} slots per date",
            league.name,
            competition.teams.len(),
            competition.matches.len(),
            settings.slots_per_play_date
        );

        Ok(LeagueData {
            competition,
            schedule_teams,
            season: season.window(),
            calendar: HolidayCalendar::new(season.holiday_intervals()),
            settings,
        })
    }

    fn generate_team(team: &TeamEntity) -> TeamRef {
        let team_ref = TeamRef::new(team.id.clone(), team.name.clone());

        match &team.color {
            Some(color) => team_ref.with_color(color.clone()),
            None => team_ref,
        }
    }

    fn generate_schedule_teams(league: &LeagueEntity) -> Vec<TeamRef> {
        let mut teams: Vec<&TeamEntity> = league.teams.iter().filter(|team| team.is_active).collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        teams.into_iter().map(Self::generate_team).collect()
    }

    fn generate_matches(league: &LeagueEntity) -> DatabaseResult<Vec<MatchResult>> {
        let player_teams: HashMap<&str, &str> = league
            .teams
            .iter()
            .flat_map(|team| team.players.iter().map(move |player| (player.id.as_str(), team.id.as_str())))
            .collect();

        league
            .matches
            .iter()
            .map(|entity| Self::generate_match(entity, &player_teams))
            .collect()
    }

    fn generate_match(entity: &MatchEntity, player_teams: &HashMap<&str, &str>) -> DatabaseResult<MatchResult> {
        let scheduled = MatchResult::new(entity.id.clone(), entity.home_team_id.clone(), entity.away_team_id.clone());

        let Some(result) = &entity.result else {
            return Ok(scheduled);
        };

        let mut generated = scheduled.with_score(
            Self::score(&entity.id, result.home_score)?,
            Self::score(&entity.id, result.away_score)?,
        );
        generated.finished = result.is_finished;

        for goal in &result.goals {
            let team_id = player_teams
                .get(goal.player_id.as_str())
                .ok_or_else(|| DatabaseError::UnknownPlayer {
                    match_id: entity.id.clone(),
                    player_id: goal.player_id.clone(),
                })?;

            generated = generated.with_event(ScoringEvent::new(goal.player_id.clone(), *team_id));
        }

        Ok(generated)
    }

    fn score(match_id: &str, raw: i64) -> DatabaseResult<u32> {
        u32::try_from(raw).map_err(|_| {
            DatabaseError::League(LeagueError::InvalidScore {
                match_id: match_id.to_string(),
                reason: InvalidScoreReason::Negative,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use chrono::Weekday;
    use league_core::Sport;

    fn snapshot(leagues: &str) -> DatabaseEntity {
        let json = format!(
            r#"{{
                "seasons": [{{
                    "id": "s1",
                    "name": "2024-2025",
                    "startDate": "2024-09-01",
                    "endDate": "2025-06-20",
                    "holidays": [{{ "name": "Winter", "startDate": "2024-12-20", "endDate": "2025-01-07" }}]
                }}],
                "leagues": {}
            }}"#,
            leagues
        );

        DatabaseLoader::parse(json.as_bytes()).unwrap()
    }

    const LEAGUE: &str = r##"[{
        "id": "l1",
        "name": "Football 3-4",
        "sportType": "FOOTBALL",
        "ageCategory": "GRADE_3_4",
        "seasonId": "s1",
        "teams": [
            { "id": "t2", "name": "Wolves", "players": [{ "id": "p2", "name": "Ana" }] },
            { "id": "t1", "name": "Bears", "color": "#aa0000", "players": [{ "id": "p1", "name": "Luis" }] },
            { "id": "t3", "name": "Cobras", "isActive": false },
            { "id": "t4", "name": "Eagles" }
        ],
        "matches": [
            {
                "id": "m1",
                "homeTeamId": "t1",
                "awayTeamId": "t2",
                "result": {
                    "homeScore": 2, "awayScore": 1, "isFinished": true,
                    "goals": [{ "playerId": "p1" }, { "playerId": "p1" }, { "playerId": "p2" }]
                }
            },
            { "id": "m2", "homeTeamId": "t2", "awayTeamId": "t4" }
        ]
    }, {
        "id": "l2",
        "name": "Archived",
        "sportType": "BASKETBALL",
        "ageCategory": "GRADE_5_6",
        "seasonId": "s1",
        "isActive": false
    }]"##;

    #[test]
    fn test_generate_active_leagues_only() {
        let leagues = DatabaseGenerator::generate(&snapshot(LEAGUE)).unwrap();

        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].competition.sport, Sport::Football);
        assert_eq!(leagues[0].competition.category, "GRADE_3_4");
    }

    #[test]
    fn test_schedule_roster_is_active_and_sorted() {
        let leagues = DatabaseGenerator::generate(&snapshot(LEAGUE)).unwrap();
        let league = &leagues[0];

        let names: Vec<&str> = league.schedule_teams.iter().map(|team| team.name.as_str()).collect();
        assert_eq!(names, vec!["Bears", "Eagles", "Wolves"]);

        assert_eq!(league.competition.teams.len(), 4);
        assert_eq!(league.schedule_teams[0].color.as_deref(), Some("#aa0000"));
    }

    #[test]
    fn test_settings_derived_from_roster() {
        let leagues = DatabaseGenerator::generate(&snapshot(LEAGUE)).unwrap();
        let settings = &leagues[0].settings;

        assert_eq!(settings.play_weekday, Weekday::Fri);
        assert_eq!(settings.slots_per_play_date, 2);
        assert_eq!(leagues[0].calendar.intervals().len(), 1);
    }

    #[test]
    fn test_matches_and_goals_converted() {
        let leagues = DatabaseGenerator::generate(&snapshot(LEAGUE)).unwrap();
        let matches = &leagues[0].competition.matches;

        assert_eq!(matches.len(), 2);
        assert!(matches[0].finished);
        assert_eq!((matches[0].home_score, matches[0].away_score), (2, 1));
        assert_eq!(
            matches[0].scoring_events,
            vec![
                ScoringEvent::new("p1", "t1"),
                ScoringEvent::new("p1", "t1"),
                ScoringEvent::new("p2", "t2"),
            ]
        );
        assert!(!matches[1].finished);
    }

    #[test]
    fn test_negative_score_rejected() {
        let leagues = r#"[{
            "id": "l1", "name": "L", "sportType": "FOOTBALL", "ageCategory": "GRADE_1_2", "seasonId": "s1",
            "teams": [{ "id": "a", "name": "A" }, { "id": "b", "name": "B" }],
            "matches": [{ "id": "m1", "homeTeamId": "a", "awayTeamId": "b",
                          "result": { "homeScore": -1, "awayScore": 0, "isFinished": true } }]
        }]"#;

        let result = DatabaseGenerator::generate(&snapshot(leagues));

        assert!(matches!(
            result,
            Err(DatabaseError::League(LeagueError::InvalidScore {
                reason: InvalidScoreReason::Negative,
                ..
            }))
        ));
    }

    #[test]
    fn test_unknown_season_and_player() {
        let leagues = r#"[{
            "id": "l1", "name": "L", "sportType": "FOOTBALL", "ageCategory": "GRADE_1_2", "seasonId": "missing"
        }]"#;
        assert!(matches!(
            DatabaseGenerator::generate(&snapshot(leagues)),
            Err(DatabaseError::UnknownSeason { .. })
        ));

        let leagues = r#"[{
            "id": "l1", "name": "L", "sportType": "FOOTBALL", "ageCategory": "GRADE_1_2", "seasonId": "s1",
            "teams": [{ "id": "a", "name": "A" }, { "id": "b", "name": "B" }],
            "matches": [{ "id": "m1", "homeTeamId": "a", "awayTeamId": "b",
                          "result": { "homeScore": 1, "awayScore": 0, "isFinished": true,
                                      "goals": [{ "playerId": "nobody" }] } }]
        }]"#;
        assert!(matches!(
            DatabaseGenerator::generate(&snapshot(leagues)),
            Err(DatabaseError::UnknownPlayer { .. })
        ));
    }

    #[test]
    fn test_bundled_snapshot_generates() {
        let database = DatabaseLoader::load().unwrap();
        let leagues = DatabaseGenerator::generate(&database).unwrap();

        assert!(!leagues.is_empty());
        assert!(leagues.iter().all(|league| league.settings.validate().is_ok()));
    }
}
