use color_eyre::eyre::{Result, WrapErr};
use database::{DatabaseGenerator, DatabaseLoader, LeagueData};
use env_logger::Env;
use league_core::utils::{Logging, TimeEstimation};
use league_core::{
    Competition, CompetitionReport, FixtureGenerator, Schedule, ScorerRow, Sport, StandingsAggregator,
};
use log::{info, warn};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct LeagueOutput {
    league_id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<CompetitionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_error: Option<String>,
}

#[derive(Serialize)]
struct SportLeaderboard {
    sport: Sport,
    scorers: Vec<ScorerRow>,
}

#[derive(Serialize)]
struct Output {
    leagues: Vec<LeagueOutput>,
    leaderboards: Vec<SportLeaderboard>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (database, estimated) = TimeEstimation::estimate(|| match env::var("LEAGUE_DATA") {
        Ok(path) => DatabaseLoader::load_from(path),
        Err(_) => DatabaseLoader::load(),
    });
    let database = database.wrap_err("failed to load league snapshot")?;

    info!("database loaded: {} ms", estimated);

    let leagues = Logging::estimate_result(|| DatabaseGenerator::generate(&database), "leagues prepared")
        .wrap_err("failed to prepare leagues")?;

    let leaderboard_size = match env::var("TOP_SCORERS") {
        Ok(value) => Some(
            value
                .parse::<usize>()
                .wrap_err_with(|| format!("TOP_SCORERS must be a number, got {}", value))?,
        ),
        Err(_) => None,
    };

    let (output, estimated) = TimeEstimation::estimate(|| build_output(&leagues, leaderboard_size));

    info!("⚽ {} leagues processed: {} ms", output.leagues.len(), estimated);

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn build_output(leagues: &[LeagueData], leaderboard_size: Option<usize>) -> Output {
    let competitions: Vec<Competition> = leagues.iter().map(|league| league.competition.clone()).collect();

    let per_category = leaderboard_size.map_or_else(StandingsAggregator::per_category, StandingsAggregator::new);
    let reports = per_category.report_all(&competitions);

    let league_outputs = leagues
        .iter()
        .zip(reports)
        .map(|(league, report)| {
            let schedule = FixtureGenerator::generate_with(
                &league.schedule_teams,
                &league.season,
                &league.calendar,
                &league.settings,
            )
            .map(Schedule::from_fixtures);

            if let Err(err) = &schedule {
                warn!("schedule for {} not generated: {}", league.competition.name, err);
            }
            if let Err(err) = &report {
                warn!("report for {} not computed: {}", league.competition.name, err);
            }

            LeagueOutput {
                league_id: league.competition.id.clone(),
                name: league.competition.name.clone(),
                schedule_error: schedule.as_ref().err().map(|err| err.to_string()),
                schedule: schedule.ok(),
                report_error: report.as_ref().err().map(|err| err.to_string()),
                report: report.ok(),
            }
        })
        .collect();

    let general = leaderboard_size.map_or_else(StandingsAggregator::general, StandingsAggregator::new);

    let leaderboards = [Sport::Football, Sport::Basketball]
        .into_iter()
        .filter_map(|sport| match general.leaderboard(&competitions, sport, None) {
            Ok(scorers) => Some(SportLeaderboard { sport, scorers }),
            Err(err) => {
                warn!("{:?} leaderboard not computed: {}", sport, err);
                None
            }
        })
        .collect();

    Output {
        leagues: league_outputs,
        leaderboards,
    }
}
