use crate::error::LeagueResult;
use crate::league::{
    CATEGORY_LEADERBOARD_SIZE, GENERAL_LEADERBOARD_SIZE, LeagueStatistics, LeagueTable, MatchResult, ScorerRow,
    Sport, StandingRow, compute_scorers,
};
use crate::team::TeamRef;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

/// One league's roster and results, e.g. football for grades 3 and 4.
#[derive(Debug, Clone)]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sport: Sport,
    pub teams: Vec<TeamRef>,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionReport {
    pub competition_id: String,
    pub name: String,
    pub category: String,
    pub sport: Sport,
    pub standings: Vec<StandingRow>,
    pub scorers: Vec<ScorerRow>,
    pub statistics: LeagueStatistics,
}

pub struct StandingsAggregator {
    top_n: usize,
}

impl Default for StandingsAggregator {
    fn default() -> Self {
        Self::per_category()
    }
}

impl StandingsAggregator {
    pub fn new(top_n: usize) -> Self {
        StandingsAggregator { top_n }
    }

    pub fn per_category() -> Self {
        Self::new(CATEGORY_LEADERBOARD_SIZE)
    }

    pub fn general() -> Self {
        Self::new(GENERAL_LEADERBOARD_SIZE)
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn report(&self, competition: &Competition) -> LeagueResult<CompetitionReport> {
        let policy = competition.sport.policy();

        let table = LeagueTable::compute(&competition.teams, &competition.matches, &policy)?;
        let scorers = compute_scorers(&competition.matches, self.top_n)?;
        let statistics = LeagueStatistics::from_results(&competition.matches).with_standings(&table.rows);

        debug!(
            "report for {} ({}): {} rows, {} scorers",
            competition.name,
            competition.category,
            table.rows.len(),
            scorers.len()
        );

        Ok(CompetitionReport {
            competition_id: competition.id.clone(),
            name: competition.name.clone(),
            category: competition.category.clone(),
            sport: competition.sport,
            standings: table.rows,
            scorers,
            statistics,
        })
    }

    /// Reports for every competition, computed in parallel. Order follows the input.
    pub fn report_all(&self, competitions: &[Competition]) -> Vec<LeagueResult<CompetitionReport>> {
        let reports: Vec<LeagueResult<CompetitionReport>> = competitions
            .par_iter()
            .map(|competition| self.report(competition))
            .collect();

        let failed = reports.iter().filter(|report| report.is_err()).count();
        if failed > 0 {
            warn!("{} of {} competition reports failed", failed, reports.len());
        }

        info!("📊 {} competition reports computed", reports.len() - failed);

        reports
    }

    /// Scorer leaderboard across the competitions of one sport, optionally one age category.
    pub fn leaderboard(
        &self,
        competitions: &[Competition],
        sport: Sport,
        category: Option<&str>,
    ) -> LeagueResult<Vec<ScorerRow>> {
        let matches: Vec<MatchResult> = competitions
            .iter()
            .filter(|competition| competition.sport == sport)
            .filter(|competition| category.is_none_or(|category| competition.category == category))
            .flat_map(|competition| competition.matches.iter().cloned())
            .collect();

        compute_scorers(&matches, self.top_n)
    }
}
