use crate::DatabaseResult;
use crate::loaders::{LeagueEntity, SeasonEntity};
use flate2::read::GzDecoder;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const STATIC_LEAGUE_JSON: &str = include_str!("../../data/league.json");

/// Snapshot of the league administration records the core works from.
#[derive(Debug, Deserialize)]
pub struct DatabaseEntity {
    pub seasons: Vec<SeasonEntity>,
    pub leagues: Vec<LeagueEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the bundled demo snapshot.
    pub fn load() -> DatabaseResult<DatabaseEntity> {
        Self::parse(STATIC_LEAGUE_JSON.as_bytes())
    }

    /// Loads a snapshot from disk; `.gz` files are decompressed on the fly.
    pub fn load_from(path: impl AsRef<Path>) -> DatabaseResult<DatabaseEntity> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let is_compressed = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

        let database = if is_compressed {
            Self::parse(GzDecoder::new(reader))?
        } else {
            Self::parse(reader)?
        };

        info!(
            "snapshot {} loaded: {} seasons, {} leagues",
            path.display(),
            database.seasons.len(),
            database.leagues.len()
        );

        Ok(database)
    }

    pub fn parse<R: Read>(reader: R) -> DatabaseResult<DatabaseEntity> {
        Ok(serde_json::from_reader(reader)?)
    }
}
