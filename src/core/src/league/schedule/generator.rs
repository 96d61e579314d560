use crate::error::{LeagueError, LeagueResult};
use crate::league::schedule::{FixtureSlot, RoundRobin, ScheduleSettings};
use crate::season::{HolidayCalendar, HolidayInterval, SeasonWindow};
use crate::team::TeamRef;
use chrono::{NaiveDate, Weekday};
use itertools::Itertools;
use log::{debug, info, warn};

pub struct FixtureGenerator;

impl FixtureGenerator {
    pub fn generate(
        teams: &[TeamRef],
        season_start: NaiveDate,
        season_end: NaiveDate,
        play_date: Weekday,
        holidays: &[HolidayInterval],
        slots_per_play_date: usize,
    ) -> LeagueResult<Vec<FixtureSlot>> {
        Self::generate_with(
            teams,
            &SeasonWindow::new(season_start, season_end),
            &HolidayCalendar::new(holidays.to_vec()),
            &ScheduleSettings::new(play_date, slots_per_play_date),
        )
    }

    /// Packs repeated double round-robins onto the available dates.
    ///
    /// Every cycle starts on a fresh date. When the dates run out in the middle
    /// of a cycle, the pairings that did not fit are dropped.
    pub fn generate_with(
        teams: &[TeamRef],
        window: &SeasonWindow,
        calendar: &HolidayCalendar,
        settings: &ScheduleSettings,
    ) -> LeagueResult<Vec<FixtureSlot>> {
        if teams.len() < 2 {
            return Err(LeagueError::InsufficientTeams { found: teams.len() });
        }

        if let Some(team_id) = teams.iter().map(|team| &team.id).duplicates().next() {
            return Err(LeagueError::DuplicateTeam {
                team_id: team_id.clone(),
            });
        }

        settings.validate()?;

        let dates = calendar.available_dates(window, settings.play_weekday);
        if dates.is_empty() {
            return Err(LeagueError::NoAvailableDates);
        }

        let cycle = RoundRobin::double(teams.len());
        let dates_total = dates.len();

        let mut dates = dates.into_iter();
        let mut fixtures = Vec::with_capacity(cycle.len());
        let mut round: u32 = 0;
        let mut cycles: u32 = 0;

        'cycles: loop {
            for (batch_index, batch) in cycle.chunks(settings.slots_per_play_date).enumerate() {
                let Some(date) = dates.next() else {
                    if batch_index > 0 {
                        let dropped = cycle.len() - batch_index * settings.slots_per_play_date;
                        warn!(
                            "season dates exhausted mid-cycle: {} pairings of cycle {} dropped",
                            dropped,
                            cycles + 1
                        );
                    }
                    break 'cycles;
                };

                round += 1;

                let kickoff = date.and_time(settings.kickoff);

                fixtures.extend(batch.iter().map(|pairing| FixtureSlot {
                    round,
                    date,
                    kickoff,
                    home: teams[pairing.home].id.clone(),
                    away: teams[pairing.away].id.clone(),
                    venue: settings.venue.clone(),
                }));
            }

            cycles += 1;
            debug!("double round-robin cycle {} packed, {} rounds so far", cycles, round);
        }

        info!(
            "schedule generated: {} teams, {} fixtures, {} rounds over {} dates",
            teams.len(),
            fixtures.len(),
            round,
            dates_total
        );

        Ok(fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::schedule::Schedule;
    use chrono::Datelike;
    use crate::league::{MatchResult, ScoringPolicy, compute_standings};
    use std::collections::{HashMap, HashSet};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn teams(count: usize) -> Vec<TeamRef> {
        (0..count)
            .map(|i| {
                let id = ((b'A' + i as u8) as char).to_string();
                TeamRef::new(id.clone(), format!("Team {}", id))
            })
            .collect()
    }

    /// `weeks` consecutive Fridays starting 2024-09-06.
    fn fridays(weeks: u64) -> (NaiveDate, NaiveDate) {
        let start = date(2024, 9, 6);
        let end = start + chrono::Days::new((weeks - 1) * 7);
        (start, end)
    }

    #[test]
    fn test_insufficient_teams() {
        let (start, end) = fridays(10);

        let result = FixtureGenerator::generate(&teams(1), start, end, Weekday::Fri, &[], 1);
        assert_eq!(result, Err(LeagueError::InsufficientTeams { found: 1 }));

        let result = FixtureGenerator::generate(&[], start, end, Weekday::Fri, &[], 1);
        assert_eq!(result, Err(LeagueError::InsufficientTeams { found: 0 }));
    }

    #[test]
    fn test_holidays_consume_whole_season() {
        let (start, end) = fridays(4);
        let holidays = [HolidayInterval::new(date(2024, 9, 1), date(2024, 10, 31))];

        let result = FixtureGenerator::generate(&teams(4), start, end, Weekday::Fri, &holidays, 2);
        assert_eq!(result, Err(LeagueError::NoAvailableDates));
    }

    #[test]
    fn test_duplicate_team_id_rejected() {
        let (start, end) = fridays(17);
        let roster = [
            TeamRef::new("A", "Lions"),
            TeamRef::new("A", "Lions again"),
            TeamRef::new("B", "Owls"),
        ];

        let result = FixtureGenerator::generate(&roster, start, end, Weekday::Fri, &[], 1);
        assert_eq!(
            result,
            Err(LeagueError::DuplicateTeam {
                team_id: String::from("A")
            })
        );
    }

    #[test]
    fn test_reversed_season_has_no_dates() {
        let (start, end) = fridays(10);

        let result = FixtureGenerator::generate(&teams(4), end, start, Weekday::Fri, &[], 2);
        assert_eq!(result, Err(LeagueError::NoAvailableDates));
    }

    #[test]
    fn test_zero_slots_rejected() {
        let (start, end) = fridays(4);

        let result = FixtureGenerator::generate(&teams(4), start, end, Weekday::Fri, &[], 0);
        assert_eq!(result, Err(LeagueError::InvalidSlotsPerPlayDate));
    }

    #[test]
    fn test_four_teams_two_slots_full_cycle() {
        let (start, end) = fridays(6);

        let fixtures = FixtureGenerator::generate(&teams(4), start, end, Weekday::Fri, &[], 2).unwrap();

        assert_eq!(fixtures.len(), 12);
        assert_eq!(Schedule::from_fixtures(fixtures.clone()).rounds(), 6);

        let ordered: HashSet<(String, String)> = fixtures
            .iter()
            .map(|slot| (slot.home.clone(), slot.away.clone()))
            .collect();
        assert_eq!(ordered.len(), 12);

        for (a, b) in [("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")] {
            assert!(ordered.contains(&(a.to_string(), b.to_string())));
            assert!(ordered.contains(&(b.to_string(), a.to_string())));
        }
    }

    #[test]
    fn test_first_rounds_follow_circle_method() {
        let (start, end) = fridays(2);

        let fixtures = FixtureGenerator::generate(&teams(4), start, end, Weekday::Fri, &[], 2).unwrap();

        let rounds: Vec<(u32, &str, &str)> = fixtures
            .iter()
            .map(|slot| (slot.round, slot.home.as_str(), slot.away.as_str()))
            .collect();

        assert_eq!(rounds, vec![(1, "A", "D"), (1, "B", "C"), (2, "A", "C"), (2, "D", "B")]);
        assert_eq!(fixtures[0].date, date(2024, 9, 6));
        assert_eq!(fixtures[2].date, date(2024, 9, 13));
    }

    #[test]
    fn test_cycles_repeat_until_dates_exhausted() {
        // 3 teams, 1 slot: 6 matches per cycle, 14 dates = 2 full cycles + 2 matches
        let (start, end) = fridays(14);

        let fixtures = FixtureGenerator::generate(&teams(3), start, end, Weekday::Fri, &[], 1).unwrap();

        assert_eq!(fixtures.len(), 14);
        assert_eq!(fixtures.last().map(|slot| slot.round), Some(14));

        let pairs: Vec<(&str, &str)> = fixtures
            .iter()
            .map(|slot| (slot.home.as_str(), slot.away.as_str()))
            .collect();

        assert_eq!(pairs[0..6], pairs[6..12]);
        assert_eq!(pairs[12..14], pairs[0..2]);
    }

    #[test]
    fn test_new_cycle_starts_on_fresh_date() {
        // 3 teams, 4 slots: cycle of 6 packs as 4 + 2, then the next cycle starts on date 3
        let (start, end) = fridays(3);

        let fixtures = FixtureGenerator::generate(&teams(3), start, end, Weekday::Fri, &[], 4).unwrap();

        let per_round: Vec<usize> = Schedule::from_fixtures(fixtures)
            .tours
            .iter()
            .map(|tour| tour.items.len())
            .collect();

        assert_eq!(per_round, vec![4, 2, 4]);
    }

    #[test]
    fn test_single_leftover_match_is_its_own_round() {
        // 2 teams, 1 slot: two dates hold one cycle, the third a lone match
        let (start, end) = fridays(3);

        let fixtures = FixtureGenerator::generate(&teams(2), start, end, Weekday::Fri, &[], 1).unwrap();

        assert_eq!(fixtures.len(), 3);
        assert_eq!(fixtures[2].round, 3);
        assert_eq!((fixtures[2].home.as_str(), fixtures[2].away.as_str()), ("A", "B"));
    }

    #[test]
    fn test_odd_roster_never_leaks_bye() {
        let roster = teams(5);
        let ids: HashSet<&str> = roster.iter().map(|team| team.id.as_str()).collect();
        let (start, end) = fridays(10);

        let fixtures = FixtureGenerator::generate(&roster, start, end, Weekday::Fri, &[], 2).unwrap();

        assert_eq!(fixtures.len(), 20);
        assert!(fixtures.iter().all(|slot| ids.contains(slot.home.as_str()) && ids.contains(slot.away.as_str())));
        assert!(fixtures.iter().all(|slot| slot.home != slot.away));

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for slot in &fixtures {
            *counts.entry(slot.home.as_str()).or_default() += 1;
            *counts.entry(slot.away.as_str()).or_default() += 1;
        }
        assert!(counts.values().all(|played| *played == 2 * (5 - 1)));
    }

    #[test]
    fn test_dates_monotonic_and_outside_holidays() {
        let holidays = [
            HolidayInterval::named("Winter", date(2024, 12, 20), date(2025, 1, 6)),
            HolidayInterval::named("Carnival", date(2025, 3, 1), date(2025, 3, 10)),
        ];
        let calendar = HolidayCalendar::new(holidays.to_vec());

        let fixtures = FixtureGenerator::generate(
            &teams(6),
            date(2024, 9, 1),
            date(2025, 6, 30),
            Weekday::Fri,
            &holidays,
            3,
        )
        .unwrap();

        assert!(!fixtures.is_empty());
        assert!(fixtures.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert!(fixtures.iter().all(|slot| !calendar.contains(slot.date)));
        assert!(fixtures.iter().all(|slot| slot.date.weekday() == Weekday::Fri));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let (start, end) = fridays(30);

        let first = FixtureGenerator::generate(&teams(7), start, end, Weekday::Fri, &[], 3).unwrap();
        let second = FixtureGenerator::generate(&teams(7), start, end, Weekday::Fri, &[], 3).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_settings_stamp_kickoff_and_venue() {
        let (start, end) = fridays(1);
        let settings = ScheduleSettings::new(Weekday::Fri, 1)
            .with_kickoff(chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap())
            .with_venue("Main pitch");

        let fixtures = FixtureGenerator::generate_with(
            &teams(2),
            &SeasonWindow::new(start, end),
            &HolidayCalendar::default(),
            &settings,
        )
        .unwrap();

        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].kickoff, start.and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(fixtures[0].venue.as_deref(), Some("Main pitch"));
    }

    #[test]
    fn test_single_cycle_fed_back_as_draws() {
        let roster = teams(6);
        let n = roster.len();
        // 15 single-cycle pairings at 3 per date need 5 dates
        let (start, end) = fridays(5);

        let fixtures = FixtureGenerator::generate(&roster, start, end, Weekday::Fri, &[], 3).unwrap();
        assert_eq!(fixtures.len(), n * (n - 1) / 2);

        let matches: Vec<MatchResult> = fixtures
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                MatchResult::new(format!("m{}", i), slot.home.clone(), slot.away.clone()).with_score(0, 0)
            })
            .collect();

        let policy = ScoringPolicy::FOOTBALL;
        let rows = compute_standings(&roster, &matches, &policy).unwrap();

        assert_eq!(rows.len(), n);
        for row in rows {
            assert_eq!(row.played as usize, n - 1);
            assert_eq!(row.points, u64::from(row.drawn * policy.draw_points));
        }
    }
}
