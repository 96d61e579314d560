use serde::{Deserialize, Serialize};

/// Points awarded per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub win_points: u32,
    pub draw_points: u32,
    pub loss_points: u32,
    pub allows_draws: bool,
}

impl ScoringPolicy {
    pub const FOOTBALL: ScoringPolicy = ScoringPolicy {
        win_points: 3,
        draw_points: 1,
        loss_points: 0,
        allows_draws: true,
    };

    /// Two points for a win, one for a loss. A tied final score is rejected.
    pub const BASKETBALL: ScoringPolicy = ScoringPolicy {
        win_points: 2,
        draw_points: 0,
        loss_points: 1,
        allows_draws: false,
    };

    pub fn new(win_points: u32, draw_points: u32, loss_points: u32) -> Self {
        ScoringPolicy {
            win_points,
            draw_points,
            loss_points,
            allows_draws: true,
        }
    }

    pub fn without_draws(win_points: u32, loss_points: u32) -> Self {
        ScoringPolicy {
            win_points,
            draw_points: 0,
            loss_points,
            allows_draws: false,
        }
    }

    pub fn points(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.win_points,
            Outcome::Draw => self.draw_points,
            Outcome::Loss => self.loss_points,
        }
    }

    /// Most points both sides of one match can collect together.
    pub fn max_points_per_match(&self) -> u32 {
        let decided = self.win_points + self.loss_points;

        if self.allows_draws {
            decided.max(2 * self.draw_points)
        } else {
            decided
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    Football,
    Basketball,
}

impl Sport {
    pub fn policy(&self) -> ScoringPolicy {
        match self {
            Sport::Football => ScoringPolicy::FOOTBALL,
            Sport::Basketball => ScoringPolicy::BASKETBALL,
        }
    }
}
