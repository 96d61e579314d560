/// Home/away pairing of two roster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub home: usize,
    pub away: usize,
}

impl Pairing {
    pub fn new(home: usize, away: usize) -> Self {
        Pairing { home, away }
    }

    pub fn mirrored(&self) -> Self {
        Pairing {
            home: self.away,
            away: self.home,
        }
    }
}

/// Circle-method arrangement for one round.
///
/// Each slot holds a roster index, or `None` for the bye added to odd rosters.
/// Position 0 never moves; every advance moves the last slot to position 1 and
/// shifts the others down by one. Advancing returns a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationBuffer {
    slots: Vec<Option<usize>>,
    round: usize,
}

impl RotationBuffer {
    pub fn new(team_count: usize) -> Self {
        let mut slots: Vec<Option<usize>> = (0..team_count).map(Some).collect();

        if team_count % 2 != 0 {
            slots.push(None);
        }

        RotationBuffer { slots, round: 0 }
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Rounds needed for everyone to meet once.
    pub fn rounds(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn advance(&self) -> Self {
        self.rotated(1)
    }

    /// Arrangement `round` rounds after this one's origin.
    pub fn at_round(&self, round: usize) -> Self {
        let steps = round as isize - self.round as isize;
        self.rotated(steps)
    }

    fn rotated(&self, steps: isize) -> Self {
        let len = self.slots.len();

        if len < 3 {
            return RotationBuffer {
                slots: self.slots.clone(),
                round: (self.round as isize + steps) as usize,
            };
        }

        let moving = (len - 1) as isize;
        let shift = steps.rem_euclid(moving);

        let slots = (0..len)
            .map(|position| {
                if position == 0 {
                    self.slots[0]
                } else {
                    let source = (position as isize - 1 - shift).rem_euclid(moving) + 1;
                    self.slots[source as usize]
                }
            })
            .collect();

        RotationBuffer {
            slots,
            round: (self.round as isize + steps) as usize,
        }
    }

    /// Pairings of this round; position `i` hosts position `len - 1 - i`. Bye pairs are dropped.
    pub fn pairings(&self) -> Vec<Pairing> {
        let len = self.slots.len();

        (0..len / 2)
            .filter_map(|i| match (self.slots[i], self.slots[len - 1 - i]) {
                (Some(home), Some(away)) => Some(Pairing::new(home, away)),
                _ => None,
            })
            .collect()
    }
}

pub struct RoundRobin;

impl RoundRobin {
    /// Single round-robin grouped by circle-method round.
    pub fn single_rounds(team_count: usize) -> Vec<Vec<Pairing>> {
        let origin = RotationBuffer::new(team_count);

        (0..origin.rounds())
            .map(|round| origin.at_round(round).pairings())
            .collect()
    }

    pub fn single(team_count: usize) -> Vec<Pairing> {
        Self::single_rounds(team_count).into_iter().flatten().collect()
    }

    /// Single round-robin followed by its mirror with home and away swapped.
    pub fn double(team_count: usize) -> Vec<Pairing> {
        let first_leg = Self::single(team_count);
        let second_leg: Vec<Pairing> = first_leg.iter().map(Pairing::mirrored).collect();

        first_leg.into_iter().chain(second_leg).collect()
    }
}
