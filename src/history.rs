//! Per-inning assignments and the game history they accumulate into.
//!
//! [`GameHistory`] is append-only: once an inning is recorded it is never changed, and
//! every planning decision for later innings is a count over it
//! (see [`GameHistory::count_positions`]).

use std::{
    collections::{btree_map, BTreeMap},
    fmt,
};

use crate::position::Position;

/// A player is identified by its roster index, `0..player_count`.
pub type Player = usize;

/// Where every player fields during one inning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InningAssignment {
    positions: BTreeMap<Player, Position>,
}

impl InningAssignment {
    /// Position of `player` this inning, if placed.
    pub fn position_of(&self, player: Player) -> Option<Position> {
        self.positions.get(&player).copied()
    }

    /// Player fielding `position` this inning, if any.
    pub fn player_at(&self, position: Position) -> Option<Player> {
        self.positions
            .iter()
            .find_map(|(&player, &p)| (p == position).then_some(player))
    }

    /// Placed players, in roster order.
    pub fn iter(&self) -> btree_map::Iter<'_, Player, Position> {
        self.positions.iter()
    }

    /// Number of placed players.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when nobody is placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True if players `0..player_count` each hold a distinct position and nobody else is placed.
    pub fn is_complete(&self, player_count: usize) -> bool {
        let mut seen = [false; Position::COUNT];
        self.positions.len() == player_count
            && self.positions.keys().all(|&player| player < player_count)
            && self
                .positions
                .values()
                .all(|position| !std::mem::replace(&mut seen[position.index()], true))
    }
}

impl FromIterator<(Player, Position)> for InningAssignment {
    fn from_iter<I: IntoIterator<Item = (Player, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InningAssignment {
    type Item = (&'a Player, &'a Position);
    type IntoIter = btree_map::Iter<'a, Player, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Innings decided so far, in the order they were played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    innings: Vec<InningAssignment>,
}

impl GameHistory {
    /// An empty history, before the first inning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished inning.
    pub fn record(&mut self, inning: InningAssignment) {
        self.innings.push(inning);
    }

    /// Number of innings in which `player` fielded any of `positions`.
    ///
    /// Zero for an empty history or a player that never appears.
    pub fn count_positions(&self, player: Player, positions: &[Position]) -> usize {
        self.innings
            .iter()
            .filter(|inning| {
                inning
                    .position_of(player)
                    .is_some_and(|position| positions.contains(&position))
            })
            .count()
    }

    /// Number of innings `player` spent at exactly `position`.
    pub fn times_played(&self, player: Player, position: Position) -> usize {
        self.count_positions(player, &[position])
    }

    /// Number of innings `player` spent anywhere in the infield.
    pub fn infield_innings(&self, player: Player) -> usize {
        self.count_positions(player, &Position::INFIELD)
    }

    /// Recorded innings, oldest first.
    pub fn innings(&self) -> &[InningAssignment] {
        &self.innings
    }

    /// Recorded inning `index`, if played.
    pub fn inning(&self, index: usize) -> Option<&InningAssignment> {
        self.innings.get(index)
    }

    /// Number of innings recorded.
    pub fn len(&self) -> usize {
        self.innings.len()
    }

    /// True before the first inning is recorded.
    pub fn is_empty(&self) -> bool {
        self.innings.is_empty()
    }
}

/// Tab-separated table: a header row of player indices, then one row per inning holding
/// each player's position code.
impl fmt::Display for GameHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.innings.first() else {
            return Ok(());
        };
        let players = first.iter().map(|(&player, _)| player).collect::<Vec<_>>();

        for player in &players {
            write!(f, "\t{player}")?;
        }
        writeln!(f)?;

        for (number, inning) in self.innings.iter().enumerate() {
            write!(f, "{number}")?;
            for &player in &players {
                match inning.position_of(player) {
                    Some(position) => write!(f, "\t{position}")?,
                    None => write!(f, "\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
