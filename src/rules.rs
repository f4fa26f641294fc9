//! Validated lineup rules for one game.
//!
//! This module gathers the sizes and eligibility sets of a game and checks them before any
//! inning is planned. It provides:
//!
//! - **Sizes**: the roster size (must equal [`Position::COUNT`]) and the number of innings
//! - **Bench exemption**: players who must field every inning
//! - **First base eligibility**: the only players allowed at first base
//!
//! The main entry point is [`LineupRulesBuilder`]. Every problem it can detect (mismatched
//! counts, unknown or repeated players, a position that cannot be filled for every inning)
//! is reported by [`LineupRulesBuilder::build`].
//!
//! # Example
//!
//! ```
//! use lineup_planner::rules::LineupRulesBuilder;
//!
//! let rules = LineupRulesBuilder::new()
//!     .with_innings(5)
//!     .with_bench_exempt([0, 5, 6])
//!     .with_first_base_eligible([3, 5, 7, 9, 10])
//!     .build()
//!     .unwrap();
//! assert!(rules.is_bench_exempt(5));
//! ```
//!
//! Rules can also be read from the environment with [`LineupRulesBuilder::from_env()`].

use std::{collections::BTreeSet, env};

use tracing::warn;

use crate::{error::LineupError, history::Player, position::Position};

/// Innings in a game unless configured otherwise.
pub const DEFAULT_INNINGS: usize = 5;

/// Innings a player may spend at any single position other than catcher and bench.
pub const ROTATION_CAP: usize = 2;

/// Infield innings every player should reach over a game.
pub const INFIELD_MINIMUM: usize = 2;

#[derive(Debug, Clone, Default)]
enum PlayerList {
    #[default]
    Empty,
    Listed(Vec<Player>),
    Text(String),
}

impl PlayerList {
    fn resolve(self, players: usize) -> Result<BTreeSet<Player>, LineupError> {
        let listed = match self {
            PlayerList::Empty => vec![],
            PlayerList::Listed(listed) => listed,
            PlayerList::Text(text) => player_list_to_vec(&text, players)?,
        };

        let mut set = BTreeSet::new();
        for player in listed {
            if player >= players {
                return Err(LineupError::PlayerOutOfRange { player, players });
            }
            if !set.insert(player) {
                return Err(LineupError::DuplicatePlayer { player });
            }
        }
        Ok(set)
    }
}

/// A builder for the rules of one game.
///
/// By default the roster has [`Position::COUNT`] players, the game lasts
/// [`DEFAULT_INNINGS`] innings, nobody is exempt from the bench and first base is open to
/// everyone.
#[derive(Debug, Clone)]
pub struct LineupRulesBuilder {
    players: usize,
    innings: usize,
    bench_exempt: PlayerList,
    first_base_eligible: PlayerList,
}

impl Default for LineupRulesBuilder {
    fn default() -> Self {
        Self {
            players: Position::COUNT,
            innings: DEFAULT_INNINGS,
            bench_exempt: PlayerList::Empty,
            first_base_eligible: PlayerList::Empty,
        }
    }
}

impl LineupRulesBuilder {
    /// Creates a builder with the default sizes and empty eligibility sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from default values overridden by environment variables.
    ///
    /// See [`with_env`](Self::with_env) for the variables read.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new().with_env()
    }

    /// Overrides values with the environment variables that are set:
    /// - `LINEUP_PLAYERS` (usize): roster size
    /// - `LINEUP_INNINGS` (usize): innings in the game
    /// - `LINEUP_BENCH_EXEMPT` (string): players never benched, e.g. "0,5,6"
    /// - `LINEUP_FIRST_BASE` (string): players allowed at first base, e.g. "3-5,9,10"
    ///
    /// Unparsable sizes are ignored with a warning; lists are parsed by [`build`](Self::build).
    #[must_use]
    pub fn with_env(self) -> Self {
        fn parse_usize(var: &str) -> Option<usize> {
            let value = env::var(var).ok()?;
            match value.trim().parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    warn!("ignoring {var}={value}: not a number");
                    None
                }
            }
        }

        let players = parse_usize("LINEUP_PLAYERS").unwrap_or(self.players);
        let innings = parse_usize("LINEUP_INNINGS").unwrap_or(self.innings);
        let bench_exempt = env::var("LINEUP_BENCH_EXEMPT")
            .map(PlayerList::Text)
            .unwrap_or(self.bench_exempt);
        let first_base_eligible = env::var("LINEUP_FIRST_BASE")
            .map(PlayerList::Text)
            .unwrap_or(self.first_base_eligible);

        Self {
            players,
            innings,
            bench_exempt,
            first_base_eligible,
        }
    }

    /// Sets the roster size.
    #[must_use]
    pub fn with_players(self, players: usize) -> Self {
        Self { players, ..self }
    }

    /// Sets the number of innings to plan.
    #[must_use]
    pub fn with_innings(self, innings: usize) -> Self {
        Self { innings, ..self }
    }

    /// Sets the players who must field every inning.
    #[must_use]
    pub fn with_bench_exempt(self, players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            bench_exempt: PlayerList::Listed(players.into_iter().collect()),
            ..self
        }
    }

    /// Sets the players allowed at first base.
    ///
    /// An empty set leaves first base open to everyone.
    #[must_use]
    pub fn with_first_base_eligible(self, players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            first_base_eligible: PlayerList::Listed(players.into_iter().collect()),
            ..self
        }
    }

    /// Consumes the builder and returns validated [`LineupRules`].
    ///
    /// # Errors
    ///
    /// - [`LineupError::MismatchedCounts`] if the roster size differs from [`Position::COUNT`]
    /// - [`LineupError::InvalidPlayerList`], [`LineupError::PlayerOutOfRange`] or
    ///   [`LineupError::DuplicatePlayer`] for a bad eligibility list
    /// - [`LineupError::InsufficientCapacity`] when a position cannot be filled in every
    ///   inning without breaking a limit
    pub fn build(self) -> Result<LineupRules, LineupError> {
        if self.players != Position::COUNT {
            return Err(LineupError::MismatchedCounts {
                players: self.players,
                positions: Position::COUNT,
            });
        }

        let bench_exempt = self.bench_exempt.resolve(self.players)?;
        let first_base_eligible = self.first_base_eligible.resolve(self.players)?;

        let rules = LineupRules {
            players: self.players,
            innings: self.innings,
            bench_exempt,
            first_base_eligible,
        };
        rules.check_capacity()?;
        Ok(rules)
    }
}

/// Parses lists such as `"0,5-6"`. Every value is checked against the roster size before a
/// range is expanded.
fn player_list_to_vec(s: &str, players: usize) -> Result<Vec<Player>, LineupError> {
    let invalid = |reason: String| LineupError::InvalidPlayerList {
        list: s.to_owned(),
        reason,
    };
    let parse = |value: &str| -> Result<Player, LineupError> {
        let player = value
            .trim()
            .parse::<Player>()
            .map_err(|_| invalid(format!("could not parse '{value}'")))?;
        if player >= players {
            return Err(LineupError::PlayerOutOfRange { player, players });
        }
        Ok(player)
    };

    let mut listed = vec![];
    if s.trim().is_empty() {
        return Ok(listed);
    }
    for item in s.split(',') {
        let bounds = item.split('-').collect::<Vec<_>>();
        match bounds.as_slice() {
            [value] => listed.push(parse(*value)?),
            [start, end] => {
                let (start, end) = (parse(*start)?, parse(*end)?);
                let range = if start <= end {
                    start..=end
                } else {
                    end..=start
                };
                listed.extend(range);
            }
            _ => {
                return Err(invalid(format!(
                    "each comma-separated item must be a number or a range (e.g. '0-3'), got '{item}'"
                )))
            }
        }
    }
    Ok(listed)
}

/// Obtained using [`LineupRulesBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRules {
    players: usize,
    innings: usize,
    bench_exempt: BTreeSet<Player>,
    first_base_eligible: BTreeSet<Player>,
}

impl LineupRules {
    /// Creates a [`LineupRulesBuilder`].
    pub fn builder() -> LineupRulesBuilder {
        LineupRulesBuilder::new()
    }

    /// Roster size.
    pub fn players(&self) -> usize {
        self.players
    }

    /// Innings in the game.
    pub fn innings(&self) -> usize {
        self.innings
    }

    /// True if `player` must field every inning.
    pub fn is_bench_exempt(&self, player: Player) -> bool {
        self.bench_exempt.contains(&player)
    }

    /// True if `player` is listed as eligible for first base.
    pub fn is_first_base_eligible(&self, player: Player) -> bool {
        self.first_base_eligible.contains(&player)
    }

    /// True if first base is limited to the eligible players.
    pub fn restricts_first_base(&self) -> bool {
        !self.first_base_eligible.is_empty()
    }

    /// Players who must field every inning.
    pub fn bench_exempt(&self) -> &BTreeSet<Player> {
        &self.bench_exempt
    }

    /// Players allowed at first base.
    pub fn first_base_eligible(&self) -> &BTreeSet<Player> {
        &self.first_base_eligible
    }

    /// Innings `position` can be filled for over a game without breaking a limit.
    pub fn capacity(&self, position: Position) -> usize {
        match position {
            Position::Bench => self.players - self.bench_exempt.len(),
            Position::Catcher => self.players,
            Position::FirstBase if self.restricts_first_base() => {
                self.first_base_eligible.len() * ROTATION_CAP
            }
            _ => self.players * ROTATION_CAP,
        }
    }

    fn check_capacity(&self) -> Result<(), LineupError> {
        for position in Position::ALL {
            let capacity = self.capacity(position);
            if capacity < self.innings {
                return Err(LineupError::InsufficientCapacity {
                    position,
                    innings: self.innings,
                    capacity,
                });
            }
        }
        Ok(())
    }
}
