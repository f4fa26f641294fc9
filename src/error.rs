//! Errors raised while validating a game configuration or planning its innings.

use thiserror::Error;

use crate::{history::Player, position::Position};

/// Everything that can go wrong between reading a configuration and returning a full game.
///
/// Every variant except [`LineupError::NoValidLineup`] is detected before the first inning
/// is planned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineupError {
    /// The roster must have exactly one player per position.
    #[error("{players} players cannot fill {positions} positions exactly once per inning")]
    MismatchedCounts {
        /// Configured player count.
        players: usize,
        /// Positions filled each inning.
        positions: usize,
    },

    /// An eligibility list names a player index outside the roster.
    #[error("player {player} is out of range (roster has {players} players)")]
    PlayerOutOfRange {
        /// Offending index.
        player: Player,
        /// Configured player count.
        players: usize,
    },

    /// An eligibility list names the same player twice.
    #[error("player {player} is listed more than once")]
    DuplicatePlayer {
        /// Repeated index.
        player: Player,
    },

    /// A textual player list could not be parsed.
    #[error("invalid player list '{list}': {reason}")]
    InvalidPlayerList {
        /// The list as given.
        list: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A position code that is not part of the catalogue.
    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    /// The lineup rules leave too few players to fill a position in every inning.
    #[error("{position} needs {innings} innings filled but the rules only allow {capacity}")]
    InsufficientCapacity {
        /// Position that would run out of players.
        position: Position,
        /// Configured innings.
        innings: usize,
        /// Innings the position can be filled for under the rules.
        capacity: usize,
    },

    /// No assignment seats every player for this inning under the rules.
    #[error("no valid lineup exists for inning {inning}")]
    NoValidLineup {
        /// Zero-based inning number.
        inning: usize,
    },
}
