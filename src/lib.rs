//! # Lineup Planner
//!
//! Fair fielding lineups for a recreational softball game: eleven players, ten field
//! positions plus the bench, and a fixed number of innings.
//!
//! It provides:
//! - Inning-by-inning planning (`InningPlanner`) driven by rule scores and the game so far
//! - Whole-game generation (`LineupGenerator`, `generate_full_game`)
//! - Validated game rules (`LineupRulesBuilder`): bench-exempt players, first base eligibility
//! - Injectable tie-breaking via the `TieBreak` trait, seeded or deterministic
//!
//! Every inning each player gets exactly one position and each position exactly one
//! player. Over a game:
//! - nobody catches more than once
//! - bench-exempt players never sit out, everyone else sits out at most once
//! - only eligible players play first base
//! - nobody plays any other position more than twice
//! - every player gets at least two infield innings whenever the game allows it
//!
//! The planner is a greedy heuristic, not an optimal solver: it produces a valid lineup
//! that favors whoever is furthest from each rule, not the best lineup overall.
//!
//! # Documentation Overview
//!
//! - For the scoring rules and the assignment pass, see the [`planner`] module.
//! - For game sizes, eligibility and validation, see [`rules`].
//! - For generation behaviors (printing, file logging, seeding), see
//!   [`Configuration`](crate::configuration::Configuration).
//! - For controlling ties, see the [`TieBreak`](crate::tie_break::TieBreak) trait.
//!
//! # Usage Example
//!
//! ```no_run
//! use lineup_planner::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let rules = LineupRulesBuilder::new()
//!         .with_innings(5)
//!         .with_bench_exempt([0, 5, 6])
//!         .with_first_base_eligible([3, 5, 7, 9, 10])
//!         .build()?;
//!
//!     // Reproducible game, printed inning by inning
//!     let config = Configuration::new().with_seed(7).with_verbose(true);
//!     let mut tie_break = config.tie_break();
//!
//!     let generator = LineupGenerator::new(rules, config)?;
//!     let game = generator.generate(&mut tie_break)?;
//!
//!     // One row per inning, one column per player
//!     print!("{game}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;
pub mod configuration;
pub mod error;
pub mod generator;
pub mod history;
mod logger;
pub mod planner;
pub mod position;
pub mod rules;
pub mod tie_break;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use lineup_planner::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`LineupRulesBuilder`](crate::rules::LineupRulesBuilder)
/// - [`LineupGenerator`](crate::generator::LineupGenerator) and
///   [`generate_full_game`](crate::generator::generate_full_game)
/// - the game data types and all built-in [`tie-break policies`](crate::tie_break)
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::error::LineupError;
    pub use crate::generator::{generate_full_game, LineupGenerator};
    pub use crate::history::{GameHistory, InningAssignment, Player};
    pub use crate::planner::{Candidate, InningPlanner};
    pub use crate::position::Position;
    pub use crate::rules::{LineupRules, LineupRulesBuilder};
    pub use crate::tie_break::*;
}
