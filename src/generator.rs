//! Generates a whole game, one inning after another.
//!
//! This module defines [`LineupGenerator`], which threads the [`GameHistory`] through the
//! [`InningPlanner`] for every configured inning, and the one-call
//! [`generate_full_game`]. Innings are strictly sequential: each one is scored against
//! the finalized innings before it.
//!
//! # Example
//!
//! ```
//! use lineup_planner::prelude::*;
//!
//! let game = generate_full_game(
//!     5,
//!     11,
//!     &[0, 5, 6],
//!     &[3, 5, 7, 9, 10],
//!     &mut ShuffleTieBreak::seeded(2024),
//! )
//! .unwrap();
//! assert_eq!(game.len(), 5);
//! assert!(game.innings().iter().all(|inning| inning.is_complete(11)));
//! ```

use tracing::{info, instrument, trace};

use crate::{
    configuration::Configuration,
    error::LineupError,
    history::{GameHistory, InningAssignment, Player},
    planner::InningPlanner,
    position::Position,
    rules::{LineupRules, LineupRulesBuilder},
    tie_break::TieBreak,
};

/// Plans every inning of a game under fixed rules.
#[derive(Debug, Clone)]
pub struct LineupGenerator {
    rules: LineupRules,
    config: Configuration,
}

impl LineupGenerator {
    /// Create a [`LineupGenerator`] with given [`LineupRules`] and [`Configuration`].
    ///
    /// # Errors
    /// Returns an error if file logging is requested and cannot be set up. An already
    /// installed file logger is reused.
    #[instrument(skip_all)]
    pub fn new(rules: LineupRules, config: Configuration) -> anyhow::Result<Self> {
        config.init_logging()?;

        trace!(?config, ?rules);

        Ok(Self { rules, config })
    }

    /// Rules every generated game follows.
    pub fn rules(&self) -> &LineupRules {
        &self.rules
    }

    /// Plans all innings in order.
    ///
    /// # Errors
    /// Returns [`LineupError::NoValidLineup`] if some inning cannot seat every player.
    #[instrument(skip_all, fields(innings = self.rules.innings()))]
    pub fn generate<T: TieBreak + ?Sized>(
        &self,
        tie_break: &mut T,
    ) -> Result<GameHistory, LineupError> {
        let planner = InningPlanner::new(&self.rules);
        let mut history = GameHistory::new();

        for inning in 0..self.rules.innings() {
            let assignment = planner.plan_inning(&history, tie_break)?;
            info!(
                inning,
                bench = ?assignment.player_at(Position::Bench),
                catcher = ?assignment.player_at(Position::Catcher),
                "planned inning"
            );
            if self.config.verbose {
                print_inning(inning, &assignment);
            }
            history.record(assignment);
        }

        Ok(history)
    }
}

/// Plans a full game for `player_count` players over `innings` innings.
///
/// Players in `bench_exempt` never sit out; only players in `first_base_eligible` play
/// first base (anyone may when it is empty). Ties between equal scores are broken by
/// `tie_break`.
///
/// # Errors
/// Every configuration problem is reported before the first inning is planned; see
/// [`LineupRulesBuilder::build`].
pub fn generate_full_game<T: TieBreak + ?Sized>(
    innings: usize,
    player_count: usize,
    bench_exempt: &[Player],
    first_base_eligible: &[Player],
    tie_break: &mut T,
) -> Result<GameHistory, LineupError> {
    let rules = LineupRulesBuilder::new()
        .with_players(player_count)
        .with_innings(innings)
        .with_bench_exempt(bench_exempt.iter().copied())
        .with_first_base_eligible(first_base_eligible.iter().copied())
        .build()?;

    LineupGenerator {
        rules,
        config: Configuration::new(),
    }
    .generate(tie_break)
}

fn print_inning(inning: usize, assignment: &InningAssignment) {
    let positions = assignment
        .iter()
        .map(|(player, position)| format!("{player}:{position}"))
        .collect::<Vec<_>>()
        .join(" ");
    // green inning number, default color
    println!("\x1b[32mInning {inning}:\x1b[39m {positions}");
}
