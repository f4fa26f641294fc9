//! Plans the fielding assignment of a single inning.
//!
//! Planning happens in two phases:
//!
//! 1. **Scoring**: every (player, position) pair gets a score from the finalized history of
//!    previous innings. Each rule adds at most one point:
//!    - catcher, if the player has not caught yet
//!    - bench, if the player has not sat yet and is not bench-exempt
//!    - first base, if the player has not played it yet and is eligible for it
//!    - any position but catcher and bench, while the player has played it fewer than
//!      [`ROTATION_CAP`] times
//!    - any infield position, while the player has fewer than [`INFIELD_MINIMUM`] infield
//!      innings
//! 2. **Assignment**: candidates are arranged by the [`TieBreak`] policy, stable-sorted by
//!    descending score and committed greedily, skipping seated players and claimed positions.
//!
//! The limits behind the rules are also hard limits: a pair that would break one is never
//! committed. When the greedy pass strands a player, seated players are moved along
//! augmenting paths until everyone has a position.

use tracing::{debug, trace, warn};

use crate::{
    error::LineupError,
    history::{GameHistory, InningAssignment, Player},
    position::Position,
    rules::{LineupRules, INFIELD_MINIMUM, ROTATION_CAP},
    tie_break::TieBreak,
};

/// A scored (player, position) pair for the inning being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Player to seat.
    pub player: Player,
    /// Position offered.
    pub position: Position,
    /// Sum of the rule contributions; higher is seated first.
    pub score: u32,
}

/// Positions each player may take this inning, indexed by [`Position::index`].
type Permitted = Vec<[bool; Position::COUNT]>;

/// The lineup under construction: who sits where, and which positions are claimed.
struct Seating {
    by_player: Vec<Option<Position>>,
    by_position: [Option<Player>; Position::COUNT],
}

impl Seating {
    fn new(players: usize) -> Self {
        Self {
            by_player: vec![None; players],
            by_position: [None; Position::COUNT],
        }
    }

    fn is_seated(&self, player: Player) -> bool {
        self.by_player[player].is_some()
    }

    fn is_claimed(&self, position: Position) -> bool {
        self.by_position[position.index()].is_some()
    }

    fn seat(&mut self, player: Player, position: Position) {
        self.by_player[player] = Some(position);
        self.by_position[position.index()] = Some(player);
    }

    fn into_assignment(self) -> InningAssignment {
        self.by_player
            .into_iter()
            .enumerate()
            .filter_map(|(player, position)| position.map(|position| (player, position)))
            .collect()
    }
}

/// Plans innings for one game's [`LineupRules`].
#[derive(Debug, Clone, Copy)]
pub struct InningPlanner<'a> {
    rules: &'a LineupRules,
}

impl<'a> InningPlanner<'a> {
    /// Creates a planner for validated rules.
    pub fn new(rules: &'a LineupRules) -> Self {
        Self { rules }
    }

    /// Desirability of seating `player` at `position`, given the innings already played.
    pub fn score(&self, history: &GameHistory, player: Player, position: Position) -> u32 {
        let played = history.times_played(player, position);
        let mut score = 0;

        if position == Position::Catcher && played == 0 {
            score += 1;
        }
        if position == Position::Bench && played == 0 && !self.rules.is_bench_exempt(player) {
            score += 1;
        }
        if position == Position::FirstBase
            && played == 0
            && self.rules.is_first_base_eligible(player)
        {
            score += 1;
        }
        if !matches!(position, Position::Catcher | Position::Bench) && played < ROTATION_CAP {
            score += 1;
        }
        if position.is_infield() && history.infield_innings(player) < INFIELD_MINIMUM {
            score += 1;
        }
        score
    }

    /// Scores every (player, position) pair, player-major in catalogue order.
    pub fn candidates(&self, history: &GameHistory) -> Vec<Candidate> {
        (0..self.rules.players())
            .flat_map(|player| {
                Position::ALL.into_iter().map(move |position| Candidate {
                    player,
                    position,
                    score: self.score(history, player, position),
                })
            })
            .collect()
    }

    /// True if seating `player` at `position` keeps every limit of the game.
    ///
    /// With `enforce_infield`, a player who needs every remaining inning in the infield to
    /// reach [`INFIELD_MINIMUM`] may only take an infield position.
    pub fn permits(
        &self,
        history: &GameHistory,
        player: Player,
        position: Position,
        enforce_infield: bool,
    ) -> bool {
        if enforce_infield && self.must_play_infield(history, player) && !position.is_infield() {
            return false;
        }

        let played = history.times_played(player, position);
        match position {
            Position::Bench => played == 0 && !self.rules.is_bench_exempt(player),
            Position::Catcher => played == 0,
            Position::FirstBase => {
                played < ROTATION_CAP
                    && (!self.rules.restricts_first_base()
                        || self.rules.is_first_base_eligible(player))
            }
            _ => played < ROTATION_CAP,
        }
    }

    /// True if `player` reaches the infield minimum only by playing infield in every
    /// remaining inning, this one included.
    pub fn must_play_infield(&self, history: &GameHistory, player: Player) -> bool {
        let remaining = self.rules.innings().saturating_sub(history.len());
        let missing = INFIELD_MINIMUM.saturating_sub(history.infield_innings(player));
        missing > 0 && missing == remaining
    }

    /// Plans the inning following `history`.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::NoValidLineup`] if no assignment seats every player within
    /// the limits.
    pub fn plan_inning<T: TieBreak + ?Sized>(
        &self,
        history: &GameHistory,
        tie_break: &mut T,
    ) -> Result<InningAssignment, LineupError> {
        let inning = history.len();

        let mut candidates = self.candidates(history);
        tie_break.arrange(&mut candidates);
        // stable: equal scores keep the tie-break order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(
            inning,
            candidates = candidates.len(),
            best = candidates.first().map(|c| c.score),
            "scored candidates"
        );

        if let Some(assignment) = self.assign(history, &candidates, true) {
            return Ok(assignment);
        }

        let forced = (0..self.rules.players())
            .filter(|&player| self.must_play_infield(history, player))
            .collect::<Vec<_>>();
        if forced.is_empty() {
            return Err(LineupError::NoValidLineup { inning });
        }

        warn!(
            inning,
            ?forced,
            "infield minimum cannot be kept for every player, planning without it"
        );
        self.assign(history, &candidates, false)
            .ok_or(LineupError::NoValidLineup { inning })
    }

    fn permitted(&self, history: &GameHistory, enforce_infield: bool) -> Permitted {
        (0..self.rules.players())
            .map(|player| {
                Position::ALL.map(|position| self.permits(history, player, position, enforce_infield))
            })
            .collect()
    }

    /// Greedy pass over `ranked`, then completion along augmenting paths.
    fn assign(
        &self,
        history: &GameHistory,
        ranked: &[Candidate],
        enforce_infield: bool,
    ) -> Option<InningAssignment> {
        let players = self.rules.players();
        let permitted = self.permitted(history, enforce_infield);
        let mut seating = Seating::new(players);

        for candidate in ranked {
            if seating.is_seated(candidate.player) || seating.is_claimed(candidate.position) {
                continue;
            }
            if !permitted[candidate.player][candidate.position.index()] {
                continue;
            }
            trace!(
                player = candidate.player,
                position = %candidate.position,
                score = candidate.score,
                "seated"
            );
            seating.seat(candidate.player, candidate.position);
        }

        // each player tries its permitted positions best score first
        let mut preferences = vec![Vec::new(); players];
        for candidate in ranked {
            if permitted[candidate.player][candidate.position.index()] {
                preferences[candidate.player].push(candidate.position);
            }
        }

        for player in 0..players {
            if seating.is_seated(player) {
                continue;
            }
            let mut visited = [false; Position::COUNT];
            if !Self::reseat(player, &mut seating, &preferences, &mut visited) {
                debug!(player, enforce_infield, "no position left for player");
                return None;
            }
            debug!(player, "seated by moving other players");
        }

        Some(seating.into_assignment())
    }

    /// Seats `player`, moving current holders along an augmenting path if needed.
    fn reseat(
        player: Player,
        seating: &mut Seating,
        preferences: &[Vec<Position>],
        visited: &mut [bool; Position::COUNT],
    ) -> bool {
        for &position in &preferences[player] {
            let slot = position.index();
            if visited[slot] {
                continue;
            }
            visited[slot] = true;

            let free = match seating.by_position[slot] {
                None => true,
                Some(holder) => Self::reseat(holder, seating, preferences, visited),
            };
            if free {
                seating.seat(player, position);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rules::LineupRulesBuilder,
        tie_break::{OrderedTieBreak, ShuffleTieBreak},
    };
    use Position::*;

    fn rules(innings: usize) -> LineupRules {
        LineupRulesBuilder::new()
            .with_innings(innings)
            .with_bench_exempt([0, 5, 6])
            .with_first_base_eligible([3, 5, 7, 9, 10])
            .build()
            .unwrap()
    }

    fn inning(positions: [Position; 11]) -> InningAssignment {
        positions.into_iter().enumerate().collect()
    }

    /// What the ordered tie-break plans for the first inning under [`rules`].
    fn opening_inning() -> InningAssignment {
        inning([
            Pitcher,
            Catcher,
            SecondBase,
            FirstBase,
            ThirdBase,
            ShortStop,
            LeftField,
            Bench,
            LeftCenterField,
            RightCenterField,
            RightField,
        ])
    }

    #[test]
    fn scores_on_empty_history() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let history = GameHistory::new();

        // eligible for first base, not exempt
        assert_eq!(planner.score(&history, 3, Bench), 1);
        assert_eq!(planner.score(&history, 3, Catcher), 2);
        assert_eq!(planner.score(&history, 3, FirstBase), 3);
        assert_eq!(planner.score(&history, 3, ShortStop), 2);
        assert_eq!(planner.score(&history, 3, RightField), 1);

        // exempt, not eligible for first base
        assert_eq!(planner.score(&history, 0, Bench), 0);
        assert_eq!(planner.score(&history, 0, FirstBase), 2);
        assert_eq!(planner.score(&history, 0, LeftCenterField), 1);
    }

    #[test]
    fn scores_follow_history() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        history.record(opening_inning());

        assert_eq!(planner.score(&history, 1, Catcher), 1);
        assert_eq!(planner.score(&history, 7, Bench), 0);
        assert_eq!(planner.score(&history, 3, FirstBase), 2);
        assert_eq!(planner.score(&history, 6, LeftField), 1);

        history.record(opening_inning());
        // two innings in left field and two in the infield
        assert_eq!(planner.score(&history, 6, LeftField), 0);
        assert_eq!(planner.score(&history, 0, Pitcher), 0);
        assert_eq!(planner.score(&history, 0, SecondBase), 1);
    }

    #[test]
    fn candidates_cover_every_pair() {
        let rules = rules(5);
        let candidates = InningPlanner::new(&rules).candidates(&GameHistory::new());
        assert_eq!(candidates.len(), 11 * 11);
        assert_eq!(candidates[12], Candidate { player: 1, position: Pitcher, score: 2 });
    }

    #[test]
    fn limits_are_permitted_or_not() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        assert!(!planner.permits(&history, 0, Bench, true));
        assert!(!planner.permits(&history, 0, FirstBase, true));
        assert!(planner.permits(&history, 3, FirstBase, true));

        history.record(opening_inning());
        assert!(!planner.permits(&history, 1, Catcher, true));
        assert!(!planner.permits(&history, 7, Bench, true));
        assert!(planner.permits(&history, 6, LeftField, true));
        history.record(opening_inning());
        assert!(!planner.permits(&history, 6, LeftField, true));
    }

    #[test]
    fn ordered_tie_break_plans_opening_inning() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let assignment = planner
            .plan_inning(&GameHistory::new(), &mut OrderedTieBreak)
            .unwrap();
        assert_eq!(assignment, opening_inning());
    }

    #[test]
    fn shuffled_innings_keep_limits() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        for seed in 0..32 {
            let assignment = planner
                .plan_inning(&GameHistory::new(), &mut ShuffleTieBreak::seeded(seed))
                .unwrap();
            assert!(assignment.is_complete(11));
            let benched = assignment.player_at(Bench).unwrap();
            assert!(!rules.is_bench_exempt(benched));
            let first_base = assignment.player_at(FirstBase).unwrap();
            assert!(rules.is_first_base_eligible(first_base));
        }
    }

    #[test]
    fn same_seed_same_inning() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        history.record(opening_inning());
        let a = planner.plan_inning(&history, &mut ShuffleTieBreak::seeded(99)).unwrap();
        let b = planner.plan_inning(&history, &mut ShuffleTieBreak::seeded(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn last_chance_players_stay_in_the_infield() {
        let rules = rules(2);
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        history.record(opening_inning());

        for player in 0..=5 {
            assert!(planner.must_play_infield(&history, player));
        }
        // two innings short with one left: out of reach, not forced
        assert!(!planner.must_play_infield(&history, 8));

        for seed in 0..16 {
            let assignment = planner
                .plan_inning(&history, &mut ShuffleTieBreak::seeded(seed))
                .unwrap();
            assert!(assignment.is_complete(11));
            for player in 0..=5 {
                assert!(assignment.position_of(player).unwrap().is_infield());
            }
            assert_ne!(assignment.position_of(1), Some(Catcher));
        }
    }

    #[test]
    fn stranded_bench_is_filled_by_moving_players() {
        // only player 7 may still sit out, yet also needs the infield
        let rules = LineupRulesBuilder::new()
            .with_innings(4)
            .with_bench_exempt(0..=6)
            .with_first_base_eligible([7, 8, 9])
            .build()
            .unwrap();
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        history.record(inning([
            Pitcher, Catcher, SecondBase, ThirdBase, ShortStop, LeftField, LeftCenterField,
            RightCenterField, FirstBase, Bench, RightField,
        ]));
        history.record(inning([
            Catcher, Pitcher, ThirdBase, SecondBase, LeftField, ShortStop, RightCenterField,
            LeftCenterField, FirstBase, RightField, Bench,
        ]));
        history.record(inning([
            SecondBase, ThirdBase, Pitcher, Catcher, RightCenterField, RightField, LeftField,
            FirstBase, Bench, LeftCenterField, ShortStop,
        ]));
        assert!(planner.must_play_infield(&history, 7));

        for assignment in [
            planner.plan_inning(&history, &mut OrderedTieBreak).unwrap(),
            planner
                .plan_inning(&history, &mut ShuffleTieBreak::seeded(3))
                .unwrap(),
        ] {
            assert!(assignment.is_complete(11));
            assert_eq!(assignment.player_at(Bench), Some(7));
            assert_eq!(assignment.player_at(FirstBase), Some(9));
        }
    }

    #[test]
    fn unsatisfiable_inning_is_reported() {
        let rules = rules(5);
        let planner = InningPlanner::new(&rules);
        let mut history = GameHistory::new();
        // every non-exempt player has already sat out
        for bench in [1, 2, 3, 4, 7, 8, 9, 10] {
            let mut positions = Position::ALL;
            positions.swap(0, bench);
            // hand first base to player 5 if the swap gave it away
            let first_base = positions.iter().position(|&p| p == FirstBase).unwrap();
            if !rules.is_first_base_eligible(first_base) {
                positions.swap(first_base, 5);
            }
            history.record(inning(positions));
        }
        assert_eq!(
            planner.plan_inning(&history, &mut OrderedTieBreak),
            Err(LineupError::NoValidLineup { inning: 8 })
        );
    }
}
