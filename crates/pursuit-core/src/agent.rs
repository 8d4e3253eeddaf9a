//! Decision agents.
//!
//! An agent is an opaque strategy: given its player's location and the set
//! of currently legal moves, it eventually answers with one of those moves.
//! The engine never second-guesses an agent; an answer from outside the
//! offered set is rejected at acceptance time.

use crate::board::NodeId;
use crate::moves::Move;
use rand::prelude::*;
use std::collections::HashSet;

/// A strategy that picks one move from an offered legal set.
pub trait MoveAgent {
    /// Choose a member of `moves`, or `None` if the agent cannot answer
    /// (an empty offer, for instance).
    fn choose_move(&mut self, location: NodeId, moves: &HashSet<Move>) -> Option<Move>;
}

/// Baseline agent: uniformly random over the legal set.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for replays and tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveAgent for RandomAgent {
    fn choose_move(&mut self, _location: NodeId, moves: &HashSet<Move>) -> Option<Move> {
        moves.iter().choose(&mut self.rng).copied()
    }
}
