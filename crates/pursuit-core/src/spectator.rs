//! Spectator notifications.
//!
//! Observers subscribe to an ordered, synchronous stream of game events.
//! Every notification completes before the engine makes its next state
//! transition, so spectators always see events in true causal order. Moves
//! arrive already redacted: during concealed rounds the evader's published
//! destination is the last-known location, never the true one.

use crate::game::GameError;
use crate::moves::Move;
use crate::player::Colour;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Notifications produced by the turn engine, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began (1-based round number)
    RoundStarted(usize),
    /// A move resolved; for the evader this is the publicized version
    MoveMade(Move),
    /// Every player has moved once; play wraps back to the evader
    RotationComplete,
    /// A win predicate holds; the game is finished
    GameOver { winners: HashSet<Colour> },
}

/// Receiver of game events. All methods default to no-ops so observers
/// implement only what they care about.
pub trait Spectator {
    fn on_round_started(&mut self, _round: usize) {}
    fn on_move_made(&mut self, _mv: &Move) {}
    fn on_rotation_complete(&mut self) {}
    fn on_game_over(&mut self, _winners: &HashSet<Colour>) {}
}

/// A shared, interior-mutable spectator handle. The engine is single
/// threaded per game, so `Rc<RefCell<_>>` is the right ownership shape.
pub type SharedSpectator = Rc<RefCell<dyn Spectator>>;

/// Registration list plus synchronous fan-out, in registration order.
#[derive(Default)]
pub struct SpectatorBus {
    observers: Vec<SharedSpectator>,
}

impl SpectatorBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; the same handle may only be registered once
    pub fn subscribe(&mut self, spectator: SharedSpectator) -> Result<(), GameError> {
        if self.observers.iter().any(|o| same_observer(o, &spectator)) {
            return Err(GameError::DuplicateSpectator);
        }
        self.observers.push(spectator);
        Ok(())
    }

    /// Remove a registered observer
    pub fn unsubscribe(&mut self, spectator: &SharedSpectator) -> Result<(), GameError> {
        let position = self
            .observers
            .iter()
            .position(|o| same_observer(o, spectator))
            .ok_or(GameError::UnknownSpectator)?;
        self.observers.remove(position);
        Ok(())
    }

    /// The registered observers, in registration order
    pub fn observers(&self) -> &[SharedSpectator] {
        &self.observers
    }

    /// Deliver one event to every observer, in registration order
    pub(crate) fn publish(&self, event: &GameEvent) {
        for observer in &self.observers {
            let mut observer = observer.borrow_mut();
            match event {
                GameEvent::RoundStarted(round) => observer.on_round_started(*round),
                GameEvent::MoveMade(mv) => observer.on_move_made(mv),
                GameEvent::RotationComplete => observer.on_rotation_complete(),
                GameEvent::GameOver { winners } => observer.on_game_over(winners),
            }
        }
    }
}

// Trait objects have no Debug to lean on; the count is what matters.
impl fmt::Debug for SpectatorBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectatorBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Identity by address: two handles are the same observer iff they point at
/// the same allocation (vtable metadata is deliberately ignored).
fn same_observer(a: &SharedSpectator, b: &SharedSpectator) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
