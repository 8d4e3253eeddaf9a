//! Player identities, configuration, and in-game records.
//!
//! Exactly one player is the concealed evader; everyone else is a seeker.
//! The two roles share one record type: the only structural difference is
//! that the evader's publicized location can lag behind the true one.

use crate::board::NodeId;
use crate::tickets::{Ticket, TicketBook};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity tag of a player. `Black` is the evader; every other colour is a
/// seeker. Assigned once at construction and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// Whether this colour is the distinguished evader identity
    pub fn is_evader(&self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Whether this colour is a seeker identity
    pub fn is_seeker(&self) -> bool {
        !self.is_evader()
    }
}

/// Validated-at-construction description of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Identity tag (unique across the game)
    pub colour: Colour,
    /// Starting location (unique across the game)
    pub location: NodeId,
    /// Initial ticket counts; must carry an entry for every kind
    pub tickets: HashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a configuration
    pub fn new(colour: Colour, location: NodeId, tickets: HashMap<Ticket, u32>) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }
}

/// One player's live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identity tag
    pub colour: Colour,
    /// True current location
    pub location: NodeId,
    /// Most recently publicized location. Meaningful only for the evader:
    /// it trails `location` through concealed rounds and snaps to it on a
    /// reveal. Starts at 0, the never-revealed value.
    pub last_seen: NodeId,
    /// Ticket ledger
    pub tickets: TicketBook,
}

impl Player {
    /// Build the live record from a validated configuration
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            colour: config.colour,
            location: config.location,
            last_seen: 0,
            tickets: TicketBook::with_counts(&config.tickets),
        }
    }

    /// Whether this player is the evader
    pub fn is_evader(&self) -> bool {
        self.colour.is_evader()
    }

    /// Whether this player is a seeker
    pub fn is_seeker(&self) -> bool {
        self.colour.is_seeker()
    }
}
