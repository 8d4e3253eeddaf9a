//! Tickets and the per-player ticket ledger.
//!
//! Every move costs a ticket. Hop tickets pay for the matching transport,
//! a secret ticket substitutes for any hop without revealing the transport
//! used, and a double ticket buys a two-leg turn for the evader (it is never
//! itself spent as a hop).

use crate::board::Transport;
use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Movement permit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ticket {
    /// Pays for a taxi edge
    Taxi,
    /// Pays for a bus edge
    Bus,
    /// Pays for an underground edge
    Underground,
    /// Pays for any edge without revealing the transport
    Secret,
    /// Permits a two-leg turn (evader only)
    Double,
}

impl Ticket {
    /// All ticket kinds
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The hop ticket matching a transport
    pub fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
        }
    }
}

/// A player's ledger of tickets, one non-negative count per kind.
///
/// The ledger always carries an entry for every kind; a kind a player never
/// holds simply stays at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketBook {
    counts: HashMap<Ticket, u32>,
}

impl Default for TicketBook {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketBook {
    /// Create an empty ledger (zero of every kind)
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for ticket in Ticket::ALL {
            counts.insert(ticket, 0);
        }
        Self { counts }
    }

    /// Create a ledger from explicit counts; kinds absent from the map are zero
    pub fn with_counts(initial: &HashMap<Ticket, u32>) -> Self {
        let mut book = Self::new();
        for (ticket, count) in initial {
            book.counts.insert(*ticket, *count);
        }
        book
    }

    /// Number of tickets of a kind
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts.get(&ticket).copied().unwrap_or(0)
    }

    /// Whether at least one ticket of the kind is held
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Spend one ticket of the kind
    pub fn take(&mut self, ticket: Ticket) -> Result<(), GameError> {
        match self.counts.get_mut(&ticket) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(GameError::InsufficientTickets),
        }
    }

    /// Receive one ticket of the kind
    pub fn grant(&mut self, ticket: Ticket) {
        *self.counts.entry(ticket).or_insert(0) += 1;
    }
}
