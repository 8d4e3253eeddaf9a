//! Move values.
//!
//! Moves describe intent and nothing else: the engine validates a submitted
//! move against the legal set computed at acceptance time before any state
//! changes. They hash and compare by value so legal sets can be plain
//! `HashSet<Move>`.

use crate::board::NodeId;
use crate::player::Colour;
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};

/// One leg of movement: who, with which ticket, to where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl TicketMove {
    pub fn new(colour: Colour, ticket: Ticket, destination: NodeId) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }
}

/// A two-leg turn, paid for with one double ticket on top of the per-leg
/// hop tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    pub fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }
}

/// Everything a player can submit on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Zero-effect move, offered to a seeker only when nothing else is legal
    Pass(Colour),
    /// One leg using one ticket
    Single(TicketMove),
    /// Two ordered legs consuming a double ticket
    Double(DoubleMove),
}

impl Move {
    /// The player this move belongs to
    pub fn colour(&self) -> Colour {
        match self {
            Move::Pass(colour) => *colour,
            Move::Single(mv) => mv.colour,
            Move::Double(mv) => mv.colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_colour() {
        let leg = TicketMove::new(Colour::Black, Ticket::Taxi, 2);
        assert_eq!(Move::Pass(Colour::Blue).colour(), Colour::Blue);
        assert_eq!(Move::Single(leg).colour(), Colour::Black);
        assert_eq!(
            Move::Double(DoubleMove::new(Colour::Black, leg, leg)).colour(),
            Colour::Black
        );
    }

    #[test]
    fn test_moves_compare_by_value() {
        let a = Move::Single(TicketMove::new(Colour::Blue, Ticket::Bus, 7));
        let b = Move::Single(TicketMove::new(Colour::Blue, Ticket::Bus, 7));
        let c = Move::Single(TicketMove::new(Colour::Blue, Ticket::Secret, 7));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
