//! Legal-move enumeration.
//!
//! Deterministic in the player's location, their ledger, and the occupancy
//! snapshot handed in by the engine. Occupancy is the set of seeker
//! locations other than the mover's own: the evader's location never blocks
//! anyone, and nobody blocks themselves.

use crate::board::{Board, NodeId};
use crate::moves::{DoubleMove, Move, TicketMove};
use crate::player::{Colour, Player};
use crate::tickets::{Ticket, TicketBook};
use std::collections::HashSet;

/// Enumerate every legal move for `player`.
///
/// `allow_double` is the engine's schedule check: doubles are only on offer
/// while at least two rounds remain. A seeker whose set would otherwise be
/// empty gets exactly `{Pass}`; the evader never does — an empty set for the
/// evader is a termination signal, not a move.
pub(crate) fn legal_moves(
    board: &Board,
    player: &Player,
    occupied: &HashSet<NodeId>,
    allow_double: bool,
) -> HashSet<Move> {
    let singles = single_moves(board, player.location, &player.tickets, player.colour, occupied);

    let mut set: HashSet<Move> = singles.iter().map(|&leg| Move::Single(leg)).collect();

    if allow_double && player.tickets.has(Ticket::Double) {
        // Reserve the first leg's ticket on a scratch ledger, then enumerate
        // second legs from the first destination against the same occupancy
        // snapshot (a mid-double stop never counts as newly occupied).
        let mut reserved = player.tickets.clone();
        for &first in &singles {
            if reserved.take(first.ticket).is_err() {
                continue;
            }
            for second in
                single_moves(board, first.destination, &reserved, player.colour, occupied)
            {
                set.insert(Move::Double(DoubleMove::new(player.colour, first, second)));
            }
            reserved.grant(first.ticket);
        }
    }

    if set.is_empty() && player.is_seeker() {
        set.insert(Move::Pass(player.colour));
    }
    set
}

/// Single legs out of `location` affordable with `tickets`.
///
/// A destination reachable with a held hop ticket and a held secret ticket
/// yields two distinct moves: same stop, different cost, different
/// visibility later on.
fn single_moves(
    board: &Board,
    location: NodeId,
    tickets: &TicketBook,
    colour: Colour,
    occupied: &HashSet<NodeId>,
) -> Vec<TicketMove> {
    let mut moves = Vec::new();
    for edge in board.edges_from(location) {
        if occupied.contains(&edge.to) {
            continue;
        }
        let hop = Ticket::from_transport(edge.transport);
        if tickets.has(hop) {
            moves.push(TicketMove::new(colour, hop, edge.to));
        }
        if tickets.has(Ticket::Secret) {
            moves.push(TicketMove::new(colour, Ticket::Secret, edge.to));
        }
    }
    moves
}
