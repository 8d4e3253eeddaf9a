//! Win-condition evaluation.
//!
//! Five predicates over engine state. Captures, corners, and fully
//! immobilized seekers are checked fresh on every query; schedule
//! exhaustion and a stuck evader are only decidable once the last player
//! of a rotation has moved, so the turn engine latches those at the
//! boundary. `winners` checks the predicates in a fixed order so that,
//! should two ever hold at once, the result is still a single
//! unambiguous winner set.

use crate::game::Game;
use crate::moves::Move;
use crate::player::Colour;
use std::collections::HashSet;

impl Game {
    /// Whether the game has been decided. Boundary-gated outcomes
    /// (schedule exhaustion, a stuck evader) arrive only through the
    /// latch; the other predicates are live, so a mid-rotation capture
    /// or corner reads as over the moment it happens.
    pub fn is_over(&self) -> bool {
        self.game_over
            || self.evader_captured()
            || self.seekers_all_stuck()
            || self.evader_cornered()
    }

    /// Full predicate sweep, run by the engine after the last player of
    /// a rotation has moved: only here do the boundary-gated outcomes
    /// become decidable.
    pub(crate) fn rotation_boundary_over(&self) -> bool {
        self.is_over() || self.rounds_exhausted() || self.evader_stuck()
    }

    /// The winner set of the first predicate that holds, in the fixed
    /// evaluation order; empty while the game is still running.
    pub fn winners(&self) -> HashSet<Colour> {
        let mut set = HashSet::new();
        if self.rounds_exhausted() {
            set.insert(self.evader().colour);
        } else if self.evader_stuck() && self.end_of_rotation() {
            self.add_seekers(&mut set);
        } else if self.evader_captured() {
            self.add_seekers(&mut set);
        } else if self.seekers_all_stuck() {
            set.insert(self.evader().colour);
        } else if self.evader_cornered() {
            self.add_seekers(&mut set);
        }
        set
    }

    fn add_seekers(&self, set: &mut HashSet<Colour>) {
        for seeker in self.seekers() {
            set.insert(seeker.colour);
        }
    }

    /// The last player of the rotation is up: the round boundary at which
    /// boundary-gated predicates may fire
    fn end_of_rotation(&self) -> bool {
        self.current_player == self.players.len() - 1
    }

    /// Every scheduled round has been played out: the evader survived
    fn rounds_exhausted(&self) -> bool {
        self.current_round == self.schedule.len() && self.end_of_rotation()
    }

    /// The evader has no legal move at all (never offered a pass)
    fn evader_stuck(&self) -> bool {
        self.legal_moves_for(self.evader()).is_empty()
    }

    /// A seeker stands on the evader's true location
    fn evader_captured(&self) -> bool {
        let hideout = self.evader().location;
        self.seekers().any(|seeker| seeker.location == hideout)
    }

    /// Every seeker's legal set is exactly `{Pass}`
    fn seekers_all_stuck(&self) -> bool {
        self.seekers().all(|seeker| {
            let moves = self.legal_moves_for(seeker);
            moves.len() == 1 && moves.contains(&Move::Pass(seeker.colour))
        })
    }

    /// Every edge out of the evader's true location lands on a seeker
    fn evader_cornered(&self) -> bool {
        let occupied: HashSet<_> = self.seekers().map(|seeker| seeker.location).collect();
        self.board
            .edges_from(self.evader().location)
            .iter()
            .all(|edge| occupied.contains(&edge.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Transport};
    use crate::player::PlayerConfig;
    use crate::tickets::Ticket;
    use std::collections::HashMap;

    fn full_tickets(counts: &[(Ticket, u32)]) -> HashMap<Ticket, u32> {
        let mut map: HashMap<Ticket, u32> = Ticket::ALL.iter().map(|t| (*t, 0)).collect();
        for (ticket, count) in counts {
            map.insert(*ticket, *count);
        }
        map
    }

    #[test]
    fn test_captured_ends_the_game_for_the_seekers() {
        let mut board = Board::new();
        board.add_link(1, 2, Transport::Taxi);
        board.add_link(2, 3, Transport::Taxi);
        board.add_link(3, 1, Transport::Taxi);

        let evader = PlayerConfig::new(Colour::Black, 1, full_tickets(&[(Ticket::Taxi, 2)]));
        let seeker = PlayerConfig::new(Colour::Blue, 3, full_tickets(&[(Ticket::Taxi, 2)]));
        let mut game = Game::new(vec![false, false], board, evader, vec![seeker]).unwrap();

        // Evader slips to 2; his true location never blocks a seeker
        game.accept_move(Move::Single(crate::moves::TicketMove::new(
            Colour::Black,
            Ticket::Taxi,
            2,
        )))
        .unwrap();
        assert!(!game.is_over());

        let events = game
            .accept_move(Move::Single(crate::moves::TicketMove::new(
                Colour::Blue,
                Ticket::Taxi,
                2,
            )))
            .unwrap();

        let winners: HashSet<Colour> = [Colour::Blue].into_iter().collect();
        assert_eq!(
            events.last().unwrap(),
            &crate::spectator::GameEvent::GameOver {
                winners: winners.clone()
            }
        );
        assert!(game.is_over());
        assert_eq!(game.winners(), winners);
    }

    #[test]
    fn test_all_seekers_stuck_means_evader_wins() {
        let mut board = Board::new();
        board.add_link(1, 2, Transport::Taxi);
        board.add_link(10, 11, Transport::Bus);

        let evader = PlayerConfig::new(Colour::Black, 1, full_tickets(&[(Ticket::Taxi, 2)]));
        // A seeker with no tickets at all can only pass
        let seeker = PlayerConfig::new(Colour::Blue, 10, full_tickets(&[]));
        let game = Game::new(vec![false, false], board, evader, vec![seeker]).unwrap();

        assert!(game.is_over());
        let winners: HashSet<Colour> = [Colour::Black].into_iter().collect();
        assert_eq!(game.winners(), winners);
    }

    #[test]
    fn test_stuck_evader_loses_only_at_the_rotation_boundary() {
        let mut board = Board::new();
        board.add_link(1, 2, Transport::Taxi);
        board.add_link(2, 3, Transport::Taxi);
        board.add_link(10, 11, Transport::Taxi);

        // One taxi ticket: after the first hop the evader still has open,
        // unoccupied streets but nothing left to pay with
        let evader = PlayerConfig::new(Colour::Black, 1, full_tickets(&[(Ticket::Taxi, 1)]));
        let seeker = PlayerConfig::new(Colour::Blue, 10, full_tickets(&[(Ticket::Taxi, 5)]));
        let mut game = Game::new(vec![false, false], board, evader, vec![seeker]).unwrap();

        game.accept_move(Move::Single(crate::moves::TicketMove::new(
            Colour::Black,
            Ticket::Taxi,
            2,
        )))
        .unwrap();

        // Out of tickets but not cornered: the verdict waits for the
        // rotation boundary, and the evader stays concealed meanwhile
        assert!(game.legal_moves(Colour::Black).unwrap().is_empty());
        assert!(!game.is_over());
        assert!(game.winners().is_empty());
        assert_eq!(game.player_location(Colour::Black).unwrap(), 0);

        let events = game
            .accept_move(Move::Single(crate::moves::TicketMove::new(
                Colour::Blue,
                Ticket::Taxi,
                11,
            )))
            .unwrap();

        let winners: HashSet<Colour> = [Colour::Blue].into_iter().collect();
        assert_eq!(
            events.last().unwrap(),
            &crate::spectator::GameEvent::GameOver {
                winners: winners.clone()
            }
        );
        assert!(game.is_over());
        assert_eq!(game.winners(), winners);
    }

    #[test]
    fn test_cornered_evader_loses() {
        // One-way street into a junction whose every exit is watched
        let mut board = Board::new();
        board.add_edge(0, 4, Transport::Taxi);
        board.add_link(4, 2, Transport::Taxi);
        board.add_link(4, 3, Transport::Bus);
        board.add_link(2, 1, Transport::Taxi);
        board.add_link(3, 1, Transport::Taxi);

        let evader = PlayerConfig::new(
            Colour::Black,
            0,
            full_tickets(&[(Ticket::Taxi, 2), (Ticket::Bus, 2)]),
        );
        let seekers = vec![
            PlayerConfig::new(Colour::Blue, 2, full_tickets(&[(Ticket::Taxi, 2)])),
            PlayerConfig::new(Colour::Red, 3, full_tickets(&[(Ticket::Taxi, 2)])),
        ];
        let mut game = Game::new(vec![false, false], board, evader, seekers).unwrap();
        assert!(!game.is_over());

        // Evader drives into 4; both exits (2 and 3) are seeker-occupied,
        // so the game ends mid-rotation.
        let events = game
            .accept_move(Move::Single(crate::moves::TicketMove::new(
                Colour::Black,
                Ticket::Taxi,
                4,
            )))
            .unwrap();

        let winners: HashSet<Colour> = [Colour::Blue, Colour::Red].into_iter().collect();
        assert_eq!(
            events.last().unwrap(),
            &crate::spectator::GameEvent::GameOver {
                winners: winners.clone()
            }
        );
        assert!(game.is_over());
        assert_eq!(game.winners(), winners);
    }

    #[test]
    fn test_winners_empty_while_running() {
        let mut board = Board::new();
        board.add_link(1, 2, Transport::Taxi);
        board.add_link(2, 3, Transport::Taxi);
        board.add_link(3, 4, Transport::Taxi);

        let evader = PlayerConfig::new(Colour::Black, 1, full_tickets(&[(Ticket::Taxi, 5)]));
        let seeker = PlayerConfig::new(Colour::Blue, 4, full_tickets(&[(Ticket::Taxi, 5)]));
        let game = Game::new(vec![false, true], board, evader, vec![seeker]).unwrap();

        assert!(!game.is_over());
        assert!(game.winners().is_empty());
    }
}
