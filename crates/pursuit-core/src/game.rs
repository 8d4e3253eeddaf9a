//! Turn engine, construction validation, and the public game facade.
//!
//! One `Game` value owns all mutable state for one match: the player list
//! (evader first, seeker order fixed), the round counter, and the spectator
//! bus. Play is a strict protocol: `begin_turn` hands the current player's
//! legal set out, `accept_move` resolves exactly one member of that set,
//! and the engine advances the player index, declaring the game over as
//! soon as any win predicate holds.

use crate::agent::MoveAgent;
use crate::board::{Board, NodeId};
use crate::catalog;
use crate::moves::{DoubleMove, Move, TicketMove};
use crate::player::{Colour, Player, PlayerConfig};
use crate::spectator::{GameEvent, SharedSpectator, SpectatorBus};
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Round counter value before the evader's first move. The counter equals
/// the number of evader moves resolved so far, which is also the index of
/// the round about to start.
pub const NOT_STARTED: usize = 0;

/// Everything that can go wrong constructing or driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("round schedule is empty")]
    EmptySchedule,

    #[error("board has no edges")]
    EmptyBoard,

    #[error("the evader configuration must carry the evader colour")]
    WrongEvaderColour,

    #[error("at least one seeker is required")]
    NoSeekers,

    #[error("two players share a colour")]
    DuplicateColour,

    #[error("two players share a starting location")]
    DuplicateLocation,

    #[error("a player configuration is missing a ticket kind")]
    MissingTicketKind,

    #[error("a seeker may not hold double or secret tickets")]
    SeekerHoldsRestrictedTicket,

    #[error("not enough tickets of that kind")]
    InsufficientTickets,

    #[error("move is not in the current player's legal set")]
    IllegalMove,

    #[error("pass is only legal when no other move exists")]
    InvalidPass,

    #[error("the game is already over")]
    GameOver,

    #[error("no player has that colour")]
    UnknownColour,

    #[error("spectator is already subscribed")]
    DuplicateSpectator,

    #[error("spectator is not subscribed")]
    UnknownSpectator,
}

/// The agent handoff payload: where the current player stands and what they
/// may do. The caller answers by submitting one member of `moves` to
/// [`Game::accept_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Whose turn it is
    pub colour: Colour,
    /// That player's true current location
    pub location: NodeId,
    /// The legal set; submitting anything else is rejected
    pub moves: HashSet<Move>,
}

/// State of one match. Created once from validated configuration, mutated
/// in place for the life of the game, never reused.
#[derive(Debug)]
pub struct Game {
    pub(crate) schedule: Vec<bool>,
    pub(crate) board: Board,
    /// Index 0 is always the evader; seeker order is fixed at construction
    pub(crate) players: Vec<Player>,
    pub(crate) current_round: usize,
    pub(crate) current_player: usize,
    /// Latched by the post-resolution check; the boundary-gated outcomes
    /// (schedule exhaustion, stuck evader) are declared nowhere else
    pub(crate) game_over: bool,
    pub(crate) spectators: SpectatorBus,
}

impl Game {
    /// Validate configuration and create a game. All failures surface here;
    /// a constructed game never trips over its own configuration later.
    pub fn new(
        schedule: Vec<bool>,
        board: Board,
        evader: PlayerConfig,
        seekers: Vec<PlayerConfig>,
    ) -> Result<Self, GameError> {
        if schedule.is_empty() {
            return Err(GameError::EmptySchedule);
        }
        if board.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        if !evader.colour.is_evader() {
            return Err(GameError::WrongEvaderColour);
        }
        if seekers.is_empty() {
            return Err(GameError::NoSeekers);
        }

        let mut configs = Vec::with_capacity(seekers.len() + 1);
        configs.push(evader);
        configs.extend(seekers);

        let mut colours = HashSet::new();
        let mut locations = HashSet::new();
        for config in &configs {
            if !colours.insert(config.colour) {
                return Err(GameError::DuplicateColour);
            }
            if !locations.insert(config.location) {
                return Err(GameError::DuplicateLocation);
            }
        }

        for config in &configs {
            for ticket in Ticket::ALL {
                if !config.tickets.contains_key(&ticket) {
                    return Err(GameError::MissingTicketKind);
                }
            }
            if config.colour.is_seeker() {
                let double = config.tickets.get(&Ticket::Double).copied().unwrap_or(0);
                let secret = config.tickets.get(&Ticket::Secret).copied().unwrap_or(0);
                if double > 0 || secret > 0 {
                    return Err(GameError::SeekerHoldsRestrictedTicket);
                }
            }
        }

        Ok(Self {
            players: configs.iter().map(Player::from_config).collect(),
            schedule,
            board,
            current_round: NOT_STARTED,
            current_player: 0,
            game_over: false,
            spectators: SpectatorBus::new(),
        })
    }

    // ==================== Queries ====================

    /// Player colours in turn order (evader first)
    pub fn players(&self) -> Vec<Colour> {
        self.players.iter().map(|p| p.colour).collect()
    }

    /// A player's visible location. For the evader this is the last-known
    /// location until the game ends; seekers are always visible.
    pub fn player_location(&self, colour: Colour) -> Result<NodeId, GameError> {
        let player = self.find_player(colour)?;
        if player.is_evader() && !self.is_over() {
            Ok(player.last_seen)
        } else {
            Ok(player.location)
        }
    }

    /// A player's ticket count for one kind
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Result<u32, GameError> {
        Ok(self.find_player(colour)?.tickets.count(ticket))
    }

    /// The current round number (0 before the evader's first move)
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Whether the round about to start reveals the evader
    pub fn is_reveal_round(&self) -> bool {
        self.reveal_at(self.current_round)
    }

    /// The fixed round schedule (`true` = reveal round)
    pub fn schedule(&self) -> &[bool] {
        &self.schedule
    }

    /// Colour of the player whose turn it is
    pub fn current_player(&self) -> Colour {
        self.players[self.current_player].colour
    }

    /// The transport graph (read-only)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registered spectators, in registration order
    pub fn spectators(&self) -> &[SharedSpectator] {
        self.spectators.observers()
    }

    /// Legal moves for a colour, computed fresh from current state
    pub fn legal_moves(&self, colour: Colour) -> Result<HashSet<Move>, GameError> {
        Ok(self.legal_moves_for(self.find_player(colour)?))
    }

    // ==================== Commands ====================

    /// Register a spectator
    pub fn subscribe(&mut self, spectator: SharedSpectator) -> Result<(), GameError> {
        self.spectators.subscribe(spectator)
    }

    /// Remove a registered spectator
    pub fn unsubscribe(&mut self, spectator: &SharedSpectator) -> Result<(), GameError> {
        self.spectators.unsubscribe(spectator)
    }

    /// Start the current player's turn: compute their legal set and hand it
    /// out for an agent to answer via [`Game::accept_move`].
    ///
    /// Once the game is over this notifies spectators of the result and
    /// refuses; callers must not drive a finished game.
    pub fn begin_turn(&mut self) -> Result<TurnRequest, GameError> {
        if self.is_over() {
            let winners = self.winners();
            self.spectators.publish(&GameEvent::GameOver { winners });
            return Err(GameError::GameOver);
        }
        let player = &self.players[self.current_player];
        Ok(TurnRequest {
            colour: player.colour,
            location: player.location,
            moves: self.legal_moves_for(player),
        })
    }

    /// Resolve one move for the current player.
    ///
    /// The move must belong to the legal set as computed right now; on
    /// acceptance the move is resolved, spectators are notified in causal
    /// order, and the turn advances. Returns the events emitted, in order.
    pub fn accept_move(&mut self, mv: Move) -> Result<Vec<GameEvent>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let legal = self.legal_moves_for(&self.players[self.current_player]);
        if !legal.contains(&mv) {
            return Err(GameError::IllegalMove);
        }

        let mut events = Vec::new();
        match mv {
            Move::Pass(colour) => {
                // Guards against a stale set: pass is only ever legal alone
                if legal.len() != 1 {
                    return Err(GameError::InvalidPass);
                }
                self.emit(&mut events, GameEvent::MoveMade(Move::Pass(colour)));
            }
            Move::Single(leg) => self.resolve_single(leg, &mut events)?,
            Move::Double(double) => self.resolve_double(double, &mut events)?,
        }

        let last = self.players.len() - 1;
        if self.current_player == last {
            if self.rotation_boundary_over() {
                self.game_over = true;
                let winners = self.winners();
                self.emit(&mut events, GameEvent::GameOver { winners });
            } else {
                self.current_player = 0;
                self.emit(&mut events, GameEvent::RotationComplete);
            }
        } else if self.is_over() {
            self.game_over = true;
            let winners = self.winners();
            self.emit(&mut events, GameEvent::GameOver { winners });
        } else {
            self.current_player += 1;
        }
        Ok(events)
    }

    /// Drive one full rotation (every player moves once) against a set of
    /// decision agents, stopping early if the game ends.
    pub fn play_rotation(
        &mut self,
        agents: &mut HashMap<Colour, Box<dyn MoveAgent>>,
    ) -> Result<(), GameError> {
        for _ in 0..self.players.len() {
            if self.is_over() {
                break;
            }
            let request = self.begin_turn()?;
            let agent = agents
                .get_mut(&request.colour)
                .ok_or(GameError::UnknownColour)?;
            let chosen = agent
                .choose_move(request.location, &request.moves)
                .ok_or(GameError::IllegalMove)?;
            self.accept_move(chosen)?;
        }
        Ok(())
    }

    // ==================== Resolution ====================

    fn resolve_single(
        &mut self,
        leg: TicketMove,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let mover = self.current_player;
        let is_evader = self.players[mover].is_evader();
        self.apply_leg(mover, leg.destination, leg.ticket)?;

        if is_evader {
            let publicized = if self.is_reveal_round() {
                self.players[0].last_seen = leg.destination;
                leg
            } else {
                TicketMove::new(leg.colour, leg.ticket, self.players[0].last_seen)
            };
            self.current_round += 1;
            self.emit(events, GameEvent::RoundStarted(self.current_round));
            self.emit(events, GameEvent::MoveMade(Move::Single(publicized)));
        } else {
            self.emit(events, GameEvent::MoveMade(Move::Single(leg)));
        }
        Ok(())
    }

    fn resolve_double(
        &mut self,
        mv: DoubleMove,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        // Publicize both legs before mutating anything: the reveal flag can
        // flip between the two legs of one double.
        let first = if self.reveal_at(self.current_round) {
            self.players[0].last_seen = mv.first.destination;
            mv.first
        } else {
            TicketMove::new(mv.colour, mv.first.ticket, self.players[0].last_seen)
        };
        let second = if self.reveal_at(self.current_round + 1) {
            self.players[0].last_seen = mv.second.destination;
            mv.second
        } else {
            TicketMove::new(mv.colour, mv.second.ticket, self.players[0].last_seen)
        };
        self.emit(
            events,
            GameEvent::MoveMade(Move::Double(DoubleMove::new(mv.colour, first, second))),
        );

        self.players[0].tickets.take(Ticket::Double)?;
        self.apply_leg(0, mv.first.destination, mv.first.ticket)?;
        self.apply_leg(0, mv.second.destination, mv.second.ticket)?;

        self.current_round += 1;
        self.emit(events, GameEvent::RoundStarted(self.current_round));
        self.emit(events, GameEvent::MoveMade(Move::Single(first)));
        self.current_round += 1;
        self.emit(events, GameEvent::RoundStarted(self.current_round));
        self.emit(events, GameEvent::MoveMade(Move::Single(second)));
        Ok(())
    }

    /// Move a player and settle the ticket cost. A seeker's spent ticket is
    /// granted to the evader in the same step, never left in between.
    fn apply_leg(
        &mut self,
        mover: usize,
        destination: NodeId,
        ticket: Ticket,
    ) -> Result<(), GameError> {
        let player = &mut self.players[mover];
        player.tickets.take(ticket)?;
        player.location = destination;

        if self.players[mover].is_seeker() {
            self.players[0].tickets.grant(ticket);
        }
        Ok(())
    }

    fn emit(&self, events: &mut Vec<GameEvent>, event: GameEvent) {
        self.spectators.publish(&event);
        events.push(event);
    }

    // ==================== Internals ====================

    pub(crate) fn legal_moves_for(&self, player: &Player) -> HashSet<Move> {
        // Occupancy snapshot: seekers other than the mover. The evader's
        // location blocks nobody.
        let occupied: HashSet<NodeId> = self
            .players
            .iter()
            .skip(1)
            .filter(|p| p.colour != player.colour)
            .map(|p| p.location)
            .collect();
        let allow_double = player.is_evader() && self.current_round + 1 < self.schedule.len();
        catalog::legal_moves(&self.board, player, &occupied, allow_double)
    }

    pub(crate) fn reveal_at(&self, round: usize) -> bool {
        self.schedule.get(round).copied().unwrap_or(false)
    }

    pub(crate) fn evader(&self) -> &Player {
        &self.players[0]
    }

    pub(crate) fn seekers(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().skip(1)
    }

    fn find_player(&self, colour: Colour) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|p| p.colour == colour)
            .ok_or(GameError::UnknownColour)
    }
}
