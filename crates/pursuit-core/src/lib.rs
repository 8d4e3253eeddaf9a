//! Pursuit - rules engine for a hidden-movement pursuit board game
//!
//! One concealed evader is chased by several seekers across a shared
//! transport graph. Seekers always move in the open; the evader's position
//! is published only on scheduled reveal rounds, and otherwise every
//! announcement of an evader move is redacted to the last-known location.
//!
//! The crate is the turn-resolution core only: legal-move enumeration,
//! move acceptance and resolution, round and rotation progression, win
//! evaluation, and ordered spectator notification. Map construction,
//! agent strategy quality, and any transport or UI layers live with the
//! host.
//!
//! # Modules
//!
//! - [`board`]: the transport graph adapter
//! - [`tickets`]: ticket kinds and per-player ledgers
//! - [`player`]: colours, configuration, player records
//! - [`moves`]: move values submitted by agents
//! - [`spectator`]: game events and the spectator bus
//! - [`agent`]: the decision-agent trait and a random baseline
//! - [`game`]: construction, the turn engine, and the query facade

pub mod agent;
pub mod board;
mod catalog;
pub mod game;
pub mod moves;
pub mod player;
pub mod spectator;
pub mod tickets;
mod win;

// Re-export commonly used types
pub use agent::{MoveAgent, RandomAgent};
pub use board::{Board, BoardEdge, NodeId, Transport};
pub use game::{Game, GameError, TurnRequest, NOT_STARTED};
pub use moves::{DoubleMove, Move, TicketMove};
pub use player::{Colour, Player, PlayerConfig};
pub use spectator::{GameEvent, SharedSpectator, Spectator, SpectatorBus};
pub use tickets::{Ticket, TicketBook};
