//! Rules engine for a "Fox and Chickens" cross-board capture game.
//!
//! A 7×7 grid with its four 2×2 corner blocks removed holds two foxes and up
//! to twenty chickens. The player steps chickens up or sideways toward nine
//! target cells; after every player move the foxes answer with their
//! strongest capture chain, or a preference-guided step when no capture
//! exists. The game is won when all nine targets hold chickens and lost when
//! fewer than nine chickens remain.
//!
//! This crate is the pure in-process rules core. Rendering, pointer
//! hit-testing and window plumbing are the caller's job: feed resolved cell
//! coordinates into [`GameSession::handle_click`] and draw from
//! [`GameSession::snapshot`].

pub mod ai;
pub mod game;
pub mod storage;

pub use ai::FoxAction;
pub use game::board::{Board, Cell, GRID_DIM};
pub use game::rules::candidate_moves;
pub use game::session::{CellView, ClickOutcome, GameSession, GameView};
pub use game::types::{
    CellKind, CellStatus, Coord, Fox, GameOutcome, Jump, MovePreference, Phase, Piece, Statistics,
};
pub use storage::Settings;
