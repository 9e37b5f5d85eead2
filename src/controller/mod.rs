//! Game state controller.
//!
//! [`GameController`] owns one game and is the only thing that changes it.
//! Clocks and status live in their own modules; timers that drive them are
//! the orchestrator's business.

pub mod clock;
#[allow(clippy::module_inception)]
mod controller;
pub mod status;

pub use clock::{format_clock, Clocks};
pub use controller::{AiReply, AiRequest, GameController};
pub use status::Status;

use crate::config::Mode;
use crate::game_repr::Color;

/// What a front-end needs to draw the game, copied out of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Canonical FEN of the current position
    pub board_code: String,
    pub status: Status,
    pub status_text: String,
    pub white_secs: u32,
    pub black_secs: u32,
    /// SAN of every applied move, oldest first
    pub history: Vec<String>,
    pub side_to_move: Color,
    pub mode: Mode,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl GameController {
    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.status();
        GameSnapshot {
            board_code: self.board_code(),
            status_text: status.to_string(),
            status,
            white_secs: self.clocks().white(),
            black_secs: self.clocks().black(),
            history: self.san_history(),
            side_to_move: self.side_to_move(),
            mode: self.mode(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
