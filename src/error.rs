//! Error types for the game controller and rules adapter.
//!
//! Every variant is recoverable: a rejected command leaves the game exactly
//! as it was, and an exhausted search only means the game is already over.

use crate::game_repr::Color;

/// Errors that can occur while driving a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move failed validation against the current position
    #[error("Illegal move: {spec}")]
    IllegalMove { spec: String },

    /// Move text could not be parsed at all
    #[error("Invalid move text: {text}")]
    InvalidMoveSpec { text: String },

    /// Undo requested with an empty history
    #[error("No move to undo")]
    NoMoveToUndo,

    /// Redo requested with an empty redo stack
    #[error("No move to redo")]
    NoMoveToRedo,

    /// The search found no legal move (position is terminal)
    #[error("Search found no legal move")]
    SearchExhausted,

    /// A human tried to move for the side the computer controls
    #[error("It is not {side}'s turn to move by hand")]
    NotYourTurn { side: Color },

    /// The AI was asked to move while it is not its turn
    #[error("It is not the computer's turn")]
    NotAiTurn,

    /// Command rejected because the game has already finished
    #[error("The game is over")]
    GameOver,

    /// FEN string rejected by the rules engine
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
