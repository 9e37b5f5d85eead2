//! Player trait for anything that can choose a move.
//!
//! The game controller does not care where a move comes from: a search
//! engine, a scripted replay or a random mover in a test all implement
//! [`Player`] and feed the same commit path as human input.

use crate::game_repr::{Move, Position};

/// Trait for entities that can provide chess moves.
///
/// # Position Borrowing
///
/// `get_move` receives the live position mutably so searches can play and
/// take back moves without cloning. Implementations must hand it back
/// exactly as they found it: every move played is taken back before
/// returning.
///
/// # Returns
///
/// - `Some(Move)`: a move legal in `position`
/// - `None`: the player has nothing to play (the game is over, or it
///   gives up)
pub trait Player {
    /// Request the next move for the side to move in `position`.
    fn get_move(&mut self, position: &mut Position) -> Option<Move>;

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
