//! MinimaxPlayer - the built-in opponent
//!
//! Wraps the fixed-depth [`best_move`](super::search::best_move) search in
//! the [`Player`] interface so the controller can ask it for a move the same
//! way it would ask any other player.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2, the root move and the opponent's reply
//! - **Medium**: Depth 3
//! - **Hard**: Depth 4 (the default), the root move plus a three-ply reply search
//! - **Expert**: Depth 5, noticeably slower in open positions
//!
//! # Examples
//!
//! ```
//! use timed_chess::agent::{Difficulty, MinimaxPlayer, Player};
//! use timed_chess::game_repr::Position;
//!
//! let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
//! let mut position = Position::default();
//! assert!(ai.get_move(&mut position).is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use super::search::{best_move, SearchResult};
use crate::agent::player::Player;
use crate::game_repr::{Move, Position};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    Expert,
}

impl Difficulty {
    /// Search depth in plies, root move included
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// AI player that searches a fixed number of plies with plain minimax.
///
/// Deterministic: the same position at the same depth always yields the
/// same move.
pub struct MinimaxPlayer {
    depth: u8,
    name: String,
    last_result: Option<SearchResult<Move>>,
}

impl MinimaxPlayer {
    pub fn new(depth: u8, name: String) -> Self {
        Self {
            depth,
            name,
            last_result: None,
        }
    }

    /// The player name is generated as "AI ({difficulty})".
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.max_depth(), format!("AI ({})", difficulty.name()))
    }

    /// A player searching `depth` plies, named after the depth.
    pub fn with_depth(depth: u8) -> Self {
        Self::new(depth, format!("AI (depth {})", depth.max(1)))
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Statistics of the most recent search, if any
    pub fn last_result(&self) -> Option<&SearchResult<Move>> {
        self.last_result.as_ref()
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::default())
    }
}

impl Player for MinimaxPlayer {
    /// Blocking: cost grows with the branching factor to the power of the
    /// depth.
    fn get_move(&mut self, position: &mut Position) -> Option<Move> {
        let result = best_move(position, self.depth);
        log::debug!(
            "[{}] depth {}, {} nodes, score {}",
            self.name,
            result.depth,
            result.nodes_searched,
            result.score
        );
        let mv = result.best_move;
        self.last_result = Some(result);
        mv
    }

    fn name(&self) -> &str {
        &self.name
    }
}
