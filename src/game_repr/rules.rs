//! The contract the search engine needs from a rules engine.
//!
//! `Position` is the production implementation. Keeping the search generic
//! over this trait lets it run against any game that can list, play and
//! take back moves, which is how its exact minimax values are tested.

use std::fmt::Debug;

use smallvec::SmallVec;

use super::{Move, MoveList, Position};

pub trait Rules {
    type Move: Copy + PartialEq + Debug;

    /// Legal moves of the side to move, in a fixed generation order
    fn legal_moves(&self) -> SmallVec<[Self::Move; 64]>;

    /// Plays a move returned by `legal_moves`
    fn play(&mut self, mv: Self::Move);

    /// Takes back the last played move; `None` if there is nothing to take back
    fn take_back(&mut self) -> Option<Self::Move>;

    /// Checkmate or draw
    fn is_game_over(&self) -> bool;

    /// Number of legal moves of the side to move
    fn mobility(&self) -> usize {
        self.legal_moves().len()
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> MoveList {
        self.all_legal_moves()
    }

    fn play(&mut self, mv: Move) {
        self.make_move(mv);
    }

    fn take_back(&mut self) -> Option<Move> {
        self.unmake_move()
    }

    fn is_game_over(&self) -> bool {
        Position::is_game_over(self)
    }

    fn mobility(&self) -> usize {
        self.legal_move_count()
    }
}
