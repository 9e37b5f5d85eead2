// Fixed-depth Minimax Search
//
// Plain minimax: the maximizing and minimizing plies alternate, leaves are
// scored by mobility, and every node is visited. There is no pruning, no
// move ordering and no caching, so the cost is branching^depth.
//
// Moves are played on the caller's position and taken back by a guard, so
// the position is restored on every exit path, unwinding included.

use std::ops::{Deref, DerefMut};

use super::evaluation::evaluate;
use crate::game_repr::Rules;

/// Counts visited nodes during one search
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub nodes: u64,
}

/// A move played on a borrowed position; dropping the guard takes it back.
pub(crate) struct Played<'a, R: Rules> {
    pos: &'a mut R,
}

impl<'a, R: Rules> Played<'a, R> {
    pub(crate) fn new(pos: &'a mut R, mv: R::Move) -> Self {
        pos.play(mv);
        Self { pos }
    }
}

impl<R: Rules> Deref for Played<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for Played<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for Played<'_, R> {
    fn drop(&mut self) {
        self.pos.take_back();
    }
}

/// Minimax value of `pos` searched `depth` plies deep.
///
/// Positions that are over, or have no legal moves, are leaves regardless
/// of the remaining depth.
pub fn minimax<R: Rules>(pos: &mut R, depth: u8, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return evaluate(pos);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let value = {
            let mut child = Played::new(&mut *pos, mv);
            minimax(&mut *child, depth - 1, !maximizing, stats)
        };
        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    best
}
