// Root Search
//
// Scores every legal root move with a minimizing minimax of depth - 1 and
// keeps the highest. Moves are tried in generation order and only a strictly
// better score replaces the current best, so among equal scores the first
// generated move wins and the search is deterministic.

use std::time::Instant;

use super::minimax::{minimax, Played, SearchStats};
use crate::game_repr::Rules;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl<M> SearchResult<M> {
    fn empty(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes_searched: 0,
            time_ms: 0,
        }
    }
}

/// Finds the best move for the side to move in `pos`.
///
/// `depth` counts plies including the root move; a depth of 0 is searched as
/// 1. Returns no move when the position has no legal moves. `pos` is left as
/// it was found.
pub fn best_move<R: Rules>(pos: &mut R, depth: u8) -> SearchResult<R::Move> {
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut result = SearchResult::empty(depth);

    let moves = pos.legal_moves();
    if moves.is_empty() {
        log::debug!("search: no legal moves at root");
        return result;
    }

    let mut stats = SearchStats::default();
    let mut best_score = i32::MIN;

    for mv in moves {
        let score = {
            let mut child = Played::new(&mut *pos, mv);
            minimax(&mut *child, depth - 1, false, &mut stats)
        };

        if result.best_move.is_none() || score > best_score {
            best_score = score;
            result.best_move = Some(mv);
        }
    }

    result.score = best_score;
    result.nodes_searched = stats.nodes;
    result.time_ms = start_time.elapsed().as_millis() as u64;

    log::debug!(
        "search: depth {} best {:?} score {} nodes {} in {}ms",
        result.depth,
        result.best_move,
        result.score,
        result.nodes_searched,
        result.time_ms
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::test_tree::TreeGame;
    use crate::game_repr::{parse_square, Move, Position};

    fn sq(name: &str) -> chess::Square {
        parse_square(name).unwrap()
    }

    #[test]
    fn test_deterministic() {
        let mut pos = Position::default();
        let first = best_move(&mut pos, 2);
        let second = best_move(&mut pos, 2);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes_searched, second.nodes_searched);
    }

    #[test]
    fn test_position_unchanged() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut pos = Position::from_fen(fen).unwrap();
        let result = best_move(&mut pos, 2);
        assert!(result.best_move.is_some());
        assert_eq!(pos.to_fen(), fen);
        assert_eq!(pos.ply_count(), 0);
    }

    #[test]
    fn test_result_is_legal() {
        let mut pos = Position::default();
        let result = best_move(&mut pos, 3);
        let mv = result.best_move.expect("a move from the start position");
        assert!(pos.all_legal_moves().contains(&mv));
        assert_eq!(result.depth, 3);
        assert!(result.nodes_searched > 20);
    }

    #[test]
    fn test_only_legal_move_is_found() {
        // White king in check from b2 must take the rook
        let mut pos = Position::from_fen("7k/8/8/8/8/8/1r6/K7 w - - 0 1").unwrap();
        assert_eq!(pos.legal_move_count(), 1);
        let result = best_move(&mut pos, 3);
        assert_eq!(result.best_move, Some(Move::new(sq("a1"), sq("b2"), None)));
    }

    #[test]
    fn test_no_move_when_mated() {
        let mut pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let result = best_move(&mut pos, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes_searched, 0);
    }

    #[test]
    fn test_depth_zero_searches_one_ply() {
        let mut game = TreeGame::one_level(&[4, 7, 1]);
        let result = best_move(&mut game, 0);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_ties_keep_first_move() {
        let mut game = TreeGame::one_level(&[4, 7, 7, 2]);
        assert_eq!(best_move(&mut game, 1).best_move, Some(1));

        let mut flat = TreeGame::one_level(&[5, 5, 5]);
        assert_eq!(best_move(&mut flat, 1).best_move, Some(0));
    }

    #[test]
    fn test_opponent_minimizes() {
        // Child 0 guarantees 3, child 1 can be held to 2 despite its 9
        let mut game = TreeGame::two_level([[3, 5], [2, 9]]);
        let result = best_move(&mut game, 2);
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 3);
        assert_eq!(game.depth(), 0);
    }
}
