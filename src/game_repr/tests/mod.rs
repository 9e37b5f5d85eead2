use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parses a FEN that is known to be valid
pub fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("test FEN should parse")
}

/// Plays a sequence of coordinate or SAN moves, panicking on the first
/// illegal one
pub fn play(pos: &mut Position, moves: &[&str]) -> Vec<MoveRecord> {
    moves
        .iter()
        .map(|text| {
            let spec: MoveSpec = text.parse().expect("move text should parse");
            pos.apply(&spec)
                .unwrap_or_else(|e| panic!("{} should be legal: {}", text, e))
        })
        .collect()
}

pub fn sq(text: &str) -> Square {
    parse_square(text).expect("valid square")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves
        .iter()
        .any(|m| m.get_source() == sq(from) && m.get_dest() == sq(to))
}

// ==================== TEST MODULES ====================

mod checkmate;
mod perft;
