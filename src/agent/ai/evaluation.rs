// Position evaluation function
//
// Mobility only: the score is the number of legal moves open to the side to
// move. No material, no piece-square tables.

use crate::game_repr::Rules;

pub fn evaluate<R: Rules>(pos: &R) -> i32 {
    i32::try_from(pos.mobility()).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Position;

    #[test]
    fn test_starting_position_mobility() {
        assert_eq!(evaluate(&Position::default()), 20);
    }

    #[test]
    fn test_mobility_is_for_side_to_move() {
        // After 1. e4 Black still has the usual 20 replies
        let mut pos = Position::default();
        pos.apply(&"e2e4".parse().unwrap()).unwrap();
        assert_eq!(evaluate(&pos), 20);

        // ...while White, to move after 1... e5, has 29
        pos.apply(&"e7e5".parse().unwrap()).unwrap();
        assert_eq!(evaluate(&pos), 29);
    }

    #[test]
    fn test_terminal_positions_score_zero() {
        let mate = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert_eq!(evaluate(&mate), 0);

        let stalemate = Position::from_fen("7k/8/8/8/8/8/2q5/K7 w - - 0 1").unwrap();
        assert_eq!(evaluate(&stalemate), 0);
    }

    #[test]
    fn test_agrees_with_reference_generator() {
        let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let reference = chess::MoveGen::new_legal(pos.board()).count() as i32;
        assert_eq!(evaluate(&pos), reference);
        assert_eq!(evaluate(&pos), 48);
    }
}
