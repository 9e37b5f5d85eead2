use super::*;

mod endgame;
mod kiwipete;
mod starting_position;

/// Perft through the rules engine's own generator, without our
/// make/unmake bookkeeping
fn reference_perft(board: chess::Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    chess::MoveGen::new_legal(&board)
        .map(|mv| reference_perft(board.make_move_new(mv), depth - 1))
        .sum()
}

#[test]
fn test_make_unmake_agrees_with_reference() {
    for code in [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        let pos = fen(code);
        assert_eq!(pos.perft(3), reference_perft(*pos.board(), 3), "{}", code);
        assert_eq!(pos.to_fen(), code, "perft must not leave moves behind");
    }
}
