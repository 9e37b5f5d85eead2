use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    // Fool's mate is the quickest possible checkmate (2 moves)
    let mut pos = Position::default();
    let records = play(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(records.last().map(|r| r.san.as_str()), Some("Qh4#"));
    assert!(pos.is_checkmate(), "Should be checkmate (Fool's mate)");
    assert!(pos.all_legal_moves().is_empty(), "White should have no legal moves");
    assert_eq!(pos.side_to_move(), Color::White);
    assert!(pos.is_game_over());
    assert!(!pos.is_draw(), "Checkmate is not a draw");
}

#[test]
fn test_scholars_mate() {
    let mut pos = Position::default();
    play(&mut pos, &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]);

    assert!(pos.is_checkmate(), "Should be checkmate (Scholar's mate)");
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn test_back_rank_mate() {
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/r5K1 w - - 0 1");

    assert!(pos.is_in_check(), "King should be in check");
    assert!(pos.is_checkmate(), "Should be back rank mate");
}

#[test]
fn test_not_checkmate_can_block() {
    // Rook on e8 checks the king on e1, bishop on f3 can interpose on e2
    let pos = fen("4r2k/8/8/8/8/5B2/8/4K3 w - - 0 1");

    assert!(pos.is_in_check(), "King should be in check");
    assert!(!pos.is_checkmate(), "Not checkmate - can block with bishop");
    assert!(has_move(&pos.all_legal_moves(), "f3", "e2"));
}

#[test]
fn test_not_checkmate_can_capture() {
    // Queen on e1 checks the king on e4; the king can step off the file
    let pos = fen("7k/4R3/8/8/4K3/8/8/4q3 w - - 0 1");

    assert!(pos.is_in_check(), "King should be in check");
    assert!(!pos.is_checkmate(), "Not checkmate - king can step away");
}
