use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(fen(KIWIPETE).perft(1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(fen(KIWIPETE).perft(2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(fen(KIWIPETE).perft(3), 97862);
}
