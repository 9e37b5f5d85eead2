//! Clock behaviour under the orchestrator's interval task, on tokio's
//! paused clock.

use std::time::Duration;

use timed_chess::game_repr::{parse_square, Color};
use timed_chess::{GameConfig, Orchestrator, Status};

#[tokio::test(start_paused = true)]
async fn test_clocks_never_increase_or_go_negative() {
    let mut orchestrator = Orchestrator::new(GameConfig::default().with_clock_secs(5)).unwrap();
    let mut last = orchestrator.snapshot();

    for (i, (from, to)) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")].iter().enumerate() {
        tokio::time::sleep(Duration::from_millis(1700 + 300 * i as u64)).await;
        let snap = orchestrator.snapshot();
        assert!(snap.white_secs <= last.white_secs);
        assert!(snap.black_secs <= last.black_secs);
        last = snap;
        assert!(orchestrator.on_user_move(parse_square(from).unwrap(), parse_square(to).unwrap()));
    }

    tokio::time::sleep(Duration::from_secs(20)).await;
    let snap = orchestrator.snapshot();
    assert_eq!(snap.black_secs, 0);
    assert!(snap.white_secs <= last.white_secs);
    // Running out of time does not end the game unless configured to
    assert_eq!(snap.status, Status::InProgress { to_move: Color::Black });
}

#[tokio::test(start_paused = true)]
async fn test_time_forfeit_stops_the_clock() {
    let config = GameConfig::default().with_clock_secs(3).with_time_forfeit(true);
    let orchestrator = Orchestrator::new(config).unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    let snap = orchestrator.snapshot();
    assert_eq!((snap.white_secs, snap.black_secs), (0, 3));
    assert_eq!(snap.status, Status::TimeForfeit { winner: Color::Black });
    assert_eq!(snap.status_text, "Game over! Black wins on time.");
}

#[tokio::test(start_paused = true)]
async fn test_custom_tick_period() {
    let config = GameConfig::default().with_tick(Duration::from_millis(100));
    let orchestrator = Orchestrator::new(config).unwrap();

    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(orchestrator.snapshot().white_secs, 290);
}
