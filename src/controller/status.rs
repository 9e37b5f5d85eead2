use std::fmt;

use crate::game_repr::{Color, DrawReason};

/// Where the game stands. Derived from the position (and the clocks, when
/// time forfeit is on) every time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress { to_move: Color },
    Checkmate { winner: Color },
    Draw(DrawReason),
    /// Only produced when the game is configured with time forfeit
    TimeForfeit { winner: Color },
}

impl Status {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Status::Checkmate { winner } | Status::TimeForfeit { winner } => Some(*winner),
            Status::InProgress { .. } | Status::Draw(_) => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress { to_move } => write!(f, "Turn: {}", to_move),
            Status::Checkmate { winner } => write!(f, "Game over! {} wins by checkmate.", winner),
            Status::Draw(_) => write!(f, "Game over! It's a draw."),
            Status::TimeForfeit { winner } => write!(f, "Game over! {} wins on time.", winner),
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::FiftyMoveRule => "fifty-move rule",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::InProgress { to_move: Color::White }.to_string(), "Turn: White");
        assert_eq!(Status::InProgress { to_move: Color::Black }.to_string(), "Turn: Black");
        assert_eq!(
            Status::Checkmate { winner: Color::Black }.to_string(),
            "Game over! Black wins by checkmate."
        );
        assert_eq!(Status::Draw(DrawReason::Stalemate).to_string(), "Game over! It's a draw.");
        assert_eq!(
            Status::Draw(DrawReason::ThreefoldRepetition).to_string(),
            "Game over! It's a draw."
        );
        assert_eq!(
            Status::TimeForfeit { winner: Color::White }.to_string(),
            "Game over! White wins on time."
        );
    }

    #[test]
    fn test_game_over_and_winner() {
        assert!(!Status::InProgress { to_move: Color::White }.is_game_over());
        assert!(Status::Draw(DrawReason::FiftyMoveRule).is_game_over());
        assert_eq!(Status::Checkmate { winner: Color::White }.winner(), Some(Color::White));
        assert_eq!(Status::Draw(DrawReason::InsufficientMaterial).winner(), None);
    }
}
