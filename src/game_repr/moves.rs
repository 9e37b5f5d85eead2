use std::fmt;
use std::str::FromStr;

use chess::{ChessMove, File, Rank, Square};
use smallvec::SmallVec;

use super::{Color, Type};
use crate::error::GameError;

/// Concrete legal move as produced by the rules engine.
pub type Move = ChessMove;

/// Legal moves of one position. 64 inline slots cover almost every
/// position without touching the heap.
pub type MoveList = SmallVec<[Move; 64]>;

/// Parses a square in algebraic form ("e4").
pub fn parse_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let file = File::from_index(file as usize - 'a' as usize);
    let rank = Rank::from_index(rank as usize - '1' as usize);
    Some(Square::make_square(rank, file))
}

/// A move as requested by a caller, before the rules engine resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSpec {
    /// Source/target pair, as forwarded by drag and drop. A missing
    /// promotion piece on a promoting pawn move means a queen.
    Squares {
        from: Square,
        to: Square,
        promotion: Option<Type>,
    },
    /// Standard algebraic notation ("Nf3", "exd5", "O-O", "e8=Q+")
    San(String),
}

impl MoveSpec {
    pub fn squares(from: Square, to: Square) -> Self {
        MoveSpec::Squares { from, to, promotion: None }
    }

    /// Builds a square pair from text such as ("e2", "e4").
    pub fn from_squares(from: &str, to: &str) -> Result<Self, GameError> {
        match (parse_square(from), parse_square(to)) {
            (Some(from), Some(to)) => Ok(MoveSpec::squares(from, to)),
            _ => Err(GameError::InvalidMoveSpec {
                text: format!("{}{}", from, to),
            }),
        }
    }

    pub fn san(text: impl Into<String>) -> Self {
        MoveSpec::San(text.into())
    }
}

impl FromStr for MoveSpec {
    type Err = GameError;

    /// Accepts coordinate notation ("e2e4", "e7e8q") first, then SAN.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let invalid = || GameError::InvalidMoveSpec { text: text.to_string() };

        if text.is_ascii() && (text.len() == 4 || text.len() == 5) {
            if let (Some(from), Some(to)) = (parse_square(&text[0..2]), parse_square(&text[2..4])) {
                let promotion = match text.chars().nth(4) {
                    Some(c) => Some(Type::from_promotion_char(c).ok_or_else(invalid)?),
                    None => None,
                };
                return Ok(MoveSpec::Squares { from, to, promotion });
            }
        }

        let is_san_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '=' | '+' | '#' | 'x');
        if text.is_empty() || !text.chars().all(is_san_char) {
            return Err(invalid());
        }
        Ok(MoveSpec::San(text.to_string()))
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSpec::Squares { from, to, promotion } => {
                write!(f, "{}{}", from, to)?;
                if let Some(piece) = promotion.and_then(|p| p.san_letter()) {
                    write!(f, "{}", piece.to_ascii_lowercase())?;
                }
                Ok(())
            }
            MoveSpec::San(text) => f.write_str(text),
        }
    }
}

/// A move that was accepted and applied, as kept in history and redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
    pub color: Color,
}

impl MoveRecord {
    pub fn from_square(&self) -> Square {
        self.mv.get_source()
    }

    pub fn to_square(&self) -> Square {
        self.mv.get_dest()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}
