use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chess::Color> for Color {
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}

impl Type {
    /// Parses a promotion letter (either case). Kings and pawns are not
    /// promotion targets.
    pub fn from_promotion_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            _ => None,
        }
    }

    /// Uppercase SAN letter; pawns have none.
    pub fn san_letter(&self) -> Option<char> {
        match self {
            Type::King => Some('K'),
            Type::Queen => Some('Q'),
            Type::Rook => Some('R'),
            Type::Bishop => Some('B'),
            Type::Knight => Some('N'),
            Type::Pawn => None,
        }
    }
}

impl From<chess::Piece> for Type {
    fn from(piece: chess::Piece) -> Self {
        match piece {
            chess::Piece::King => Type::King,
            chess::Piece::Queen => Type::Queen,
            chess::Piece::Rook => Type::Rook,
            chess::Piece::Bishop => Type::Bishop,
            chess::Piece::Knight => Type::Knight,
            chess::Piece::Pawn => Type::Pawn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    /// FEN letter: uppercase for White, lowercase for Black
    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
