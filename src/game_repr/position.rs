use std::str::FromStr;

use chess::{BitBoard, Board, BoardStatus, MoveGen, Piece as CPiece, Square, EMPTY};

use super::san::{from_san, to_san};
use super::*;
use crate::error::{GameError, GameResult};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 *
 * Legality and move generation come from the `chess` crate. This type adds
 * what a played game needs on top of a bare board: an undo stack, move
 * counters and repetition tracking.
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Positions with this many halfmoves since the last capture or pawn move
/// are drawn.
const FIFTY_MOVE_HALFMOVES: u32 = 100;

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Halfmoves since the last capture or pawn move
    halfmove_clock: u32,
    fullmove_number: u32,
    /// One entry per applied move, most recent last
    undo_stack: Vec<UndoInfo>,
    /// Zobrist hash of every position reached, the current one last
    hashes: Vec<u64>,
}

#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    mv: Move,
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_board(Board::default(), 0, 1)
    }
}

impl Position {
    fn from_board(board: Board, halfmove_clock: u32, fullmove_number: u32) -> Self {
        Self {
            board,
            halfmove_clock,
            fullmove_number,
            undo_stack: Vec::new(),
            hashes: vec![board.get_hash()],
        }
    }

    /// Parses a FEN string. The move counters are optional and default to
    /// "0 1".
    pub fn from_fen(fen_str: &str) -> GameResult<Position> {
        let invalid = |reason: String| GameError::InvalidFen {
            fen: fen_str.to_string(),
            reason,
        };

        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields".to_string()));
        }

        let board = Board::from_str(&parts[..4].join(" ")).map_err(|e| invalid(format!("{:?}", e)))?;

        let halfmove_clock = match parts.get(4) {
            Some(text) => text
                .parse::<u32>()
                .map_err(|e| invalid(format!("halfmove clock: {}", e)))?,
            None => 0,
        };
        let fullmove_number = match parts.get(5) {
            Some(text) => text
                .parse::<u32>()
                .map_err(|e| invalid(format!("fullmove number: {}", e)))?
                .max(1),
            None => 1,
        };

        Ok(Self::from_board(board, halfmove_clock, fullmove_number))
    }

    /// Canonical board code. Two positions with the same FEN render the same.
    pub fn to_fen(&self) -> String {
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let piece_type = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece {
            color: color.into(),
            piece_type: piece_type.into(),
        })
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can be taken back
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Generate legal moves into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    pub fn all_legal_moves_into(&self, moves: &mut MoveList) {
        moves.extend(MoveGen::new_legal(&self.board));
    }

    /// All legal moves of the side to move, in generation order
    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    pub fn legal_move_count(&self) -> usize {
        MoveGen::new_legal(&self.board).len()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.legal(mv)
    }

    /// Applies a move already known to be legal.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.board.piece_on(mv.get_source());
        let captured = self.board.piece_on(mv.get_dest());

        self.undo_stack.push(UndoInfo {
            mv,
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        if moved == Some(CPiece::Pawn) || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.board.side_to_move() == chess::Color::Black {
            self.fullmove_number += 1;
        }

        self.board = self.board.make_move_new(mv);
        self.hashes.push(self.board.get_hash());
    }

    /// Takes back the most recent move, returning it.
    pub fn unmake_move(&mut self) -> Option<Move> {
        let undo = self.undo_stack.pop()?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.hashes.pop();
        Some(undo.mv)
    }

    /// Fallible undo for callers that did not check the history first.
    pub fn undo(&mut self) -> GameResult<Move> {
        self.unmake_move().ok_or(GameError::NoMoveToUndo)
    }

    /// Finds the legal move a spec asks for, without applying it.
    pub fn resolve(&self, spec: &MoveSpec) -> Option<Move> {
        match spec {
            MoveSpec::Squares { from, to, promotion } => {
                let wanted = promotion.unwrap_or(Type::Queen);
                MoveGen::new_legal(&self.board).find(|mv| {
                    mv.get_source() == *from
                        && mv.get_dest() == *to
                        && mv
                            .get_promotion()
                            .map_or(promotion.is_none(), |p| Type::from(p) == wanted)
                })
            }
            MoveSpec::San(text) => from_san(&self.board, text),
        }
    }

    /// SAN of `mv` in the current position
    pub fn san(&self, mv: Move) -> String {
        to_san(&self.board, mv)
    }

    /// Resolves and plays a move, producing its history record. On
    /// rejection the position is untouched.
    pub fn apply(&mut self, spec: &MoveSpec) -> GameResult<MoveRecord> {
        let mv = self.resolve(spec).ok_or_else(|| GameError::IllegalMove {
            spec: spec.to_string(),
        })?;
        Ok(self.apply_legal(mv))
    }

    /// Plays a move known to be legal and records it.
    pub fn apply_legal(&mut self, mv: Move) -> MoveRecord {
        let record = MoveRecord {
            mv,
            san: self.san(mv),
            color: self.side_to_move(),
        };
        self.make_move(mv);
        record
    }

    pub fn is_in_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Neither side can possibly mate: bare kings, a single minor piece,
    /// or only bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = *board.pieces(CPiece::Pawn) | *board.pieces(CPiece::Rook) | *board.pieces(CPiece::Queen);
        if heavy != EMPTY {
            return false;
        }

        let knights = *board.pieces(CPiece::Knight);
        let bishops = *board.pieces(CPiece::Bishop);
        let minors = (knights | bishops).popcnt();
        if minors <= 1 {
            return true;
        }
        if knights != EMPTY {
            return false;
        }
        same_square_colour(bishops)
    }

    /// Current position occurred at least three times since the last
    /// irreversible move.
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(&current) = self.hashes.last() else {
            return false;
        };
        let window = (self.halfmove_clock as usize + 1).min(self.hashes.len());
        self.hashes[self.hashes.len() - window..]
            .iter()
            .filter(|&&h| h == current)
            .count()
            >= 3
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_checkmate() {
            return None;
        }
        if self.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Counts leaf nodes of the legal move tree using make/unmake.
    pub fn perft(&self, depth: u8) -> u64 {
        let mut pos = self.clone();
        pos.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self.legal_move_count() as u64;
        }
        let mut nodes = 0;
        for mv in self.all_legal_moves() {
            self.make_move(mv);
            nodes += self.perft_inner(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}

fn same_square_colour(pieces: BitBoard) -> bool {
    let mut colours = pieces.map(|sq| (sq.get_rank().to_index() + sq.get_file().to_index()) % 2);
    match colours.next() {
        Some(first) => colours.all(|c| c == first),
        None => true,
    }
}
