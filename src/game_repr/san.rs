//! Standard algebraic notation for the rules engine's moves.
//!
//! The `chess` crate only speaks coordinate moves, so SAN is rendered here
//! from the legal move list of the position the move is played in.

use chess::{Board, BoardStatus, MoveGen, Piece as CPiece, Square};

use super::{Move, Type};

/// Renders `mv` (legal in `board`) as SAN, including check and mate suffixes.
pub fn to_san(board: &Board, mv: Move) -> String {
    let from = mv.get_source();
    let to = mv.get_dest();
    let moving = board.piece_on(from).map(Type::from).unwrap_or(Type::Pawn);

    let mut san = String::with_capacity(8);

    let file_delta = (from.get_file().to_index() as i32 - to.get_file().to_index() as i32).abs();
    if moving == Type::King && file_delta == 2 {
        san.push_str(if to.get_file().to_index() > from.get_file().to_index() {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        let is_capture = board.piece_on(to).is_some() || (moving == Type::Pawn && file_delta != 0);

        match moving.san_letter() {
            None => {
                if is_capture {
                    san.push(file_char(from));
                }
            }
            Some(letter) => {
                san.push(letter);
                push_disambiguation(&mut san, board, mv, from);
            }
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&to.to_string());

        if let Some(promotion) = mv.get_promotion().map(Type::from).and_then(|p| p.san_letter()) {
            san.push('=');
            san.push(promotion);
        }
    }

    let after = board.make_move_new(mv);
    if after.status() == BoardStatus::Checkmate {
        san.push('#');
    } else if after.checkers().popcnt() > 0 {
        san.push('+');
    }
    san
}

/// Finds the legal move of `board` whose SAN matches `text`. Check, mate
/// and annotation suffixes are ignored on both sides.
pub fn from_san(board: &Board, text: &str) -> Option<Move> {
    let wanted = strip_suffixes(text.trim());
    // "0-0" is a common spelling of "O-O"
    let wanted = wanted.replace('0', "O");
    MoveGen::new_legal(board).find(|&mv| strip_suffixes(&to_san(board, mv)) == wanted)
}

fn strip_suffixes(text: &str) -> &str {
    text.trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'))
}

fn file_char(square: Square) -> char {
    (b'a' + square.get_file().to_index() as u8) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.get_rank().to_index() as u8) as char
}

/// Adds the file, rank, or both, when another piece of the same kind can
/// reach the same target square.
fn push_disambiguation(san: &mut String, board: &Board, mv: Move, from: Square) {
    let kind: Option<CPiece> = board.piece_on(from);
    let rivals: Vec<Square> = MoveGen::new_legal(board)
        .filter(|other| {
            other.get_dest() == mv.get_dest()
                && other.get_source() != from
                && board.piece_on(other.get_source()) == kind
        })
        .map(|other| other.get_source())
        .collect();

    if rivals.is_empty() {
        return;
    }

    let shares_file = rivals.iter().any(|sq| sq.get_file() == from.get_file());
    let shares_rank = rivals.iter().any(|sq| sq.get_rank() == from.get_rank());

    if !shares_file {
        san.push(file_char(from));
    } else if !shares_rank {
        san.push(rank_char(from));
    } else {
        san.push(file_char(from));
        san.push(rank_char(from));
    }
}
