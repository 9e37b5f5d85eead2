mod moves;
mod piece;
mod position;
mod rules;
mod san;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
pub use san::{from_san, to_san};

// Squares come straight from the rules engine
pub use chess::Square;
