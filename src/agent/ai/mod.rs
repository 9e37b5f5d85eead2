// AI Agent - fixed-depth minimax
//
// The opponent looks a fixed number of plies ahead, assumes the other side
// replies to minimize, and scores leaves by mobility.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Generic over the rules engine through the `Rules` trait
// - Positions are restored after every search, even on panic

mod evaluation;
mod minimax;
mod minimax_player;
mod search;

#[cfg(test)]
pub(crate) mod test_tree;

pub use evaluation::evaluate;
pub use minimax::{minimax, SearchStats};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use search::{best_move, SearchResult};
