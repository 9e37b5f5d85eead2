//! Hand-built game trees with known minimax values.

use smallvec::SmallVec;

use crate::game_repr::Rules;

struct Node {
    /// Static score, reported as this node's mobility
    value: usize,
    children: Vec<usize>,
}

/// A game whose positions are the nodes of an explicit tree. A move is the
/// index of a child; leaves have no moves.
pub(crate) struct TreeGame {
    nodes: Vec<Node>,
    path: Vec<usize>,
    moves: Vec<usize>,
}

impl TreeGame {
    /// `nodes[i] = (value, children)`; node 0 is the root.
    pub(crate) fn new(nodes: Vec<(usize, Vec<usize>)>) -> Self {
        Self {
            nodes: nodes
                .into_iter()
                .map(|(value, children)| Node { value, children })
                .collect(),
            path: vec![0],
            moves: Vec::new(),
        }
    }

    /// Root with one child per row; each row lists that child's leaf values.
    /// Inner nodes score their number of children.
    pub(crate) fn two_level<const N: usize, const M: usize>(leaves: [[usize; M]; N]) -> Self {
        let mut nodes = vec![(N, (1..=N).collect::<Vec<_>>())];
        let first_leaf = 1 + N;
        for row in 0..N {
            let start = first_leaf + row * M;
            nodes.push((M, (start..start + M).collect()));
        }
        for row in leaves.iter() {
            for &value in row.iter() {
                nodes.push((value, Vec::new()));
            }
        }
        Self::new(nodes)
    }

    /// Root whose children are leaves with the given values
    pub(crate) fn one_level(values: &[usize]) -> Self {
        let mut nodes = vec![(values.len(), (1..=values.len()).collect::<Vec<_>>())];
        nodes.extend(values.iter().map(|&v| (v, Vec::new())));
        Self::new(nodes)
    }

    /// Number of moves currently played from the root
    pub(crate) fn depth(&self) -> usize {
        self.moves.len()
    }

    fn current(&self) -> &Node {
        &self.nodes[*self.path.last().unwrap_or(&0)]
    }
}

impl Rules for TreeGame {
    type Move = usize;

    fn legal_moves(&self) -> SmallVec<[usize; 64]> {
        (0..self.current().children.len()).collect()
    }

    fn play(&mut self, mv: usize) {
        let next = self.current().children[mv];
        self.path.push(next);
        self.moves.push(mv);
    }

    fn take_back(&mut self) -> Option<usize> {
        let mv = self.moves.pop()?;
        self.path.pop();
        Some(mv)
    }

    fn is_game_over(&self) -> bool {
        false
    }

    fn mobility(&self) -> usize {
        self.current().value
    }
}
