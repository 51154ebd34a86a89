//! Connected-component enumeration over the current adjacency set.
//!
//! Components are identified by a dense integer index rather than by the
//! component subgraph itself, so per-component data can live in plain
//! `Vec`s keyed by that index.

use super::attribute::AttributeGraph;
use petgraph::stable_graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// One connected component of an [`AttributeGraph`], identified by a dense
/// index assigned in discovery order.
#[derive(Debug, Clone)]
pub struct Component<A> {
    pub index: usize,
    pub areas: Vec<A>,
}

impl<A> Component<A> {
    /// Number of areas in the component.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl<A> AttributeGraph<A>
where
    A: Clone + Eq + Hash + Debug,
{
    /// Enumerates the connected components of the current adjacency set.
    pub fn components(&self) -> Vec<Component<A>> {
        self.connected_pieces()
            .into_iter()
            .enumerate()
            .map(|(index, areas)| Component { index, areas })
            .collect()
    }

    /// Number of connected pieces under the current adjacency set.
    ///
    /// On a working copy being edge-cut this counts the pieces produced so
    /// far; on the canonical graph it equals the component count.
    pub fn connected_piece_count(&self) -> usize {
        self.piece_node_sets().len()
    }

    /// The areas of each connected piece, in discovery order.
    pub fn connected_pieces(&self) -> Vec<Vec<A>> {
        self.piece_node_sets()
            .into_iter()
            .map(|nodes| nodes.into_iter().map(|n| self.area_of(n).clone()).collect())
            .collect()
    }

    /// Breadth-first sweep collecting the node set of every piece.
    fn piece_node_sets(&self) -> Vec<Vec<NodeIndex>> {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut pieces = Vec::new();
        for start in self.node_indices() {
            if visited.contains(&start) {
                continue;
            }
            let mut piece = Vec::new();
            let mut queue = VecDeque::from([start]);
            visited.insert(start);
            while let Some(node) = queue.pop_front() {
                piece.push(node);
                for next in self.node_neighbors(node) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
            pieces.push(piece);
        }
        pieces
    }
}
