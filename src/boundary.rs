//! Region-boundary extraction: component subgraphs with inter-region
//! adjacencies removed.
//!
//! This is how a solver verifies contiguity after a move: if the donating or
//! receiving region is no longer connected, its component's output subgraph
//! falls apart into more pieces than that component has regions.

use crate::graph::{AttributeGraph, Component};
use crate::partition::PartitionError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Lazy sequence of per-component subgraphs split along region boundaries.
///
/// One item per connected component of the source graph, in discovery
/// order; each item is a fresh working copy with every adjacency whose
/// endpoints carry different region-IDs removed. The sequence is finite and
/// non-restartable; materialize it for repeated inspection.
pub struct RegionalizedComponents<'a, A>
where
    A: Clone + Eq + Hash + Debug,
{
    graph: &'a AttributeGraph<A>,
    assignment: &'a HashMap<A, usize>,
    components: std::vec::IntoIter<Component<A>>,
}

impl<A> Iterator for RegionalizedComponents<'_, A>
where
    A: Clone + Eq + Hash + Debug,
{
    type Item = AttributeGraph<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let component = self.components.next()?;
        let mut working = self.graph.induced_subgraph(&component.areas);
        for (a, b) in working.adjacencies() {
            if self.assignment[&a] != self.assignment[&b] {
                // both endpoints exist in the working copy, removal cannot fail
                let _ = working.remove_adjacency(&a, &b);
            }
        }
        Some(working)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.components.size_hint()
    }
}

/// Splits `graph` along the region boundaries of `assignment`.
///
/// Works on per-component copies; the canonical graph is untouched.
///
/// # Errors
///
/// `AreaNotFound` if any area of the graph has no region-ID in
/// `assignment`, checked up front so the iterator itself cannot fail.
pub fn regionalized_components<'a, A>(
    graph: &'a AttributeGraph<A>,
    assignment: &'a HashMap<A, usize>,
) -> Result<RegionalizedComponents<'a, A>, PartitionError>
where
    A: Clone + Eq + Hash + Debug,
{
    for area in graph.areas() {
        if !assignment.contains_key(area) {
            return Err(PartitionError::AreaNotFound(format!("{area:?}")));
        }
    }
    Ok(RegionalizedComponents {
        graph,
        assignment,
        components: graph.components().into_iter(),
    })
}
