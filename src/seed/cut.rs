//! Randomized edge cutting: turns a component into the requested number of
//! connected pieces.

use super::allocate::allocate_among;
use super::error::SeedError;
use crate::graph::AttributeGraph;
use crate::partition::{Partition, Region};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Builds a starting partition of `graph` into exactly `n_regions`
/// contiguous regions.
///
/// Region counts are first distributed across the connected components via
/// [`super::distribute_regions`]; each component is then cloned and random
/// adjacencies are cut on the copy until it falls apart into its target
/// number of pieces. Cutting a bridge strictly increases the piece count
/// while cutting a cycle edge only shrinks the remaining pool, so the loop
/// converges; an iteration budget guards it regardless.
///
/// The caller's graph is never mutated. Region numbering follows component
/// discovery order and is otherwise arbitrary.
///
/// # Errors
///
/// - `EmptyGraph`, `TooFewRegions`, `TooManyRegions` as raised by the
///   allocation step
/// - `CutBudgetExhausted` if a component fails to reach its target piece
///   count within `adjacency_count^2 + 1` cuts
pub fn initial_partition<A, R>(
    graph: &AttributeGraph<A>,
    n_regions: usize,
    rng: &mut R,
) -> Result<Partition<A>, SeedError>
where
    A: Clone + Eq + Hash + Debug,
    R: Rng,
{
    if graph.is_empty() {
        return Err(SeedError::EmptyGraph);
    }
    let components = graph.components();
    let counts = allocate_among(n_regions, &components, rng)?;

    let mut regions: Vec<Region<A>> = Vec::with_capacity(n_regions);
    for (component, &target) in components.iter().zip(&counts) {
        let mut working = graph.induced_subgraph(&component.areas);
        let budget = working.adjacency_count().pow(2) + 1;
        let mut cuts = 0_usize;
        while working.connected_piece_count() < target {
            cuts += 1;
            if cuts > budget {
                return Err(SeedError::CutBudgetExhausted {
                    component: component.index,
                });
            }
            match working.remove_random_adjacency(rng) {
                Some((a, b)) => {
                    trace!(event = "cut_adjacency", component = component.index, a = ?a, b = ?b)
                }
                // No adjacency left to cut but still short of the target;
                // cannot happen for counts produced by the allocator.
                None => {
                    return Err(SeedError::CutBudgetExhausted {
                        component: component.index,
                    })
                }
            }
        }
        let pieces = working.connected_pieces();
        debug!(
            event = "component_seeded",
            component = component.index,
            pieces = pieces.len(),
            cuts
        );
        regions.extend(
            pieces
                .into_iter()
                .map(|areas| areas.into_iter().collect::<Region<A>>()),
        );
    }
    Ok(Partition::from_regions(regions))
}
