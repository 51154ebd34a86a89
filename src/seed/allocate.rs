//! Distribution of a target region count across connected components.

use super::error::SeedError;
use crate::graph::{AttributeGraph, Component};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Distributes `n_regions` across the connected components of `graph`,
/// returning one count per component index (same order as
/// [`AttributeGraph::components`]).
///
/// Every component receives at least one region; the remainder is drawn
/// uniformly from a pool holding `size - 1` tickets per component, so larger
/// components are proportionally more likely to be split further and a
/// single-area component can never receive a second region.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no areas
/// - `TooFewRegions` if `n_regions` is below the component count
/// - `TooManyRegions` if `n_regions` exceeds the total area count
pub fn distribute_regions<A, R>(
    n_regions: usize,
    graph: &AttributeGraph<A>,
    rng: &mut R,
) -> Result<Vec<usize>, SeedError>
where
    A: Clone + Eq + Hash + Debug,
    R: Rng,
{
    if graph.is_empty() {
        return Err(SeedError::EmptyGraph);
    }
    let components = graph.components();
    allocate_among(n_regions, &components, rng)
}

/// Core allocation over an already enumerated component list.
pub(crate) fn allocate_among<A, R>(
    n_regions: usize,
    components: &[Component<A>],
    rng: &mut R,
) -> Result<Vec<usize>, SeedError>
where
    R: Rng,
{
    if components.is_empty() {
        return Err(SeedError::EmptyGraph);
    }
    if n_regions < components.len() {
        return Err(SeedError::TooFewRegions {
            requested: n_regions,
            components: components.len(),
        });
    }

    // One region per component up front; the ticket pool carries the split
    // capacity that remains.
    let mut counts = vec![1_usize; components.len()];
    let mut pool: Vec<usize> = components
        .iter()
        .flat_map(|comp| std::iter::repeat(comp.index).take(comp.len().saturating_sub(1)))
        .collect();

    let mut remaining = n_regions - components.len();
    while remaining > 0 {
        if pool.is_empty() {
            let areas: usize = components.iter().map(Component::len).sum();
            return Err(SeedError::TooManyRegions {
                requested: n_regions,
                areas,
            });
        }
        let picked = pool.swap_remove(rng.gen_range(0..pool.len()));
        counts[picked] += 1;
        remaining -= 1;
        debug!(event = "allocate_region", component = picked, count = counts[picked]);
    }
    Ok(counts)
}
