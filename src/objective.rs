//! Objective function: total within-region heterogeneity.

use crate::dissim::{Dissimilarity, Euclidean};
use crate::graph::AttributeGraph;
use crate::partition::{Partition, PartitionError};
use std::fmt::Debug;
use std::hash::Hash;

/// Sums `measure` over every unordered pair of distinct areas within each
/// region, then over all regions.
///
/// The pairwise form is quadratic in region size on purpose: large or
/// heterogeneous regions are penalized superlinearly, which is what pushes
/// a search toward balanced, homogeneous regions. Regions of size 0 or 1
/// contribute nothing.
///
/// # Errors
///
/// `AreaNotFound` if a partition member has no attribute in `graph`.
pub fn objective<A, D>(
    partition: &Partition<A>,
    graph: &AttributeGraph<A>,
    measure: &D,
) -> Result<f64, PartitionError>
where
    A: Clone + Eq + Hash + Debug,
    D: Dissimilarity,
{
    let mut total = 0.0;
    for region in partition.iter() {
        let attributes = region
            .iter()
            .map(|area| {
                graph
                    .attribute(area)
                    .ok_or_else(|| PartitionError::AreaNotFound(format!("{area:?}")))
            })
            .collect::<Result<Vec<&[f64]>, _>>()?;
        for i in 0..attributes.len() {
            for j in (i + 1)..attributes.len() {
                total += measure.dissimilarity(attributes[i], attributes[j]);
            }
        }
    }
    Ok(total)
}

/// [`objective`] with the default [`Euclidean`] measure.
pub fn objective_euclidean<A>(
    partition: &Partition<A>,
    graph: &AttributeGraph<A>,
) -> Result<f64, PartitionError>
where
    A: Clone + Eq + Hash + Debug,
{
    objective(partition, graph, &Euclidean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Region;
    use std::collections::HashMap;

    const GRID_ATTRIBUTES: [f64; 9] = [
        726.7, 623.6, 487.3, 200.4, 245.0, 481.0, 170.9, 225.9, 226.9,
    ];

    fn grid() -> AttributeGraph<usize> {
        AttributeGraph::grid(3, 3, &GRID_ATTRIBUTES).unwrap()
    }

    fn partition_from(mapping: &[(usize, usize)]) -> Partition<usize> {
        let mapping: HashMap<usize, usize> = mapping.iter().copied().collect();
        Partition::from_mapping(&mapping).unwrap()
    }

    #[test]
    fn singleton_regions_score_zero() {
        let graph = grid();
        let regions: Vec<Region<usize>> = (0..9).map(|a| Region::from([a])).collect();
        let partition = Partition::from_regions(regions);
        assert_eq!(objective_euclidean(&partition, &graph).unwrap(), 0.0);
    }

    #[test]
    fn identical_attributes_score_zero() {
        let graph = AttributeGraph::grid(2, 2, &[5.0; 4]).unwrap();
        let partition = Partition::from_regions(vec![Region::from([0, 1, 2, 3])]);
        assert_eq!(objective_euclidean(&partition, &graph).unwrap(), 0.0);
    }

    #[test]
    fn objective_is_non_negative_and_pairwise() {
        let graph = grid();
        let partition = Partition::from_regions(vec![Region::from([0, 1]), Region::from([2])]);
        let value = objective_euclidean(&partition, &graph).unwrap();
        // single pair (0, 1): |726.7 - 623.6|
        assert!((value - 103.1).abs() < 1e-9);
    }

    #[test]
    fn natural_split_beats_checkerboard_style_split() {
        let graph = grid();
        // top row of high values vs. the low-valued rest
        let natural = partition_from(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 1),
            (6, 1),
            (7, 1),
            (8, 1),
        ]);
        // alternating cells mix high and low values in both regions
        let checkerboard = partition_from(&[
            (0, 0),
            (1, 1),
            (2, 0),
            (3, 1),
            (4, 0),
            (5, 1),
            (6, 0),
            (7, 1),
            (8, 0),
        ]);
        let natural_score = objective_euclidean(&natural, &graph).unwrap();
        let checkerboard_score = objective_euclidean(&checkerboard, &graph).unwrap();
        assert!(natural_score >= 0.0);
        assert!(natural_score < checkerboard_score);
    }

    #[test]
    fn unknown_area_is_reported() {
        let graph = grid();
        let partition = Partition::from_regions(vec![Region::from([0, 42])]);
        assert_eq!(
            objective_euclidean(&partition, &graph),
            Err(PartitionError::AreaNotFound("42".to_string()))
        );
    }
}
