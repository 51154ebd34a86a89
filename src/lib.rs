//! regio - contiguity-constrained regionalization primitives
//!
//! Building blocks for solvers of the p-regions problem: partition the areas
//! of a contiguity graph into exactly `p` connected regions while minimizing
//! within-region attribute heterogeneity.
//!
//! The crate provides the construction and evaluation engine only; search
//! strategies (exact solvers, annealing, tabu) live in the calling code and
//! compose these primitives:
//!
//! - [`graph::AttributeGraph`] - areas, adjacency, and per-area attributes
//! - [`seed::initial_partition`] - randomized contiguous starting partitions
//! - [`objective::objective`] - total within-region heterogeneity
//! - [`partition::Partition::make_move`] - the single-area relocation step
//! - [`boundary::regionalized_components`] - contiguity verification after
//!   moves
//!
//! All stochastic operations take a caller-supplied [`rand::Rng`], so a
//! seeded generator makes whole runs reproducible.

pub mod boundary;
pub mod dissim;
pub mod graph;
pub mod objective;
pub mod partition;
pub mod seed;

pub use boundary::{regionalized_components, RegionalizedComponents};
pub use dissim::{Dissimilarity, Euclidean};
pub use graph::{AttributeGraph, Component, GraphError};
pub use objective::{objective, objective_euclidean};
pub use partition::{Partition, PartitionError, Region};
pub use seed::{distribute_regions, initial_partition, SeedError};
