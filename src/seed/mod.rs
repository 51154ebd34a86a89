//! Initial-solution generation.
//!
//! Two stages: [`distribute_regions`] decides how many regions each
//! connected component must contribute, then [`initial_partition`] cuts
//! random adjacencies on per-component working copies until each component
//! falls apart into that many contiguous pieces.
//!
//! Both stages draw from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same starting partition run after run.

mod allocate;
mod cut;
mod error;

pub use allocate::distribute_regions;
pub use cut::initial_partition;
pub use error::SeedError;
