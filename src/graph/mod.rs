//! Contiguity graph with per-area attributes.
//!
//! [`AttributeGraph`] is the canonical read-mostly structure a solver builds
//! once from its spatial data; the stochastic procedures in [`crate::seed`]
//! and the boundary extraction in [`crate::boundary`] clone it and cut
//! adjacencies on the copy.

mod attribute;
mod component;
mod error;

pub use attribute::AttributeGraph;
pub use component::Component;
pub use error::GraphError;
