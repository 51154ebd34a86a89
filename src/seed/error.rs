use thiserror::Error;

/// Errors raised while generating an initial solution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Cannot build a partition of an empty graph")]
    EmptyGraph,

    #[error("Requested {requested} regions but the graph has {components} connected components")]
    TooFewRegions { requested: usize, components: usize },

    #[error("Requested {requested} regions but the graph has only {areas} areas")]
    TooManyRegions { requested: usize, areas: usize },

    #[error("Edge cutting exceeded its iteration budget in component {component}")]
    CutBudgetExhausted { component: usize },
}
