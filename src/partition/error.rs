use thiserror::Error;

/// Errors raised by partition lookups, moves, and representation
/// conversions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Area {0} not found in any region")]
    AreaNotFound(String),

    #[error("Area {area} is not a member of region {region}")]
    NotAMember { area: String, region: usize },

    #[error("Region index {index} out of range for {len} regions")]
    RegionIndexOutOfRange { index: usize, len: usize },

    #[error("Region-IDs are not a dense range from 0: missing {missing:?}")]
    NonDenseRegionIds { missing: Vec<usize> },
}
