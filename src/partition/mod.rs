//! Candidate solutions: ordered lists of disjoint area sets.
//!
//! A [`Partition`] is owned by the calling solver and mutated in place by
//! [`Partition::make_move`] during a search. The engine never checks
//! contiguity here; a solver verifies moves through
//! [`crate::boundary::regionalized_components`] before accepting them.

pub mod codec;
pub mod error;

pub use error::PartitionError;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// A set of areas forming one part of a partition.
///
/// The engine, not the set itself, maintains the invariant that a region
/// induces a connected subgraph of the contiguity graph.
pub type Region<A> = HashSet<A>;

/// An ordered sequence of pairwise-disjoint regions; the region-ID of a
/// region is its index in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<A: Eq + Hash> {
    regions: Vec<Region<A>>,
}

impl<A> Partition<A>
where
    A: Clone + Eq + Hash + Debug,
{
    /// Wraps a list of regions as-is; callers asserting disjointness can
    /// check [`Partition::is_disjoint`].
    pub fn from_regions(regions: Vec<Region<A>>) -> Self {
        Self { regions }
    }

    pub fn empty() -> Self {
        Self { regions: Vec::new() }
    }

    pub fn regions(&self) -> &[Region<A>] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region<A>> {
        self.regions.iter()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Total number of areas across all regions.
    pub fn area_count(&self) -> usize {
        self.regions.iter().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the region with the given region-ID.
    ///
    /// # Errors
    ///
    /// `RegionIndexOutOfRange` if `index >= region_count()`.
    pub fn region(&self, index: usize) -> Result<&Region<A>, PartitionError> {
        self.regions
            .get(index)
            .ok_or(PartitionError::RegionIndexOutOfRange {
                index,
                len: self.regions.len(),
            })
    }

    /// Returns the region-ID of the region containing `area`.
    ///
    /// # Errors
    ///
    /// `AreaNotFound` if no region contains the area.
    pub fn region_index_of(&self, area: &A) -> Result<usize, PartitionError> {
        self.regions
            .iter()
            .position(|region| region.contains(area))
            .ok_or_else(|| PartitionError::AreaNotFound(format!("{area:?}")))
    }

    /// Returns the region containing `area`.
    ///
    /// # Errors
    ///
    /// `AreaNotFound` if no region contains the area.
    pub fn region_containing(&self, area: &A) -> Result<&Region<A>, PartitionError> {
        self.regions
            .iter()
            .find(|region| region.contains(area))
            .ok_or_else(|| PartitionError::AreaNotFound(format!("{area:?}")))
    }

    /// True when no area appears in more than one region.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.regions
            .iter()
            .flatten()
            .all(|area| seen.insert(area))
    }

    /// Relocates `area` from region `from` to region `to`, mutating both
    /// sets in place.
    ///
    /// Contiguity of the donating and receiving regions is not checked; the
    /// caller verifies the move before accepting it into the working
    /// solution. Emits a `move` trace record for observability.
    ///
    /// # Errors
    ///
    /// - `RegionIndexOutOfRange` if `from` or `to` is not a valid region-ID
    /// - `NotAMember` if `area` is not currently in region `from`
    ///
    /// The partition is left untouched on any error.
    pub fn make_move(&mut self, area: A, from: usize, to: usize) -> Result<(), PartitionError> {
        let len = self.regions.len();
        for index in [from, to] {
            if index >= len {
                return Err(PartitionError::RegionIndexOutOfRange { index, len });
            }
        }
        if !self.regions[from].contains(&area) {
            return Err(PartitionError::NotAMember {
                area: format!("{area:?}"),
                region: from,
            });
        }
        debug!(event = "move", area = ?area, from, to);
        self.regions[from].remove(&area);
        self.regions[to].insert(area);
        Ok(())
    }
}
