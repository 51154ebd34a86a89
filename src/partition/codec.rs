//! Conversions between the two sanctioned partition representations:
//! a list of area sets (region-ID = list index) and a dense
//! area → region-ID mapping.

use super::{Partition, PartitionError, Region};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

impl<A> Partition<A>
where
    A: Clone + Eq + Hash + Debug,
{
    /// Converts to the area → region-ID mapping form.
    ///
    /// The region-ID of every area is the index of its region in
    /// [`Partition::regions`]. Empty regions leave no trace in the mapping.
    pub fn to_mapping(&self) -> HashMap<A, usize> {
        let mut mapping = HashMap::with_capacity(self.area_count());
        for (region_id, region) in self.regions().iter().enumerate() {
            for area in region {
                mapping.insert(area.clone(), region_id);
            }
        }
        mapping
    }

    /// Inverse of [`Partition::to_mapping`]: rebuilds the list-of-sets form
    /// from a dense area → region-ID mapping.
    ///
    /// An empty mapping yields an empty partition.
    ///
    /// # Errors
    ///
    /// `NonDenseRegionIds` if the mapping's values do not cover the range
    /// `0..=max(values)`; a gap would otherwise silently become an empty
    /// region.
    pub fn from_mapping(mapping: &HashMap<A, usize>) -> Result<Self, PartitionError> {
        let Some(&max_id) = mapping.values().max() else {
            return Ok(Self::empty());
        };
        let mut regions: Vec<Region<A>> = vec![Region::new(); max_id + 1];
        for (area, &region_id) in mapping {
            regions[region_id].insert(area.clone());
        }
        let missing: Vec<usize> = regions
            .iter()
            .enumerate()
            .filter(|(_, region)| region.is_empty())
            .map(|(region_id, _)| region_id)
            .collect();
        if !missing.is_empty() {
            return Err(PartitionError::NonDenseRegionIds { missing });
        }
        Ok(Self::from_regions(regions))
    }
}
