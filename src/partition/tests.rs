//! Test suite for partitions, moves, and representation conversions.

use super::*;
use std::collections::HashMap;

/// Helper to build a region from a slice of areas.
fn region(areas: &[u32]) -> Region<u32> {
    areas.iter().copied().collect()
}

/// Helper to build a partition from slices.
fn partition(regions: &[&[u32]]) -> Partition<u32> {
    Partition::from_regions(regions.iter().map(|r| region(r)).collect())
}

mod basic_operations {
    use super::*;

    #[test]
    fn counts_and_emptiness() {
        let p = partition(&[&[0, 1, 2, 5], &[3, 4, 6, 7, 8]]);
        assert_eq!(p.region_count(), 2);
        assert_eq!(p.area_count(), 9);
        assert!(!p.is_empty());
        assert!(Partition::<u32>::empty().is_empty());
    }

    #[test]
    fn region_lookup_by_index() {
        let p = partition(&[&[0, 1], &[2]]);
        assert_eq!(p.region(1).unwrap(), &region(&[2]));
        assert_eq!(
            p.region(2),
            Err(PartitionError::RegionIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn region_containing_area() {
        let p = partition(&[&[0, 1], &[2]]);
        assert_eq!(p.region_index_of(&2).unwrap(), 1);
        assert_eq!(p.region_containing(&1).unwrap(), &region(&[0, 1]));
        assert_eq!(
            p.region_index_of(&9),
            Err(PartitionError::AreaNotFound("9".to_string()))
        );
    }

    #[test]
    fn disjointness_check() {
        assert!(partition(&[&[0, 1], &[2]]).is_disjoint());
        assert!(!partition(&[&[0, 1], &[1, 2]]).is_disjoint());
    }
}

mod moves {
    use super::*;

    #[test]
    fn move_relocates_area() {
        let mut p = partition(&[&[0, 1, 2], &[3, 4]]);
        p.make_move(2, 0, 1).unwrap();
        assert!(!p.region(0).unwrap().contains(&2));
        assert!(p.region(1).unwrap().contains(&2));
        assert_eq!(p.area_count(), 5);
    }

    #[test]
    fn move_to_same_region_is_noop() {
        let mut p = partition(&[&[0, 1], &[2]]);
        p.make_move(0, 0, 0).unwrap();
        assert_eq!(p, partition(&[&[0, 1], &[2]]));
    }

    #[test]
    fn move_rejects_non_member_without_mutating() {
        let mut p = partition(&[&[0, 1], &[2]]);
        let before = p.clone();
        assert_eq!(
            p.make_move(2, 0, 1),
            Err(PartitionError::NotAMember {
                area: "2".to_string(),
                region: 0
            })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn move_rejects_bad_region_index_without_mutating() {
        let mut p = partition(&[&[0, 1], &[2]]);
        let before = p.clone();
        assert_eq!(
            p.make_move(0, 0, 5),
            Err(PartitionError::RegionIndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(p, before);
    }
}

mod codec {
    use super::*;

    #[test]
    fn to_mapping_uses_list_index_as_region_id() {
        let p = partition(&[&[0, 1], &[2]]);
        let mapping = p.to_mapping();
        assert_eq!(mapping, HashMap::from([(0, 0), (1, 0), (2, 1)]));
    }

    #[test]
    fn from_mapping_rebuilds_region_list() {
        let mapping = HashMap::from([(0, 0), (1, 0), (2, 1)]);
        let p = Partition::from_mapping(&mapping).unwrap();
        assert_eq!(p, partition(&[&[0, 1], &[2]]));
    }

    #[test]
    fn round_trip_is_stable() {
        let p = partition(&[&[0, 1, 2, 5], &[3, 4, 6, 7, 8]]);
        let mapping = p.to_mapping();
        let rebuilt = Partition::from_mapping(&mapping).unwrap();
        assert_eq!(rebuilt.to_mapping(), mapping);
        assert_eq!(rebuilt, p);
    }

    #[test]
    fn gapped_region_ids_are_rejected() {
        let mapping = HashMap::from([(0_u32, 0_usize), (1, 0), (2, 2)]);
        assert_eq!(
            Partition::from_mapping(&mapping),
            Err(PartitionError::NonDenseRegionIds { missing: vec![1] })
        );
    }

    #[test]
    fn empty_mapping_gives_empty_partition() {
        let mapping: HashMap<u32, usize> = HashMap::new();
        assert_eq!(
            Partition::from_mapping(&mapping).unwrap(),
            Partition::empty()
        );
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn partition_round_trips_through_json() {
        let p = partition(&[&[0, 1], &[2]]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Partition<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
