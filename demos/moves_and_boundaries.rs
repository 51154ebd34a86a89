//! Example showing the move primitive and contiguity verification.
//!
//! Run with: `cargo run --example moves_and_boundaries`

use regio::{objective_euclidean, regionalized_components, AttributeGraph, Partition};

fn piece_count(graph: &AttributeGraph<usize>, partition: &Partition<usize>) -> usize {
    let assignment = partition.to_mapping();
    regionalized_components(graph, &assignment)
        .expect("every area is assigned")
        .map(|sub| sub.connected_piece_count())
        .sum()
}

fn main() {
    let attributes = [
        726.7, 623.6, 487.3, 200.4, 245.0, 481.0, 170.9, 225.9, 226.9,
    ];
    let graph = AttributeGraph::grid(3, 3, &attributes).expect("valid grid");

    // start from the natural top-row / bottom-rows split
    let mapping: std::collections::HashMap<usize, usize> =
        (0..9).map(|a| (a, usize::from(a > 2))).collect();
    let mut partition = Partition::from_mapping(&mapping).expect("dense region-IDs");

    println!("start: {} regions, {} pieces", partition.region_count(), piece_count(&graph, &partition));
    println!(
        "  heterogeneity: {:.1}",
        objective_euclidean(&partition, &graph).unwrap()
    );

    // a boundary move that keeps both regions contiguous
    partition.make_move(5, 1, 0).expect("5 is in region 1");
    let pieces = piece_count(&graph, &partition);
    println!("\nafter moving area 5 into region 0: {pieces} pieces");
    assert_eq!(pieces, partition.region_count(), "move kept contiguity");
    println!(
        "  heterogeneity: {:.1}",
        objective_euclidean(&partition, &graph).unwrap()
    );

    // a move that strands area 2: the extractor reports an extra piece
    partition.make_move(5, 0, 1).expect("undo");
    partition.make_move(1, 0, 1).expect("1 is in region 0");
    let pieces = piece_count(&graph, &partition);
    println!("\nafter moving area 1 into region 1: {pieces} pieces");
    assert!(pieces > partition.region_count(), "move broke contiguity");
    println!("  a solver would reject or repair this move");
}
