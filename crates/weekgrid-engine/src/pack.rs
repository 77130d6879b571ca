//! Side-by-side packing of overlapping occurrences within one day column.

use crate::model::{Occurrence, PlacedOccurrence};

/// ## Summary
/// Assigns every occurrence of a single day a column inside its overlap cluster.
///
/// Occurrences are sorted by `top` (stable). Each one joins the first cluster
/// holding a member it overlaps, or opens a new cluster. Inside a cluster
/// members go into the first column with no overlapping member, and every
/// member reports the cluster's total column count.
///
/// The result is returned in sorted order.
///
/// ## Side Effects
/// None - pure function.
#[must_use]
pub fn pack(occurrences: Vec<Occurrence>) -> Vec<PlacedOccurrence> {
    let mut sorted = occurrences;
    sorted.sort_by(|a, b| a.top.total_cmp(&b.top));

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    for (index, occurrence) in sorted.iter().enumerate() {
        match clusters
            .iter_mut()
            .find(|cluster| cluster.iter().any(|&member| sorted[member].overlaps(occurrence)))
        {
            Some(cluster) => cluster.push(index),
            None => clusters.push(vec![index]),
        }
    }

    // (column_index, column_count) per sorted position
    let mut lanes = vec![(0_usize, 1_usize); sorted.len()];
    for cluster in clusters.iter().filter(|cluster| cluster.len() > 1) {
        let mut columns: Vec<Vec<usize>> = Vec::new();
        for &member in cluster {
            let free = columns.iter().position(|column| {
                column
                    .iter()
                    .all(|&placed| !sorted[placed].overlaps(&sorted[member]))
            });
            let column_index = if let Some(free) = free {
                columns[free].push(member);
                free
            } else {
                columns.push(vec![member]);
                columns.len() - 1
            };
            lanes[member].0 = column_index;
        }

        for &member in cluster {
            lanes[member].1 = columns.len();
        }
    }

    sorted
        .into_iter()
        .zip(lanes)
        .map(|(occurrence, (column_index, column_count))| PlacedOccurrence {
            occurrence,
            column_index,
            column_count,
        })
        .collect()
}
