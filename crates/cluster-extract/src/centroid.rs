//! Centroid location.
//!
//! Picks the cluster's most central item against a single scalar mean
//! over every entry of every vector combined, not a per-dimension
//! centroid vector. The flat argmin of absolute difference from that
//! mean converts back to a row index by integer division over the
//! uniform vector width.

use cluster_types::Vector;

/// Find the scalar reference mean and the row index of the vector
/// closest to it.
///
/// A single-item cluster trivially returns index 0, as does a cluster
/// of zero-width vectors.
pub fn locate_center(vectors: &[Vector]) -> (f32, usize) {
    let total: usize = vectors.iter().map(|v| v.len()).sum();
    if total == 0 {
        return (0.0, 0);
    }
    let width = total / vectors.len();

    let sum: f32 = vectors.iter().flat_map(|v| v.iter()).sum();
    let mean = sum / total as f32;

    let mut best_distance = f32::INFINITY;
    let mut best_flat = 0;
    for (flat, value) in vectors.iter().flat_map(|v| v.iter()).enumerate() {
        let distance = (value - mean).abs();
        if distance < best_distance {
            best_distance = distance;
            best_flat = flat;
        }
    }

    (mean, best_flat / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_returns_zero() {
        let (_, index) = locate_center(&[vec![3.0, 5.0]]);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_zero_width_vectors() {
        let (mean, index) = locate_center(&[vec![], vec![]]);
        assert!((mean - 0.0).abs() < f32::EPSILON);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_mean_over_all_entries() {
        // Entries: 0, 2, 4, 6 -> mean 3.0
        let (mean, _) = locate_center(&[vec![0.0, 2.0], vec![4.0, 6.0]]);
        assert!((mean - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_row_closest_to_scalar_mean_wins() {
        // Mean over 0,0,10,10,4,6 is 5.0; the entry 4.0 in row 2 is the
        // global argmin of |x - mean|.
        let vectors = vec![vec![0.0, 0.0], vec![10.0, 10.0], vec![4.0, 6.0]];
        let (mean, index) = locate_center(&vectors);
        assert!((mean - 5.0).abs() < f32::EPSILON);
        assert_eq!(index, 2);
    }

    #[test]
    fn test_first_minimum_wins_on_tie() {
        // Rows 0 and 1 both contain an entry at distance 1 from the mean
        // of 1,3,3,1 = 2.0; the earlier flat position is kept.
        let vectors = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        let (_, index) = locate_center(&vectors);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_index_in_range() {
        let vectors = vec![vec![0.5, -1.0], vec![2.0, 0.1], vec![-0.3, 0.9]];
        let (_, index) = locate_center(&vectors);
        assert!(index < vectors.len());
    }
}
