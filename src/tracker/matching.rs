//! Matching utilities for centroid tracking.

use ndarray::Array2;

/// Compute the pairwise Euclidean distance matrix between existing track
/// centroids (rows) and new detection centroids (columns).
pub fn distance_matrix(track_centroids: &[(f32, f32)], det_centroids: &[(f32, f32)]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_centroids.len(), det_centroids.len()));
    for (i, t) in track_centroids.iter().enumerate() {
        for (j, d) in det_centroids.iter().enumerate() {
            dists[[i, j]] = (t.0 - d.0).hypot(t.1 - d.1);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy nearest-centroid assignment.
///
/// Rows are visited in ascending order of their row-minimum distance (stable
/// sort, so ties fall back to row order). Each row claims its nearest
/// still-unconsumed column; a claim beyond `max_distance` is rejected, which
/// leaves the detection to register as a new identity instead of continuing
/// a distant track.
///
/// This is deliberately greedy, not an exact bipartite assignment: a
/// committed pair is never un-done when a better global pairing shows up
/// later in the walk.
pub fn greedy_assignment(cost_matrix: &Array2<f32>, max_distance: Option<f32>) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    let row_min = |i: usize| {
        (0..num_cols)
            .map(|j| cost_matrix[[i, j]])
            .fold(f32::INFINITY, f32::min)
    };

    // Closest track first.
    let mut order: Vec<usize> = (0..num_rows).collect();
    order.sort_by(|&a, &b| row_min(a).total_cmp(&row_min(b)));

    let mut matched_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];
    let mut matches = vec![];

    for &row in &order {
        let mut best: Option<(usize, f32)> = None;
        for col in 0..num_cols {
            if used_cols[col] {
                continue;
            }
            let d = cost_matrix[[row, col]];
            if best.is_none_or(|(_, b)| d < b) {
                best = Some((col, d));
            }
        }
        let Some((col, dist)) = best else {
            break; // every detection consumed
        };
        if max_distance.is_some_and(|radius| dist > radius) {
            continue;
        }
        matches.push((row, col));
        matched_rows[row] = true;
        used_cols[col] = true;
    }

    let unmatched_tracks = (0..num_rows).filter(|&i| !matched_rows[i]).collect();
    let unmatched_detections = (0..num_cols).filter(|&j| !used_cols[j]).collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
