use crate::point::{Centroid, Planar};

/// Squared Euclidean distance between two positions in the plane.
///
/// Only the ordering of distances matters for nearest-centroid selection,
/// so the square root is never taken.
#[inline]
pub fn squared_distance<A: Planar + ?Sized, B: Planar + ?Sized>(a: &A, b: &B) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Index of the centroid closest to `point`.
///
/// Centroids are scanned in order with a strict less-than comparison, so
/// among equidistant centroids the lowest index wins.
///
/// # Panics
///
/// Panics if `centroids` is empty.
pub fn nearest_centroid<P: Planar + ?Sized>(point: &P, centroids: &[Centroid]) -> usize {
    assert!(!centroids.is_empty(), "at least one centroid is required");

    let mut best_label = 0;
    let mut best_dist = squared_distance(point, &centroids[0]);

    for (j, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = squared_distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    best_label
}

/// Compute centroid shift (sum of L2 norms of centroid movements)
pub fn compute_centroid_shift(old_centroids: &[Centroid], new_centroids: &[Centroid]) -> f64 {
    old_centroids
        .iter()
        .zip(new_centroids)
        .map(|(old_c, new_c)| squared_distance(old_c, new_c).sqrt())
        .sum()
}
