use crate::config::{EmptyClusterPolicy, KMeansConfig};
use crate::distance::{compute_centroid_shift, nearest_centroid, squared_distance};
use crate::error::{validate_cluster_count, KMeansError};
use crate::point::{Centroid, Point};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Points assigned to one centroid, in input order
pub type Cluster = Vec<Point>;

/// K clusters indexed by centroid.
///
/// Equality is by value: same points, same cluster index, same order.
/// Points are always inserted in input order so two partitions built from
/// the same labels compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    clusters: Vec<Cluster>,
}

impl Partition {
    /// Group `points` by `labels`. `labels[i]` must be below `k`.
    pub fn from_labels(points: &[Point], labels: &[usize], k: usize) -> Self {
        let mut clusters = vec![Vec::new(); k];
        for (point, &label) in points.iter().zip(labels) {
            clusters[label].push(*point);
        }
        Self { clusters }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    /// Number of clusters (K), including empty ones
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }

    /// Indices of clusters that received no points
    pub fn empty_clusters(&self) -> Vec<usize> {
        self.clusters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Result of the k-means algorithm
#[derive(Debug, Clone, Serialize)]
pub struct KMeansResult {
    /// Final partition, one cluster per centroid
    pub clusters: Vec<Cluster>,
    pub centroids: Vec<Centroid>,
    /// Cluster index of every input point, in input order
    pub labels: Vec<usize>,
    /// Refinement passes run after the initial assignment
    pub n_iterations: usize,
    /// False when `max_iters` was exhausted before the partition settled
    pub converged: bool,
    /// Sum of squared distances from each point to its centroid
    pub inertia: f64,
}

impl KMeansResult {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }
}

/// Validate inputs, seed the generator and run Lloyd's algorithm from
/// randomly sampled initial centroids.
pub fn run_kmeans(points: &[Point], config: &KMeansConfig) -> Result<KMeansResult, KMeansError> {
    validate_cluster_count(config.k, points.len())?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    info!(
        n_points = points.len(),
        k = config.k,
        seed = ?config.seed,
        empty_cluster = %config.empty_cluster,
        "Training k-means"
    );

    let centroids = initialize_centroids(points, config.k, &mut rng);
    lloyd(points, centroids, config, &mut rng)
}

/// Run Lloyd's algorithm from the given initial centroids.
///
/// K is taken from `initial_centroids.len()`; `config.k` is ignored here.
/// The first assignment establishes the baseline partition; each following
/// assign/recompute pass counts as one iteration. The loop stops as soon as a
/// pass reproduces the previous partition (and, under
/// [`EmptyClusterPolicy::Reseed`], did not move a reseeded centroid), or
/// when `config.max_iters` passes have run.
pub fn lloyd<R: Rng + ?Sized>(
    points: &[Point],
    initial_centroids: Vec<Centroid>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult, KMeansError> {
    let k = initial_centroids.len();
    validate_cluster_count(k, points.len())?;

    let mut labels = assign_labels(points, &initial_centroids);
    let mut partition = Partition::from_labels(points, &labels, k);
    let mut centroids = recompute_centroids(
        &partition,
        &initial_centroids,
        points,
        config.empty_cluster,
        rng,
    );

    let mut n_iterations = 0;
    let mut converged = false;

    while n_iterations < config.max_iters {
        n_iterations += 1;

        let new_labels = assign_labels(points, &centroids);
        let n_changed = labels
            .iter()
            .zip(&new_labels)
            .filter(|(old, new)| old != new)
            .count();
        let new_partition = Partition::from_labels(points, &new_labels, k);
        let new_centroids = recompute_centroids(
            &new_partition,
            &centroids,
            points,
            config.empty_cluster,
            rng,
        );

        let shift = compute_centroid_shift(&centroids, &new_centroids);
        debug!(
            iteration = n_iterations,
            changed_labels = n_changed,
            shift = %format!("{:.6}", shift),
            "Lloyd iteration"
        );

        let stable = new_partition == partition && new_centroids == centroids;

        labels = new_labels;
        partition = new_partition;
        centroids = new_centroids;

        if stable {
            converged = true;
            break;
        }
    }

    if converged {
        info!(iterations = n_iterations, "Converged");
    } else {
        warn!(
            max_iters = config.max_iters,
            "Stopped at the iteration limit before the partition settled"
        );
    }

    let inertia = compute_inertia(points, &labels, &centroids);

    Ok(KMeansResult {
        clusters: partition.into_clusters(),
        centroids,
        labels,
        n_iterations,
        converged,
        inertia,
    })
}

/// Pick `k` distinct input points uniformly at random as initial centroids.
///
/// Callers guarantee `1 <= k <= points.len()`.
pub fn initialize_centroids<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    rng: &mut R,
) -> Vec<Centroid> {
    let indices: Vec<usize> = (0..points.len()).collect();
    indices
        .choose_multiple(rng, k)
        .map(|&i| Centroid::from(points[i]))
        .collect()
}

/// Label every point with its nearest centroid
pub fn assign_labels(points: &[Point], centroids: &[Centroid]) -> Vec<usize> {
    points
        .iter()
        .map(|p| nearest_centroid(p, centroids))
        .collect()
}

/// Assign every point to its nearest centroid and group them
pub fn assign_points(points: &[Point], centroids: &[Centroid]) -> Partition {
    let labels = assign_labels(points, centroids);
    Partition::from_labels(points, &labels, centroids.len())
}

/// Arithmetic mean of a cluster, or `None` if it is empty
pub fn cluster_center(cluster: &[Point]) -> Option<Centroid> {
    if cluster.is_empty() {
        return None;
    }

    // Integer sums are exact; convert once at the end
    let (sum_x, sum_y) = cluster.iter().fold((0i128, 0i128), |(sx, sy), p| {
        (sx + p.x as i128, sy + p.y as i128)
    });
    let n = cluster.len() as f64;

    Some(Centroid::new(sum_x as f64 / n, sum_y as f64 / n))
}

/// Compute one centroid per cluster, resolving empty clusters with `policy`.
///
/// `previous` holds the centroids the partition was assigned against.
pub fn recompute_centroids<R: Rng + ?Sized>(
    partition: &Partition,
    previous: &[Centroid],
    points: &[Point],
    policy: EmptyClusterPolicy,
    rng: &mut R,
) -> Vec<Centroid> {
    let mut centroids = Vec::with_capacity(partition.len());
    let mut empty_clusters = Vec::new();

    for (cluster_idx, cluster) in partition.clusters().iter().enumerate() {
        match cluster_center(cluster) {
            Some(center) => centroids.push(center),
            None => {
                empty_clusters.push(cluster_idx);
                centroids.push(previous[cluster_idx]);
            }
        }
    }

    if empty_clusters.is_empty() {
        return centroids;
    }

    match policy {
        EmptyClusterPolicy::KeepPrevious => {
            warn!(
                empty = ?empty_clusters,
                "Empty clusters keep their previous centroid"
            );
        }
        EmptyClusterPolicy::Reseed => {
            let indices: Vec<usize> = (0..points.len()).collect();
            let random_indices: Vec<usize> = indices
                .choose_multiple(rng, empty_clusters.len())
                .cloned()
                .collect();

            for (&cluster_idx, &point_idx) in empty_clusters.iter().zip(&random_indices) {
                centroids[cluster_idx] = Centroid::from(points[point_idx]);
            }

            warn!(
                empty = ?empty_clusters,
                "Reinitialized {} empty clusters",
                empty_clusters.len()
            );
        }
    }

    centroids
}

/// Sum of squared distances from each point to its assigned centroid
pub fn compute_inertia(points: &[Point], labels: &[usize], centroids: &[Centroid]) -> f64 {
    points
        .iter()
        .zip(labels)
        .map(|(p, &label)| squared_distance(p, &centroids[label]))
        .sum()
}
