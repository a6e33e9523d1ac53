//! # kmeans2d-rs
//!
//! Lloyd's k-means clustering for 2D integer points, with a small SVG
//! visualizer and a command-line front end (`cluster-points`).
//!
//! ## Features
//!
//! - **Exact Lloyd iteration**: assign every point, then recompute every
//!   centroid, until the partition stops changing
//! - **Deterministic ties**: equidistant points go to the lowest-index centroid
//! - **Injectable randomness**: seed a run for reproducibility, or pass your own
//!   generator to [`lloyd`] / [`initialize_centroids`]
//! - **Explicit empty-cluster policy**: keep the previous centroid or reseed it
//!   from a random input point
//!
//! ## Example
//!
//! ```rust
//! use kmeans2d_rs::{run_kmeans, KMeansConfig, Point};
//!
//! let points: Vec<Point> = [(0, 0), (0, 1), (10, 10), (10, 11)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let config = KMeansConfig::new(2).with_seed(42);
//! let result = run_kmeans(&points, &config).unwrap();
//!
//! assert!(result.converged);
//! assert_eq!(result.clusters.len(), 2);
//! ```
//!
//! ## Fixed starting centroids
//!
//! ```rust
//! use kmeans2d_rs::{lloyd, Centroid, KMeansConfig, Point};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let points: Vec<Point> = [(0, 0), (0, 1), (10, 10), (10, 11)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//! let initial = vec![Centroid::new(0.0, 0.0), Centroid::new(10.0, 10.0)];
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let result = lloyd(&points, initial, &KMeansConfig::new(2), &mut rng).unwrap();
//!
//! assert_eq!(result.centroids[0], Centroid::new(0.0, 0.5));
//! assert_eq!(result.centroids[1], Centroid::new(10.0, 10.5));
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
pub mod io;
mod kmeans;
pub mod plot;
mod point;

pub use algorithm::{
    assign_labels, assign_points, cluster_center, compute_inertia, initialize_centroids, lloyd,
    recompute_centroids, run_kmeans, Cluster, KMeansResult, Partition,
};
pub use config::{EmptyClusterPolicy, KMeansConfig};
pub use distance::{compute_centroid_shift, nearest_centroid, squared_distance};
pub use error::{validate_cluster_count, KMeansError};
pub use kmeans::KMeans;
pub use point::{centroids_to_array, points_from_array, points_to_array, Centroid, Planar, Point};
