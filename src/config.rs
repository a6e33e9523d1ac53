use std::fmt;
use std::str::FromStr;

/// What to do with a centroid whose cluster received no points in an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Keep the centroid from the previous iteration unchanged
    #[default]
    KeepPrevious,

    /// Move the centroid onto a randomly chosen input point
    Reseed,
}

impl FromStr for EmptyClusterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep" | "keep-previous" => Ok(Self::KeepPrevious),
            "reseed" => Ok(Self::Reseed),
            other => Err(format!(
                "unknown empty-cluster policy '{}' (expected 'keep' or 'reseed')",
                other
            )),
        }
    }
}

impl fmt::Display for EmptyClusterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepPrevious => f.write_str("keep"),
            Self::Reseed => f.write_str("reseed"),
        }
    }
}

/// Configuration for Lloyd's k-means
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Hard stop on the number of refinement iterations.
    /// The loop normally ends much earlier, when the partition stops changing.
    pub max_iters: usize,

    /// Random seed for centroid initialization and reseeding.
    /// `None` draws a fresh seed from the OS for every run.
    pub seed: Option<u64>,

    /// Handling of clusters that end up with no points
    pub empty_cluster: EmptyClusterPolicy,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iters: 1_000,
            seed: None,
            empty_cluster: EmptyClusterPolicy::KeepPrevious,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the empty-cluster policy
    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }
}
