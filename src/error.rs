use thiserror::Error;

/// Error types for the kmeans2d library
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The requested number of clusters is zero or negative
    #[error("Number of clusters must be positive (got {0}).")]
    NonPositiveK(i64),

    /// More clusters were requested than there are points to seed them from
    #[error(
        "Number of clusters must be less than or equal to number of points ({k} > {n_points})."
    )]
    TooManyClusters { k: usize, n_points: usize },

    /// A line of the point source is not a pair of integers
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A point matrix does not have exactly two columns
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,

    /// Reading the point source or writing an output file failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl KMeansError {
    /// True for the errors that reject a cluster count before clustering starts.
    pub fn is_invalid_cluster_count(&self) -> bool {
        matches!(
            self,
            KMeansError::NonPositiveK(_) | KMeansError::TooManyClusters { .. }
        )
    }
}

/// Check that `1 <= k <= n_points`.
pub fn validate_cluster_count(k: usize, n_points: usize) -> Result<(), KMeansError> {
    if k == 0 {
        return Err(KMeansError::NonPositiveK(0));
    }
    if k > n_points {
        return Err(KMeansError::TooManyClusters { k, n_points });
    }
    Ok(())
}
