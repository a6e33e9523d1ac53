use crate::algorithm::{assign_labels, run_kmeans, KMeansResult};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::point::{Centroid, Point};

/// Lloyd's k-means model for 2D integer points.
///
/// Wraps [`run_kmeans`] behind a familiar `fit()` / `predict()` interface and
/// keeps the last result around for inspection.
///
/// # Example
///
/// ```
/// use kmeans2d_rs::{KMeans, KMeansConfig, Point};
///
/// let points = vec![
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(10, 10),
///     Point::new(10, 11),
/// ];
///
/// let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_seed(42));
/// let labels = kmeans.fit_predict(&points).unwrap();
///
/// assert_eq!(labels.len(), 4);
/// assert_eq!(labels[0], labels[1]);
/// assert_eq!(labels[2], labels[3]);
/// assert_ne!(labels[0], labels[2]);
/// ```
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Result of the last fit (None if not yet fitted)
    result: Option<KMeansResult>,
}

impl KMeans {
    /// Create a new model with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new model with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            result: None,
        }
    }

    /// Cluster `points`.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::TooManyClusters`] if there are fewer points than
    /// clusters.
    pub fn fit(&mut self, points: &[Point]) -> Result<&KMeansResult, KMeansError> {
        let result = run_kmeans(points, &self.config)?;
        Ok(&*self.result.insert(result))
    }

    /// Assign points to the nearest fitted centroid.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::NotFitted`] before the first successful `fit()`.
    pub fn predict(&self, points: &[Point]) -> Result<Vec<usize>, KMeansError> {
        let result = self.result.as_ref().ok_or(KMeansError::NotFitted)?;
        Ok(assign_labels(points, &result.centroids))
    }

    /// Fit the model and return the label of every training point.
    pub fn fit_predict(&mut self, points: &[Point]) -> Result<Vec<usize>, KMeansError> {
        Ok(self.fit(points)?.labels.clone())
    }

    /// Fitted centroids, if any
    pub fn centroids(&self) -> Option<&[Centroid]> {
        self.result.as_ref().map(|r| r.centroids.as_slice())
    }

    /// Full result of the last fit, if any
    pub fn result(&self) -> Option<&KMeansResult> {
        self.result.as_ref()
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
