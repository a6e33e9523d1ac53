use crate::error::KMeansError;
use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use std::fmt;

/// Anything with a position in the plane.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// An input point. Integer coordinates, never mutated after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Planar for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x as f64
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y as f64
    }
}

/// The mean position of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Centroid {
    fn from(p: Point) -> Self {
        Self {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

impl Planar for Centroid {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

/// Build points from an (n, 2) integer matrix, one row per point
pub fn points_from_array(data: &ArrayView2<i64>) -> Result<Vec<Point>, KMeansError> {
    if data.ncols() != 2 {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected 2 columns, got {}",
            data.ncols()
        )));
    }

    Ok(data
        .outer_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect())
}

/// Stack points into an (n, 2) integer matrix
pub fn points_to_array(points: &[Point]) -> Array2<i64> {
    let mut data = Array2::zeros((points.len(), 2));
    for (i, p) in points.iter().enumerate() {
        data[[i, 0]] = p.x;
        data[[i, 1]] = p.y;
    }
    data
}

/// Stack centroids into a (k, 2) matrix
pub fn centroids_to_array(centroids: &[Centroid]) -> Array2<f64> {
    let mut data = Array2::zeros((centroids.len(), 2));
    for (i, c) in centroids.iter().enumerate() {
        data[[i, 0]] = c.x;
        data[[i, 1]] = c.y;
    }
    data
}
