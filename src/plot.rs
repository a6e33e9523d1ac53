//! SVG scatter plot of a clustering result.
//!
//! Each cluster's points are drawn as circles and its centroid as a triangle,
//! both in the cluster's palette colour. Colours cycle when there are more
//! clusters than palette entries.

use crate::algorithm::Cluster;
use crate::error::KMeansError;
use crate::point::{Centroid, Planar};
use std::fs;
use std::path::Path;
use tracing::info;

pub const PALETTE: [&str; 10] = [
    "red", "orange", "yellow", "green", "blue", "cyan", "magenta", "purple", "white", "black",
];

/// Colour of cluster `index`
pub fn cluster_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Canvas settings for [`render_svg`]
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    /// Blank border around the data, in pixels
    pub margin: f64,
    pub point_radius: f64,
    /// Half-width of the centroid triangle, in pixels
    pub marker_size: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 40.0,
            point_radius: 4.0,
            marker_size: 8.0,
        }
    }
}

/// Data-space bounding box mapped onto the canvas, y axis pointing up
struct Viewport {
    min_x: f64,
    min_y: f64,
    scale_x: f64,
    scale_y: f64,
    margin: f64,
    height: f64,
}

impl Viewport {
    fn fit<I>(positions: I, opts: &PlotOptions) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (x, y) in positions {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        if !min_x.is_finite() {
            (min_x, min_y, max_x, max_y) = (0.0, 0.0, 1.0, 1.0);
        }

        // Degenerate extents still get a unit-wide box
        let span_x = (max_x - min_x).max(1.0);
        let span_y = (max_y - min_y).max(1.0);
        let inner_w = (opts.width as f64 - 2.0 * opts.margin).max(1.0);
        let inner_h = (opts.height as f64 - 2.0 * opts.margin).max(1.0);

        Self {
            min_x,
            min_y,
            scale_x: inner_w / span_x,
            scale_y: inner_h / span_y,
            margin: opts.margin,
            height: opts.height as f64,
        }
    }

    fn project<P: Planar + ?Sized>(&self, p: &P) -> (f64, f64) {
        let px = self.margin + (p.x() - self.min_x) * self.scale_x;
        let py = self.height - self.margin - (p.y() - self.min_y) * self.scale_y;
        (px, py)
    }
}

/// Render clusters and centroids as a standalone SVG document.
pub fn render_svg(clusters: &[Cluster], centroids: &[Centroid], opts: &PlotOptions) -> String {
    let positions = clusters
        .iter()
        .flatten()
        .map(|p| (p.x(), p.y()))
        .chain(centroids.iter().map(|c| (c.x, c.y)));
    let view = Viewport::fit(positions, opts);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = opts.width,
        h = opts.height
    );
    svg.push('\n');
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#d9d9d9\"/>\n");

    for (i, cluster) in clusters.iter().enumerate() {
        svg.push_str(&format!(
            "  <g class=\"cluster\" data-index=\"{}\" fill=\"{}\">\n",
            i,
            cluster_color(i)
        ));

        for p in cluster {
            let (cx, cy) = view.project(p);
            svg.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" stroke=\"black\" stroke-width=\"0.5\"/>\n",
                cx, cy, opts.point_radius
            ));
        }

        if let Some(c) = centroids.get(i) {
            let (cx, cy) = view.project(c);
            let s = opts.marker_size;
            svg.push_str(&format!(
                "    <polygon class=\"centroid\" points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" stroke=\"black\" stroke-width=\"1\"/>\n",
                cx,
                cy - s,
                cx - s,
                cy + s,
                cx + s,
                cy + s
            ));
        }

        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the plot to `path`.
pub fn write_svg<P: AsRef<Path>>(
    path: P,
    clusters: &[Cluster],
    centroids: &[Centroid],
    opts: &PlotOptions,
) -> Result<(), KMeansError> {
    let path = path.as_ref();
    fs::write(path, render_svg(clusters, centroids, opts))?;

    info!(path = %path.display(), clusters = clusters.len(), "Wrote plot");
    Ok(())
}
