//! Reading points from line-oriented text.
//!
//! One point per line, `x` and `y` as whitespace-separated integers.
//! Blank lines are skipped and any tokens after the second are ignored.

use crate::error::KMeansError;
use crate::point::Point;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Parse points from any buffered reader.
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, KMeansError> {
    let mut points = Vec::new();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = idx + 1;

        let line = std::str::from_utf8(&bytes).map_err(|_| KMeansError::MalformedInput {
            line: line_no,
            reason: "invalid UTF-8".to_string(),
        })?;

        if line.trim().is_empty() {
            continue;
        }

        points.push(parse_line(line, line_no)?);
    }

    Ok(points)
}

/// Read points from a file on disk.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, KMeansError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let points = parse_points(reader)?;

    info!(path = %path.display(), n_points = points.len(), "Loaded points");
    Ok(points)
}

fn parse_line(line: &str, line_no: usize) -> Result<Point, KMeansError> {
    let mut fields = line.split_whitespace();

    let x = parse_coordinate(fields.next(), "x", line_no)?;
    let y = parse_coordinate(fields.next(), "y", line_no)?;

    let extra = fields.count();
    if extra > 0 {
        debug!(line = line_no, extra, "Ignoring trailing fields");
    }

    Ok(Point::new(x, y))
}

fn parse_coordinate(field: Option<&str>, axis: &str, line_no: usize) -> Result<i64, KMeansError> {
    let field = field.ok_or_else(|| KMeansError::MalformedInput {
        line: line_no,
        reason: format!("missing {} coordinate", axis),
    })?;

    field.parse().map_err(|e| KMeansError::MalformedInput {
        line: line_no,
        reason: format!("invalid {} coordinate '{}': {}", axis, field, e),
    })
}
