//! Point files and the metrics that compare their rows.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;
use vantage_vptree::{Chebyshev, Euclidean, Manhattan, Metric};

/// Coordinate-vector metric selected at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMetric {
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Metric<Vec<f64>> for PointMetric {
    fn distance(&self, query: &Vec<f64>, item: &Vec<f64>) -> f64 {
        match self {
            PointMetric::Euclidean => Euclidean.distance(query, item),
            PointMetric::Manhattan => Manhattan.distance(query, item),
            PointMetric::Chebyshev => Chebyshev.distance(query, item),
        }
    }
}

/// Parses one row of coordinates separated by commas and/or whitespace.
pub fn parse_row(line: &str) -> Result<Vec<f64>> {
    let row = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(|field| {
            let value: f64 = field
                .parse()
                .with_context(|| format!("invalid number {field:?}"))?;
            if !value.is_finite() {
                bail!("non-finite coordinate {field:?}");
            }
            Ok(value)
        })
        .collect::<Result<Vec<f64>>>()?;
    if row.is_empty() {
        bail!("row has no coordinates");
    }
    Ok(row)
}

/// Parses a whole point file. Blank lines and `#` comments are skipped;
/// every row must have the same dimension.
pub fn parse_points(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut points: Vec<Vec<f64>> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let row = parse_row(line).with_context(|| format!("line {}", lineno + 1))?;
        if let Some(first) = points.first() {
            if first.len() != row.len() {
                bail!(
                    "line {}: expected {} coordinates, got {}",
                    lineno + 1,
                    first.len(),
                    row.len()
                );
            }
        }
        points.push(row);
    }
    Ok(points)
}

/// Reads a point file from disk.
pub fn read_points(path: &Path) -> Result<Vec<Vec<f64>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read points: {}", path.display()))?;
    let points =
        parse_points(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    info!(
        path = %path.display(),
        n_points = points.len(),
        dims = points.first().map_or(0, Vec::len),
        "points loaded"
    );
    Ok(points)
}
