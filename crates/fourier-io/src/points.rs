//! `x,y` point lists for drawing paths.
//!
//! One pair per line, separated by a comma. Blank lines and lines starting
//! with `#` are skipped. Whitespace around either number is ignored.

use crate::{Error, Result};
use std::path::Path;

/// Parse a point list from text.
///
/// ```rust
/// let points = fourier_io::parse_points("# square\n0,0\n1, 0\n\n1,1\n").unwrap();
/// assert_eq!(points, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
/// ```
pub fn parse_points(text: &str) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = || Error::MalformedPoint {
            line: index + 1,
            content: line.to_string(),
        };
        let (x, y) = line.split_once(',').ok_or_else(malformed)?;
        let x: f64 = x.trim().parse().map_err(|_| malformed())?;
        let y: f64 = y.trim().parse().map_err(|_| malformed())?;
        points.push((x, y));
    }
    Ok(points)
}

/// Read and parse a point-list file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let text = std::fs::read_to_string(path)?;
    let points = parse_points(&text)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(points = points.len(), "read point list");

    Ok(points)
}
