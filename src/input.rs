//! City-file parsing.
//!
//! The on-disk format is one city per line: whitespace-separated
//! `x y name`. Parsing lives outside the optimizer core; the core only
//! ever sees points and labels.

use crate::error::Error;
use crate::geometry::Point;
use std::fs;
use std::path::Path;

/// Parses city lines into points and labels.
///
/// Blank lines are skipped. Any line with fewer than three fields or an
/// unparsable coordinate fails with [`Error::InvalidInput`] naming the
/// offending line.
pub fn parse_cities(text: &str) -> Result<(Vec<Point>, Vec<String>), Error> {
    let mut points = Vec::new();
    let mut labels = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (x, y, name) = match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), Some(name)) => (x, y, name),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "line {}: expected `x y name`, got {line:?}",
                    lineno + 1
                )))
            }
        };
        let x: f64 = x.parse().map_err(|_| {
            Error::InvalidInput(format!("line {}: bad x coordinate {x:?}", lineno + 1))
        })?;
        let y: f64 = y.parse().map_err(|_| {
            Error::InvalidInput(format!("line {}: bad y coordinate {y:?}", lineno + 1))
        })?;
        points.push(Point::new(x, y));
        labels.push(name.to_string());
    }

    Ok((points, labels))
}

/// Reads and parses a city file.
pub fn read_cities(path: impl AsRef<Path>) -> Result<(Vec<Point>, Vec<String>), Error> {
    let text = fs::read_to_string(path)?;
    parse_cities(&text)
}

/// Appends a copy of the first point and label, closing the path.
///
/// The optimizer expects the closed-path convention (last point equals the
/// first); this duplication is the caller's responsibility and this helper
/// performs it. No-op on empty input.
pub fn close_path(points: &mut Vec<Point>, labels: &mut Vec<String>) {
    if let (Some(&first), Some(name)) = (points.first(), labels.first().cloned()) {
        points.push(first);
        labels.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cities() {
        let text = "0.0 0.0 Helsinki\n\n12.5 -3.25 Tampere\n100 200 Oulu\n";
        let (points, labels) = parse_cities(text).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(labels, vec!["Helsinki", "Tampere", "Oulu"]);
        assert_eq!(points[1], Point::new(12.5, -3.25));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_cities("1.0 2.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_parse_bad_coordinate() {
        let err = parse_cities("1.0 north Pori\n").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_close_path_duplicates_first() {
        let (mut points, mut labels) =
            parse_cities("0 0 A\n1 0 B\n1 1 C\n").unwrap();
        close_path(&mut points, &mut labels);
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], points[0]);
        assert_eq!(labels[3], "A");
    }

    #[test]
    fn test_close_path_empty_is_noop() {
        let mut points = Vec::new();
        let mut labels = Vec::new();
        close_path(&mut points, &mut labels);
        assert!(points.is_empty() && labels.is_empty());
    }
}
