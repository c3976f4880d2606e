use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::document::Document;
use crate::error::BoardError;
use crate::shapes::Shape;

/// A line from a saved file that could not be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: BoardError,
}

/// Outcome of decoding a saved board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub shapes: Vec<Shape>,
    pub skipped: Vec<SkippedLine>,
}

/// One canonical line per shape, in id order
pub fn encode_lines(doc: &Document) -> String {
    let mut out = String::new();
    for (_, shape) in doc.iter() {
        out.push_str(&shape.serialize());
        out.push('\n');
    }
    out
}

/// Decode saved lines. Bad lines are skipped and reported; blank lines are
/// ignored.
pub fn decode_lines(content: &str, width: i32, height: i32) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let result = line.parse::<Shape>().and_then(|shape| {
            if !shape.kind.is_inside_board(width, height) {
                return Err(BoardError::OutOfBounds(shape.serialize()));
            }
            if !seen.insert(shape.serialize()) {
                return Err(BoardError::Duplicate(shape.serialize()));
            }
            Ok(shape)
        });
        match result {
            Ok(shape) => report.shapes.push(shape),
            Err(reason) => {
                warn!(line = index + 1, %reason, "skipping saved shape");
                report.skipped.push(SkippedLine {
                    line: index + 1,
                    reason,
                });
            }
        }
    }

    report
}

/// Save every shape in the document to a file
pub fn save_shapes(doc: &Document, path: &Path) -> Result<usize> {
    fs::write(path, encode_lines(doc)).with_context(|| format!("Failed to save to {:?}", path))?;
    info!(path = %path.display(), shapes = doc.len(), "saved board");
    Ok(doc.len())
}

/// Read and decode a saved board
pub fn load_shapes(path: &Path, width: i32, height: i32) -> Result<LoadReport> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read from {:?}", path))?;
    let report = decode_lines(&content, width, height);
    info!(
        path = %path.display(),
        loaded = report.shapes.len(),
        skipped = report.skipped.len(),
        "loaded board"
    );
    Ok(report)
}
