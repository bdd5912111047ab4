//! Reading fronts from whitespace-delimited text.
//!
//! One point per line, one number per objective, in objective order. Blank
//! lines are skipped. Row lengths are not checked here; the indicator
//! rejects rows that do not match its objective count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a front from `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read and
/// [`Error::Parse`] if a token is not a number.
pub fn read_front(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut front = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_err)?;
        if let Some(point) = parse_line(&line, idx + 1)? {
            front.push(point);
        }
    }

    trace_debug!(path = %path.display(), points = front.len(), "read front");
    Ok(front)
}

/// Parses a front from any buffered reader.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a token is not a number, and [`Error::Io`]
/// (with an empty path) if reading fails.
pub fn parse_front<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut front = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: std::path::PathBuf::new(),
            source,
        })?;
        if let Some(point) = parse_line(&line, idx + 1)? {
            front.push(point);
        }
    }
    Ok(front)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<Vec<f64>>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| Error::Parse {
                line: line_no,
                token: tok.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()
        .map(Some)
}
