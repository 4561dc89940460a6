//! Active-course catalog loading.
//!
//! The catalog file is a flat text list, one course per line, as scraped
//! from the program's course page. Lines look like:
//!
//! ```text
//! *"CS 6200": Graduate Introduction to Operating Systems
//! CS 7638: Artificial Intelligence Techniques for Robotics
//! ```
//!
//! Normalization strips the `*` and `"` decorations, keeps the code left of
//! the first `:`, and hyphenates internal spaces so the result matches the
//! `id` field of the metadata file (`CS-6200`).

use std::path::Path;

use crate::data::error::{DataError, Result};

/// Load the ordered list of active course identifiers.
///
/// Order is file order and duplicates are preserved; callers that need set
/// membership build their own set. A missing file is a
/// [`DataError::MissingFile`].
pub fn load_catalog(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => DataError::Io(e),
    })?;

    let ids: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(normalize_line)
        .collect();

    log::info!("catalog: {} active course ids from {}", ids.len(), path.display());
    Ok(ids)
}

/// Normalize one catalog line into a course identifier.
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| *c != '*' && *c != '"').collect();
    let code = stripped.split(':').next().unwrap_or("").trim();
    code.replace(' ', "-")
}
