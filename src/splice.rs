use thiserror::Error;

use crate::constants::markers::{END_MARKER, PRESERVED_OFFSET};

#[derive(Error, Debug, PartialEq)]
pub enum SpliceError {
    #[error("previous file has no end of autogenerated content marker; refusing to overwrite it")]
    MissingMarker,
}

/// Index of the first hand-written line in a previously generated file.
pub fn manually_written_code_start_idx(previous: &[&str]) -> Result<usize, SpliceError> {
    previous
        .iter()
        .position(|line| line.contains(END_MARKER))
        .map(|idx| idx + PRESERVED_OFFSET)
        .ok_or(SpliceError::MissingMarker)
}

pub fn splice(autogenerated: Vec<String>, previous: &str) -> Result<Vec<String>, SpliceError> {
    let previous_lines: Vec<&str> = previous.lines().collect();
    let start_idx = manually_written_code_start_idx(&previous_lines)?;

    let mut lines = autogenerated;
    if let Some(mut preserved) = previous_lines.get(start_idx..) {
        // Trailing blank lines are dropped; the file always ends in a single newline
        while let [rest @ .., last] = preserved {
            if !last.trim_end_matches('\r').is_empty() {
                break;
            }
            preserved = rest;
        }
        log::debug!("Preserving {} hand-written lines", preserved.len());
        lines.extend(
            preserved
                .iter()
                .map(|line| line.trim_end_matches(['\r', '\n']).to_owned()),
        );
    }
    Ok(lines)
}

/// Joins lines into file contents ending in exactly one newline.
pub fn to_file_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
