use crate::error::{Result, UtilError};

use std::path::Path;

// the companion list is embedded at compile time
const RESTRICTION_ENZYMES: &str = include_str!("../data/restriction_enzymes.txt");

fn parse_enzymes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Names of the bundled restriction enzymes, one per non-empty line of the companion list.
pub fn restriction_enzymes() -> Vec<String> {
    parse_enzymes(RESTRICTION_ENZYMES)
}

/// Reads a restriction enzyme list from `path`, one name per non-empty line.
///
/// # Errors
///
/// Returns `UtilError::MissingEnzymeFile` if `path` does not exist.
pub fn restriction_enzymes_from_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(UtilError::MissingEnzymeFile(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| UtilError::from_io(e, path))?;
    Ok(parse_enzymes(&text))
}
