use crate::error::{Result, UtilError};

/// Watson-Crick partner of an uppercase base, or `None` outside `{A, T, C, G}`.
#[inline(always)]
pub const fn complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Returns the characters of `sequence` in reverse order.
pub fn reverse(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

/// Returns the complement of a DNA sequence.
///
/// # Errors
///
/// Returns `UtilError::InvalidBase` for the first character that is not an uppercase
/// `A`, `T`, `C` or `G`.
pub fn complement(sequence: &str) -> Result<String> {
    sequence
        .char_indices()
        .map(|(offset, base)| {
            complement_base(base).ok_or(UtilError::InvalidBase { base, offset })
        })
        .collect()
}

/// Returns the reverse complement of a DNA sequence.
///
/// Offsets in `UtilError::InvalidBase` refer to positions in the input, not the reversed
/// string.
pub fn reverse_complement(sequence: &str) -> Result<String> {
    sequence
        .char_indices()
        .rev()
        .map(|(offset, base)| {
            complement_base(base).ok_or(UtilError::InvalidBase { base, offset })
        })
        .collect()
}

/// Percentage (0 to 100) of `G` and `C` in `sequence`, ignoring case.
///
/// # Errors
///
/// Returns `UtilError::EmptySequence` if `sequence` is empty.
pub fn gc_content(sequence: &str) -> Result<f64> {
    let (gc, total) = sequence.chars().fold((0usize, 0usize), |(gc, total), c| {
        match c.to_ascii_uppercase() {
            'G' | 'C' => (gc + 1, total + 1),
            _ => (gc, total + 1),
        }
    });

    if total == 0 {
        return Err(UtilError::EmptySequence);
    }

    Ok(100.0 * (gc as f64) / (total as f64))
}
