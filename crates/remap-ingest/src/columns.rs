//! Spreadsheet-style column addressing.

use crate::error::{IngestError, Result};

/// Converts a column letter (`A`, `B`, ..., `Z`, `AA`, ...) to a 0-based
/// index. Lowercase letters and surrounding whitespace are accepted;
/// anything else is an error.
pub fn column_index(letter: &str) -> Result<usize> {
    let trimmed = letter.trim();
    if trimmed.is_empty() {
        return Err(IngestError::InvalidColumn(letter.to_string()));
    }
    let mut index: usize = 0;
    for ch in trimmed.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(IngestError::InvalidColumn(letter.to_string()));
        }
        index = index * 26 + (upper as usize - 'A' as usize + 1);
    }
    Ok(index - 1)
}
