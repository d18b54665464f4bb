use crate::snake::Word;
use crate::snake::error::{Result, SnakeError};

/// Parses a hex message and keeps its low 16 bits.
///
/// Surrounding whitespace and a `0x`/`0X` prefix are accepted. Messages longer
/// than four digits are truncated, so `541A4231` reads as `0x4231`.
pub fn parse_message(text: &str) -> Result<Word> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(SnakeError::EmptyMessage);
    }

    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    let bytes = hex::decode(&padded).map_err(|source| SnakeError::InvalidHex {
        message: text.to_string(),
        source,
    })?;

    let word = match bytes.as_slice() {
        [.., hi, lo] => Word::from_be_bytes([*hi, *lo]),
        [lo] => Word::from(*lo),
        [] => 0,
    };
    Ok(word)
}

/// Four uppercase hex digits, e.g. `00E5`.
pub fn format_message(word: Word) -> String {
    hex::encode_upper(word.to_be_bytes())
}

/// Messages match when they are equal up to ASCII case.
pub fn same_message(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}
