//! `<key>;<value>` line parser

use crate::error::ParseError;

/// Field separator between key and value
pub const DELIMITER: u8 = b';';

/// One observation, borrowed from its source line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    /// Grouping key, verbatim
    pub key: &'a str,
    /// Numeric reading, never NaN
    pub value: f64,
}

/// Parse a text line into a record
///
/// A trailing `\n`, `\r\n` or `\r` is stripped first. The line is split at
/// the first `;`; everything after it must be a float literal. No
/// surrounding whitespace or digit separators (`1_0`) are accepted.
pub fn parse(line: &str) -> Result<Record<'_>, ParseError> {
    let line = strip_terminator(line);
    let (key, value) = line
        .split_once(DELIMITER as char)
        .ok_or(ParseError::MissingDelimiter)?;

    if key.is_empty() {
        return Err(ParseError::EmptyKey);
    }

    let value: f64 = value
        .parse()
        .map_err(|_| ParseError::InvalidValue(value.to_string()))?;
    if value.is_nan() {
        return Err(ParseError::NotANumber);
    }

    Ok(Record { key, value })
}

/// Parse a raw byte line into a record
///
/// The line must be valid UTF-8.
pub fn parse_bytes(line: &[u8]) -> Result<Record<'_>, ParseError> {
    let line = core::str::from_utf8(line).map_err(|_| ParseError::InvalidUtf8)?;
    parse(line)
}

#[inline]
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
