//! Parsing of `key=value` text into a [`PropertyMap`].
//!
//! The grammar is line based and deliberately small:
//!
//! - lines starting with `#` are comments and are skipped
//! - empty lines are skipped
//! - every other line is a declaration; the key is everything before the
//!   first `=` and the value is everything after it, further `=` included
//!
//! Lines are split on `\n` only. Duplicate keys are not an error, the last
//! declaration wins.
use std::collections::HashMap;

use derive_builder::Builder;

use crate::error::Error;

/// Unordered key to value mapping read from one input.
pub type PropertyMap = HashMap<String, String>;

/// What to do with a line that is neither a comment, blank, nor `key=value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLines {
    /// Fail with [`Error::MalformedLine`].
    #[default]
    Reject,
    /// Drop the line and log a warning.
    Skip,
}

/// Options controlling how a [`Decoder`](crate::Decoder) reads its input.
///
/// ```rust
/// use next_properties::{DecoderOptions, MalformedLines};
///
/// let options = DecoderOptions::builder()
///     .malformed_lines(MalformedLines::Skip)
///     .strip_carriage_returns(true)
///     .build()?;
///
/// assert_eq!(options.malformed_lines, MalformedLines::Skip);
/// # Ok::<(), next_properties::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct DecoderOptions {
    pub malformed_lines: MalformedLines,

    /// Remove one trailing `\r` from every line, for files written with CRLF
    /// line endings.
    pub strip_carriage_returns: bool,
}

impl DecoderOptions {
    pub fn builder() -> DecoderOptionsBuilder {
        DecoderOptionsBuilder::default()
    }
}

/// Parses `input` with the default [`DecoderOptions`].
///
/// ```rust
/// let values = next_properties::parse("# comment\nkey=a=b=c\n")?;
/// assert_eq!(values["key"], "a=b=c");
/// # Ok::<(), next_properties::error::Error>(())
/// ```
pub fn parse(input: &str) -> Result<PropertyMap, Error> {
    parse_properties(input, &DecoderOptions::default())
}

pub fn parse_properties(input: &str, options: &DecoderOptions) -> Result<PropertyMap, Error> {
    let mut values = PropertyMap::new();

    for (index, line) in input.split('\n').enumerate() {
        let line = match options.strip_carriage_returns {
            true => line.strip_suffix('\r').unwrap_or(line),
            false => line,
        };

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                values.insert(key.to_string(), value.to_string());
            }
            _ => match options.malformed_lines {
                MalformedLines::Reject => {
                    return Err(Error::MalformedLine {
                        line: index + 1,
                        text: line.to_string(),
                    });
                }
                MalformedLines::Skip => {
                    tracing::warn!(line = index + 1, text = line, "skipping malformed property line");
                }
            },
        }
    }

    tracing::debug!(properties = values.len(), "parsed property input");
    Ok(values)
}
