use thiserror::Error;

use crate::{parse::DecoderOptionsBuilderError, value::ValueError};

#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed while reading or writing.
    ///
    /// `context` names what was being done when the stream failed, for
    /// example `reading input content` or `writing property line (port=8080)`.
    #[error("I/O: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A non-comment, non-blank line without a `key=` prefix.
    ///
    /// Only returned when the decoder runs with
    /// [`MalformedLines::Reject`](crate::MalformedLines::Reject), which is the
    /// default. `line` is 1-based.
    #[error("Malformed line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },

    /// A tagged field was present in the input but its value could not be
    /// converted to the field's type.
    ///
    /// Fields assigned before the failing one keep their new values.
    #[error("Failed to parse value for field '{key}': {source}")]
    InvalidFieldValue {
        key: &'static str,
        #[source]
        source: ValueError,
    },

    /// A type-erased value was handed to
    /// [`Decoder::decode_any`](crate::Decoder::decode_any) or
    /// [`Encoder::encode_any`](crate::Encoder::encode_any) but its type is not
    /// a registered record.
    ///
    /// # How to Fix
    ///
    /// Derive the trait on a struct with named fields, or register a manual
    /// implementation:
    ///
    /// ```rust
    /// use next_properties::Properties;
    ///
    /// #[derive(Debug, Default, Properties)]
    /// struct MyConfig {
    ///     #[properties(key = "field")]
    ///     field: String,
    /// }
    /// // MyConfig is now automatically registered!
    /// ```
    #[error("Value must be a struct deriving Properties")]
    NotAStruct,

    #[error("Options: {0}")]
    Options(#[from] DecoderOptionsBuilderError),
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
