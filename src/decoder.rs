use std::{any::Any, io::Read};

use crate::{
    Properties,
    error::Error,
    parse::{DecoderOptions, PropertyMap, parse_properties},
    registry,
};

/// Reads a properties stream and populates tagged record fields.
///
/// ```rust
/// use next_properties::{Decoder, Properties};
///
/// #[derive(Debug, Default, Properties)]
/// struct Sample {
///     #[properties(key = "key0")]
///     key0: String,
///     #[properties(key = "key1")]
///     key1: String,
/// }
///
/// let input = "# comment\nkey0=value0\n\nkey1=value1\n";
/// let mut sample = Sample::default();
/// Decoder::new(input.as_bytes()).decode(&mut sample)?;
///
/// assert_eq!(sample.key0, "value0");
/// assert_eq!(sample.key1, "value1");
/// # Ok::<(), next_properties::error::Error>(())
/// ```
///
/// The destination must be borrowed mutably, a record passed by value is
/// rejected at compile time:
///
/// ```rust,compile_fail
/// # use next_properties::{Decoder, Properties};
/// # #[derive(Default, Properties)]
/// # struct Sample {
/// #     #[properties(key = "key0")]
/// #     key0: String,
/// # }
/// Decoder::new("key0=value0".as_bytes()).decode(Sample::default())?;
/// # Ok::<(), next_properties::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    options: DecoderOptions,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecoderOptions::default())
    }

    pub fn with_options(reader: R, options: DecoderOptions) -> Self {
        Self { reader, options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Reads the whole input and parses it into a [`PropertyMap`].
    pub fn read_map(&mut self) -> Result<PropertyMap, Error> {
        let mut contents = String::new();
        self.reader
            .read_to_string(&mut contents)
            .map_err(|err| Error::io("reading input content", err))?;

        parse_properties(&contents, &self.options)
    }

    /// Decodes the input into `dest`.
    ///
    /// Fields whose key is missing from the input keep their current value.
    /// On [`Error::InvalidFieldValue`] the fields assigned before the failing
    /// one stay assigned.
    pub fn decode<T: Properties>(&mut self, dest: &mut T) -> Result<(), Error> {
        let values = self.read_map()?;
        assign_fields(dest, &values)
    }

    /// Decodes into a type-erased record.
    ///
    /// The input is consumed before the type is checked, so a
    /// [`Error::NotAStruct`] failure still drains the reader.
    pub fn decode_any(&mut self, dest: &mut dyn Any) -> Result<(), Error> {
        let values = self.read_map()?;
        let registration = registry::lookup((*dest).type_id()).ok_or(Error::NotAStruct)?;
        tracing::debug!(record = (registration.name)(), "decoding registered record");
        (registration.decode)(dest, &values)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

pub(crate) fn assign_fields<T: Properties>(record: &mut T, values: &PropertyMap) -> Result<(), Error> {
    for field in T::FIELDS {
        let Some(raw) = values.get(field.key) else {
            tracing::trace!(key = field.key, "no value for field, keeping current");
            continue;
        };

        (field.assign)(record, raw).map_err(|source| Error::InvalidFieldValue {
            key: field.key,
            source,
        })?;
        tracing::trace!(key = field.key, kind = ?field.kind, "assigned field");
    }

    Ok(())
}
