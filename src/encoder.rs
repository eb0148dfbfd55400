use std::{any::Any, io::Write};

use crate::{Properties, error::Error, registry};

/// Writes tagged record fields as `key=value` lines.
///
/// Lines follow field declaration order and are joined with `\n`; there is no
/// trailing line break.
///
/// ```rust
/// use next_properties::{Encoder, Properties};
///
/// #[derive(Properties)]
/// struct Sample {
///     #[properties(key = "value")]
///     value: String,
///     #[properties(key = "number")]
///     number: i64,
/// }
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&Sample {
///     value: "test-value".into(),
///     number: 123,
/// })?;
///
/// assert_eq!(encoder.into_inner(), b"value=test-value\nnumber=123");
/// # Ok::<(), next_properties::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encodes `source` into the underlying writer.
    ///
    /// Writes go straight to the writer; if one fails, lines written before
    /// it are not taken back.
    pub fn encode<T: Properties>(&mut self, source: &T) -> Result<(), Error> {
        write_fields(source, &mut self.writer)
    }

    /// Encodes a type-erased record, failing with [`Error::NotAStruct`]
    /// before anything is written if its type is not registered.
    pub fn encode_any(&mut self, source: &dyn Any) -> Result<(), Error> {
        let registration = registry::lookup((*source).type_id()).ok_or(Error::NotAStruct)?;
        tracing::debug!(record = (registration.name)(), "encoding registered record");
        (registration.encode)(source, &mut self.writer)
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn write_fields<T, W>(record: &T, writer: &mut W) -> Result<(), Error>
where
    T: Properties,
    W: Write + ?Sized,
{
    for (index, field) in T::FIELDS.iter().enumerate() {
        if index > 0 {
            writer
                .write_all(b"\n")
                .map_err(|err| Error::io("writing line break", err))?;
        }

        let value = (field.render)(record);
        write!(writer, "{}={}", field.key, value)
            .map_err(|err| Error::io(format!("writing property line ({}={})", field.key, value), err))?;
    }

    tracing::debug!(lines = T::FIELDS.len(), "encoded record");
    Ok(())
}
