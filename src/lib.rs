//! Typed access to `key=value` properties files.
//!
//! Records opt fields into the format with `#[properties(key = "...")]`;
//! [`Decoder`] fills those fields from a reader and [`Encoder`] writes them
//! back out, one `key=value` line per field.
//!
//! ```rust
//! use next_properties::Properties;
//!
//! #[derive(Debug, Default, PartialEq, Properties)]
//! struct AppConfig {
//!     #[properties(key = "app.name")]
//!     name: String,
//!     #[properties(key = "app.port")]
//!     port: u16,
//!     #[properties(key = "app.debug")]
//!     debug: bool,
//! }
//!
//! let config: AppConfig = next_properties::from_str("app.name=demo\napp.port=8080")?;
//! assert_eq!(config.port, 8080);
//! assert!(!config.debug);
//!
//! let text = next_properties::to_string(&config)?;
//! assert_eq!(text, "app.name=demo\napp.port=8080\napp.debug=false");
//! # Ok::<(), next_properties::error::Error>(())
//! ```
extern crate self as next_properties;

use std::io::{Read, Write};

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod parse;
pub mod record;
pub mod registry;
pub mod value;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::Error;
pub use parse::{
    DecoderOptions, DecoderOptionsBuilder, MalformedLines, PropertyMap, parse, parse_properties,
};
pub use record::{Field, Properties};
pub use registry::RegisteredRecord;
pub use value::{FieldKind, PropertyValue, ValueError};

// re-export derive macro
pub use next_properties_macros::Properties;

#[doc(hidden)]
pub use inventory;

/// Decodes a record from a string, starting from `T::default()`.
pub fn from_str<T: Properties + Default>(input: &str) -> Result<T, Error> {
    from_reader(input.as_bytes())
}

/// Decodes a record from a reader, starting from `T::default()`.
pub fn from_reader<T: Properties + Default, R: Read>(reader: R) -> Result<T, Error> {
    let mut record = T::default();
    Decoder::new(reader).decode(&mut record)?;
    Ok(record)
}

pub fn to_string<T: Properties>(record: &T) -> Result<String, Error> {
    let mut buf = Vec::new();
    to_writer(&mut buf, record)?;

    String::from_utf8(buf).map_err(|err| {
        Error::io(
            "converting encoded output",
            std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        )
    })
}

pub fn to_writer<T: Properties, W: Write>(writer: W, record: &T) -> Result<(), Error> {
    Encoder::new(writer).encode(record)
}
