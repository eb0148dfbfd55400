//! Conversions between property text and typed field values.
//!
//! Every type that can appear as a tagged field implements [`PropertyValue`].
//! The set is closed on purpose: text, integers of every width and booleans,
//! each with exactly one parse rule and one render rule.

use std::num::ParseIntError;

use thiserror::Error;

/// The kind of value a tagged field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// UTF-8 text, assigned and written verbatim.
    Text,
    /// Base-10 signed or unsigned integer.
    Integer,
    /// `true` / `false`.
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid boolean: {0:?}")]
    Boolean(String),
}

/// A type that can be stored in a tagged field.
pub trait PropertyValue: Sized {
    const KIND: FieldKind;

    /// Converts the raw text after the first `=` into a value.
    fn parse_property(raw: &str) -> Result<Self, ValueError>;

    /// Renders the value the way it is written after `key=`.
    fn render_property(&self) -> String;
}

impl PropertyValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn parse_property(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }

    fn render_property(&self) -> String {
        self.clone()
    }
}

impl PropertyValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn parse_property(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(ValueError::Boolean(other.to_string())),
        }
    }

    fn render_property(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_integer_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PropertyValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn parse_property(raw: &str) -> Result<Self, ValueError> {
                    Ok(raw.parse::<$ty>()?)
                }

                fn render_property(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_property!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_taken_verbatim() {
        assert_eq!(String::parse_property(" a=b ").unwrap(), " a=b ");
        assert_eq!(String::parse_property("").unwrap(), "");
    }

    #[test]
    fn integers_parse_base_10_with_sign() {
        assert_eq!(i64::parse_property("-42").unwrap(), -42);
        assert_eq!(i32::parse_property("+7").unwrap(), 7);
        assert_eq!(u16::parse_property("65535").unwrap(), 65535);
    }

    #[test]
    fn integers_reject_garbage_and_overflow() {
        assert!(matches!(i64::parse_property("12a"), Err(ValueError::Integer(_))));
        assert!(matches!(i64::parse_property(""), Err(ValueError::Integer(_))));
        assert!(matches!(i8::parse_property("128"), Err(ValueError::Integer(_))));
        assert!(matches!(u32::parse_property("-1"), Err(ValueError::Integer(_))));
        assert!(matches!(i32::parse_property(" 1"), Err(ValueError::Integer(_))));
    }

    #[test]
    fn booleans_accept_common_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(bool::parse_property(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!bool::parse_property(raw).unwrap(), "{raw}");
        }
        assert_eq!(
            bool::parse_property("yes"),
            Err(ValueError::Boolean("yes".to_string()))
        );
    }

    #[test]
    fn render_uses_default_text_form() {
        assert_eq!(true.render_property(), "true");
        assert_eq!((-123i64).render_property(), "-123");
        assert_eq!(u8::MAX.render_property(), "255");
        assert_eq!("x=y".to_string().render_property(), "x=y");
    }

    #[test]
    fn kinds() {
        assert_eq!(String::KIND, FieldKind::Text);
        assert_eq!(usize::KIND, FieldKind::Integer);
        assert_eq!(bool::KIND, FieldKind::Boolean);
    }
}
