use crate::value::{FieldKind, ValueError};

/// A record whose tagged fields map to keys of a properties file.
///
/// Usually implemented with [`#[derive(Properties)]`](crate::Properties):
///
/// ```rust
/// use next_properties::{FieldKind, Properties};
///
/// #[derive(Debug, Default, Properties)]
/// struct ServerConfig {
///     #[properties(key = "host")]
///     host: String,
///     #[properties(key = "port")]
///     port: u16,
///     connections: usize,
/// }
///
/// let keys: Vec<_> = ServerConfig::keys().collect();
/// assert_eq!(keys, ["host", "port"]);
/// assert_eq!(ServerConfig::field("port").map(|f| f.kind), Some(FieldKind::Integer));
/// ```
///
/// Deriving is only possible for structs with named fields:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// enum NotAStruct {
///     A,
/// }
/// ```
///
/// Tuple structs are rejected as well:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct Tuple(#[properties(key = "value")] String);
/// ```
///
/// Keys must not be empty:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct EmptyKey {
///     #[properties(key = "")]
///     value: String,
/// }
/// ```
///
/// Keys must not contain `=`, which would split them on the way back in:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct EqualsInKey {
///     #[properties(key = "a=b")]
///     value: String,
/// }
/// ```
///
/// Keys also must not contain a line break:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct LineBreakInKey {
///     #[properties(key = "a\nb")]
///     value: String,
/// }
/// ```
///
/// Keys must not start with `#`, which marks a comment line:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct CommentKey {
///     #[properties(key = "#value")]
///     value: String,
/// }
/// ```
///
/// Keys must be unique within a record:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct DuplicateKey {
///     #[properties(key = "value")]
///     first: String,
///     #[properties(key = "value")]
///     second: String,
/// }
/// ```
///
/// A field binds to exactly one key:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct TwoKeys {
///     #[properties(key = "a")]
///     #[properties(key = "b")]
///     value: String,
/// }
/// ```
///
/// Only the `key` option is understood:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct UnknownOption {
///     #[properties(key = "value", rename = "other")]
///     value: String,
/// }
/// ```
///
/// The key must be a string literal:
///
/// ```rust,compile_fail
/// use next_properties::Properties;
///
/// #[derive(Properties)]
/// struct IntegerKey {
///     #[properties(key = 5)]
///     value: String,
/// }
/// ```
pub trait Properties: Sized + 'static {
    /// Tagged fields in declaration order.
    const FIELDS: &'static [Field<Self>];

    fn keys() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.key)
    }

    fn field(key: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.key == key)
    }
}

/// Descriptor for a single tagged field of `T`.
pub struct Field<T> {
    pub key: &'static str,
    pub kind: FieldKind,
    pub render: fn(&T) -> String,
    pub assign: fn(&mut T, &str) -> Result<(), ValueError>,
}

impl<T> Field<T> {
    pub const fn new(
        key: &'static str,
        kind: FieldKind,
        render: fn(&T) -> String,
        assign: fn(&mut T, &str) -> Result<(), ValueError>,
    ) -> Self {
        Self {
            key,
            kind,
            render,
            assign,
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
