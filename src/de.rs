//! Invoke-string decoding.
//!
//! Decoding dispatches on the first character of the input:
//!
//! - `""` is [`InvokeShape::Empty`]: the constructor receives no overrides
//! - a leading `{` is [`InvokeShape::Structured`]: the whole string must be a
//!   JSON object of string values
//! - anything else is [`InvokeShape::Flat`]: the bare value of the record's
//!   single resolvable field
//!
//! A flat value that itself starts with `{` is indistinguishable from
//! structured form and is decoded as such.
//!
//! ```rust
//! use invoke_string::{decode_with, Error, InvokeValues};
//!
//! let ctor = |values: InvokeValues<'_>| -> Result<InvokeValues<'static>, Error> {
//!     Ok(match values {
//!         InvokeValues::Flat(v) => InvokeValues::Fields([("Path", v)].into_iter().collect()),
//!         InvokeValues::Empty => InvokeValues::Empty,
//!         InvokeValues::Fields(map) => InvokeValues::Fields(map),
//!     })
//! };
//!
//! let decoded = decode_with(&ctor, Some(r#"{"Path":"a","Name":"b"}"#)).unwrap();
//! assert_eq!(decoded.field("Name"), Some("b"));
//! ```

use crate::{Error, FieldMap, FromInvokeValues, InvokeValues, RecordConstructor, Result};
use tracing::debug;

/// The three shapes an invoke string can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeShape {
    Empty,
    Flat,
    Structured,
}

impl InvokeShape {
    /// Classifies `invoke_string` by its length and first character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::InvokeShape;
    ///
    /// assert_eq!(InvokeShape::detect(""), InvokeShape::Empty);
    /// assert_eq!(InvokeShape::detect("container/blob"), InvokeShape::Flat);
    /// assert_eq!(InvokeShape::detect(r#"{"Path":"a"}"#), InvokeShape::Structured);
    /// ```
    #[must_use]
    pub fn detect(invoke_string: &str) -> Self {
        if invoke_string.is_empty() {
            InvokeShape::Empty
        } else if invoke_string.starts_with('{') {
            InvokeShape::Structured
        } else {
            InvokeShape::Flat
        }
    }
}

/// Parses structured form into a field map.
///
/// The entire input must be a single JSON object whose values are all
/// strings. Any deviation is reported as
/// [`Error::MalformedStructuredText`].
pub fn parse_structured(text: &str) -> Result<FieldMap> {
    serde_json::from_str::<FieldMap>(text).map_err(|err| {
        let err = Error::from(err);
        if let Error::MalformedStructuredText { line, column, .. } = &err {
            debug!(line, column, "malformed structured invoke string");
        }
        err
    })
}

/// Parses an invoke string into the values a constructor consumes.
///
/// # Errors
///
/// [`Error::MissingArgument`] when `invoke_string` is `None`, and
/// [`Error::MalformedStructuredText`] when structured form does not parse.
pub fn parse_invoke_string(invoke_string: Option<&str>) -> Result<InvokeValues<'_>> {
    let invoke_string = invoke_string.ok_or_else(|| Error::missing_argument("invoke_string"))?;

    let shape = InvokeShape::detect(invoke_string);
    debug!(?shape, len = invoke_string.len(), "decoding invoke string");

    match shape {
        InvokeShape::Empty => Ok(InvokeValues::Empty),
        InvokeShape::Flat => Ok(InvokeValues::Flat(invoke_string)),
        InvokeShape::Structured => parse_structured(invoke_string).map(InvokeValues::Fields),
    }
}

/// Decodes `invoke_string` and hands the result to `constructor`.
///
/// Constructor errors are returned unchanged; the codec's own errors are
/// converted into the constructor's error type.
///
/// # Errors
///
/// See [`parse_invoke_string`], plus anything `constructor` reports.
pub fn decode_with<C>(
    constructor: &C,
    invoke_string: Option<&str>,
) -> std::result::Result<C::Record, C::Error>
where
    C: ?Sized + RecordConstructor,
{
    let values = parse_invoke_string(invoke_string)?;
    constructor.construct(values)
}

/// Decodes an optional invoke string into a self-constructing record.
///
/// # Errors
///
/// [`Error::MissingArgument`] for `None`, otherwise as [`decode_with`].
pub fn from_optional_invoke_string<T>(
    invoke_string: Option<&str>,
) -> std::result::Result<T, T::Error>
where
    T: FromInvokeValues,
{
    decode_with(&T::constructor(), invoke_string)
}

/// Decodes an invoke string into a self-constructing record.
///
/// # Errors
///
/// As [`decode_with`].
pub fn from_invoke_string<T>(invoke_string: &str) -> std::result::Result<T, T::Error>
where
    T: FromInvokeValues,
{
    from_optional_invoke_string(Some(invoke_string))
}
