//! Error types for invoke-string encoding and decoding.
//!
//! Encoding never fails. Decoding can fail in two ways of its own:
//!
//! - **Missing argument**: the invoke string was absent
//! - **Malformed structured text**: a string starting with `{` is not a JSON
//!   object of string values
//!
//! The remaining variants are raised by the bundled [`Record`](crate::Record)
//! constructor. Hand-written constructors are free to use their own error
//! type as long as it implements `From<Error>`.
//!
//! ## Examples
//!
//! ```rust
//! use invoke_string::{from_optional_invoke_string, Error};
//!
//! # struct Blob;
//! # impl invoke_string::FromInvokeValues for Blob {
//! #     type Error = Error;
//! #     fn from_invoke_values(_: invoke_string::InvokeValues<'_>) -> Result<Self, Error> { Ok(Blob) }
//! # }
//! let err = from_optional_invoke_string::<Blob>(None).err().unwrap();
//! assert!(matches!(err, Error::MissingArgument(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors produced by the codec and its bundled record type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was absent
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Structured form failed to parse
    #[error("Malformed structured text at line {line}, column {column}: {msg}")]
    MalformedStructuredText {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Structured form named a field the record does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Structured form named a field that is not resolvable
    #[error("Field '{0}' is fixed and cannot be set from an invoke string")]
    FixedField(String),

    /// Flat form was decoded for a record without any resolvable field
    #[error("Record declares no resolvable field to receive a flat invoke string")]
    NoFlatField,

    /// A schema declared the same field name twice
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a missing-argument error naming the absent parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::Error;
    ///
    /// let err = Error::missing_argument("invoke_string");
    /// assert!(err.to_string().contains("invoke_string"));
    /// ```
    pub fn missing_argument(name: &'static str) -> Self {
        Error::MissingArgument(name)
    }

    /// Creates a malformed structured text error with position information.
    pub fn malformed(line: usize, column: usize, msg: &str) -> Self {
        Error::MalformedStructuredText {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    pub fn unknown_field(name: &str) -> Self {
        Error::UnknownField(name.to_string())
    }

    pub fn fixed_field(name: &str) -> Self {
        Error::FixedField(name.to_string())
    }

    pub fn duplicate_field(name: &str) -> Self {
        Error::DuplicateField(name.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::Error;
    ///
    /// let err = Error::custom("container name too long");
    /// assert!(err.to_string().contains("container name too long"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if this error came from parsing structured text.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedStructuredText { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line L column C" to its Display output
        let msg = err.to_string();
        let msg = match msg.rfind(" at line ") {
            Some(idx) => msg[..idx].to_string(),
            None => msg,
        };
        Error::MalformedStructuredText {
            line: err.line(),
            column: err.column(),
            msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
