//! # invoke_string
//!
//! Reversible encoding of a record's resolvable string fields into a single
//! "invoke string".
//!
//! ## What is an invoke string?
//!
//! A binding attribute such as a blob reference has a handful of named string
//! fields. Some of them are *resolvable*: their values must be captured so the
//! attribute can be rebuilt later. The rest are *fixed* and supplied out of
//! band. An invoke string captures exactly the resolvable values, in one of
//! three shapes:
//!
//! - **Empty**: no resolvable field has a value
//! - **Flat**: exactly one has a value, and the string is that bare value
//! - **Structured**: several have values, encoded as a JSON object of strings
//!
//! ## Quick Start
//!
//! ```rust
//! use invoke_string::{from_invoke_string, resolvable_fields, to_invoke_string};
//! use invoke_string::{Error, FromInvokeValues, InvokeValues};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct BlobAttribute {
//!     path: Option<String>,
//!     name: Option<String>,
//!     access: String,
//! }
//!
//! resolvable_fields!(BlobAttribute {
//!     resolve "Path" => path,
//!     resolve "Name" => name,
//!     fixed "Access" => access,
//! });
//!
//! impl FromInvokeValues for BlobAttribute {
//!     type Error = Error;
//!
//!     fn from_invoke_values(values: InvokeValues<'_>) -> Result<Self, Error> {
//!         Ok(BlobAttribute {
//!             path: values.flat_or_field("Path").map(str::to_string),
//!             name: values.field("Name").map(str::to_string),
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! let attr = BlobAttribute {
//!     path: Some("container/blob".to_string()),
//!     name: Some("report".to_string()),
//!     access: "Read".to_string(),
//! };
//!
//! let s = to_invoke_string(&attr);
//! assert_eq!(s, r#"{"Path":"container/blob","Name":"report"}"#);
//!
//! let back: BlobAttribute = from_invoke_string(&s).unwrap();
//! assert_eq!(back.path.as_deref(), Some("container/blob"));
//! assert_eq!(back.name.as_deref(), Some("report"));
//! ```
//!
//! ## Collaborators
//!
//! The codec never inspects types on its own:
//!
//! - [`ResolvableFields`] lists a record's fields in declaration order
//! - [`RecordConstructor`] builds a record from decoded [`InvokeValues`]
//!
//! [`resolvable_fields!`] and [`RecordSchema`] provide ready-made
//! implementations.
//!
//! ## Known ambiguity
//!
//! Structured form is recognized by a leading `{`. A single resolvable value
//! that itself starts with `{` encodes as flat form but decodes as structured
//! form, and usually fails to parse.
//!
//! ## Logging
//!
//! Encoding and decoding emit `tracing` events at `trace` and `debug` level.
//! No subscriber is installed by this crate.

pub mod de;
pub mod error;
pub mod field;
pub mod macros;
pub mod map;
pub mod record;
pub mod ser;

pub use de::{
    decode_with, from_invoke_string, from_optional_invoke_string, parse_invoke_string,
    InvokeShape,
};
pub use error::{Error, Result};
pub use field::{
    Constructor, Field, FieldValue, FromInvokeValues, InvokeDescriptor, InvokeValues,
    RecordConstructor, ResolvableFields,
};
pub use map::FieldMap;
pub use record::{FieldSpec, Record, RecordSchema};
pub use ser::{encode_field_map, to_field_map, to_invoke_string};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Blob {
        path: Option<String>,
        name: Option<String>,
    }

    resolvable_fields!(Blob {
        resolve "Path" => path,
        resolve "Name" => name,
    });

    impl FromInvokeValues for Blob {
        type Error = Error;

        fn from_invoke_values(values: InvokeValues<'_>) -> Result<Self> {
            Ok(Blob {
                path: values.flat_or_field("Path").map(str::to_string),
                name: values.field("Name").map(str::to_string),
            })
        }
    }

    fn blob(path: &str, name: &str) -> Blob {
        Blob {
            path: Some(path.to_string()),
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_round_trip_flat() {
        let s = to_invoke_string(&blob("container/blob", ""));
        assert_eq!(s, "container/blob");

        let back: Blob = from_invoke_string(&s).unwrap();
        assert_eq!(back.path.as_deref(), Some("container/blob"));
        assert_eq!(to_invoke_string(&back), s);
    }

    #[test]
    fn test_round_trip_structured() {
        let s = to_invoke_string(&blob("a", "b"));
        let back: Blob = from_invoke_string(&s).unwrap();
        assert_eq!(back, blob("a", "b"));
        assert_eq!(to_invoke_string(&back), s);
    }

    #[test]
    fn test_round_trip_empty() {
        let s = to_invoke_string(&Blob::default());
        assert_eq!(s, "");
        assert_eq!(from_invoke_string::<Blob>(&s).unwrap(), Blob::default());
    }

    #[test]
    fn test_descriptor_methods() {
        let attr = blob("a", "b");
        let s = attr.to_invoke_string();
        assert_eq!(Blob::from_invoke_string(&s).unwrap(), attr);
    }
}
