//! Contracts between the codec and the records it encodes.
//!
//! The codec does not discover fields on its own. A record describes itself
//! through [`ResolvableFields`], and a decoded invoke string is handed to a
//! [`RecordConstructor`] which builds the final value.
//!
//! ```rust
//! use invoke_string::{Field, FromInvokeValues, InvokeValues, ResolvableFields, Error};
//!
//! #[derive(Debug, PartialEq, Default)]
//! struct Queue {
//!     name: Option<String>,
//!     connection: String,
//! }
//!
//! impl ResolvableFields for Queue {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::resolvable("Name", self.name.as_deref()),
//!             Field::fixed("Connection", Some(&self.connection)),
//!         ]
//!     }
//! }
//!
//! impl FromInvokeValues for Queue {
//!     type Error = Error;
//!
//!     fn from_invoke_values(values: InvokeValues<'_>) -> Result<Self, Error> {
//!         Ok(Queue {
//!             name: values.flat_or_field("Name").map(str::to_string),
//!             connection: String::new(),
//!         })
//!     }
//! }
//!
//! let queue = Queue { name: Some("orders".to_string()), connection: "Storage".to_string() };
//! let s = invoke_string::to_invoke_string(&queue);
//! assert_eq!(s, "orders");
//!
//! let back: Queue = invoke_string::from_invoke_string(&s).unwrap();
//! assert_eq!(back.name.as_deref(), Some("orders"));
//! ```

use crate::{Error, FieldMap};
use std::marker::PhantomData;

/// One declared field of a record, as seen by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub resolvable: bool,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(name: &'a str, value: Option<&'a str>, resolvable: bool) -> Self {
        Field {
            name,
            value,
            resolvable,
        }
    }

    /// A field captured in the invoke string.
    #[must_use]
    pub const fn resolvable(name: &'a str, value: Option<&'a str>) -> Self {
        Field::new(name, value, true)
    }

    /// A field supplied out of band; never part of the invoke string.
    #[must_use]
    pub const fn fixed(name: &'a str, value: Option<&'a str>) -> Self {
        Field::new(name, value, false)
    }

    /// Returns the value if this field contributes to the invoke string:
    /// resolvable, present and not entirely whitespace.
    #[must_use]
    pub fn encodable_value(&self) -> Option<&'a str> {
        if !self.resolvable {
            return None;
        }
        self.value.filter(|v| !v.trim().is_empty())
    }
}

/// Borrowed view of a struct member as an optional string.
///
/// Used by [`resolvable_fields!`](crate::resolvable_fields) to read struct
/// members of different string types uniformly.
pub trait FieldValue {
    fn field_value(&self) -> Option<&str>;
}

impl FieldValue for String {
    fn field_value(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl FieldValue for &str {
    fn field_value(&self) -> Option<&str> {
        Some(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_value(&self) -> Option<&str> {
        self.as_ref().and_then(FieldValue::field_value)
    }
}

/// Record introspection: the ordered list of a record's fields.
pub trait ResolvableFields {
    /// Returns every declared field in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<T: ResolvableFields + ?Sized> ResolvableFields for &T {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// The parsed content of an invoke string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeValues<'a> {
    /// Empty invoke string: no field overrides.
    Empty,
    /// Bare value of the record's single resolvable field.
    Flat(&'a str),
    /// Field values parsed from structured form.
    Fields(FieldMap),
}

impl InvokeValues<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, InvokeValues::Empty)
    }

    /// Looks up a field by name in structured form.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            InvokeValues::Fields(map) => map.get(name),
            _ => None,
        }
    }

    /// Looks up `name`, treating flat form as the value of `name`.
    ///
    /// Convenient for records whose flat form always maps to one field.
    #[must_use]
    pub fn flat_or_field(&self, name: &str) -> Option<&str> {
        match self {
            InvokeValues::Empty => None,
            InvokeValues::Flat(value) => Some(*value),
            InvokeValues::Fields(map) => map.get(name),
        }
    }

    /// Converts into a field map, assigning flat form to `flat_field`.
    #[must_use]
    pub fn into_field_map(self, flat_field: &str) -> FieldMap {
        match self {
            InvokeValues::Empty => FieldMap::new(),
            InvokeValues::Flat(value) => {
                let mut map = FieldMap::with_capacity(1);
                map.insert(flat_field.to_string(), value.to_string());
                map
            }
            InvokeValues::Fields(map) => map,
        }
    }
}

/// Record construction: builds a record from decoded invoke values.
///
/// Errors returned here are passed through the decoder unchanged.
pub trait RecordConstructor {
    type Record;
    type Error: From<Error>;

    fn construct(&self, values: InvokeValues<'_>) -> Result<Self::Record, Self::Error>;
}

impl<F, R, E> RecordConstructor for F
where
    F: Fn(InvokeValues<'_>) -> Result<R, E>,
    E: From<Error>,
{
    type Record = R;
    type Error = E;

    fn construct(&self, values: InvokeValues<'_>) -> Result<R, E> {
        self(values)
    }
}

/// A record type that can build itself from invoke values without any
/// outside context.
pub trait FromInvokeValues: Sized {
    type Error: From<Error>;

    fn from_invoke_values(values: InvokeValues<'_>) -> Result<Self, Self::Error>;

    /// Returns a [`RecordConstructor`] for this type.
    #[must_use]
    fn constructor() -> Constructor<Self> {
        Constructor(PhantomData)
    }
}

/// [`RecordConstructor`] adapter over a [`FromInvokeValues`] type.
pub struct Constructor<T>(PhantomData<fn() -> T>);

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Constructor<T> {}

impl<T> std::fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Constructor")
    }
}

impl<T: FromInvokeValues> RecordConstructor for Constructor<T> {
    type Record = T;
    type Error = T::Error;

    fn construct(&self, values: InvokeValues<'_>) -> Result<T, T::Error> {
        T::from_invoke_values(values)
    }
}

/// Invoke-string conversions for records that are both introspectable and
/// self-constructing.
pub trait InvokeDescriptor: ResolvableFields + FromInvokeValues {
    fn to_invoke_string(&self) -> String {
        crate::ser::to_invoke_string(self)
    }

    fn from_invoke_string(invoke_string: &str) -> Result<Self, <Self as FromInvokeValues>::Error> {
        crate::de::from_invoke_string(invoke_string)
    }
}

impl<T: ResolvableFields + FromInvokeValues> InvokeDescriptor for T {}
