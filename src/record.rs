//! Schema-driven records.
//!
//! A [`RecordSchema`] is a static declaration of a record's fields and which
//! of them are resolvable. A [`Record`] holds one optional string per declared
//! field. The schema is the [`RecordConstructor`] for its records, so no
//! per-type code is needed to encode or decode them.
//!
//! ## Examples
//!
//! ```rust
//! use invoke_string::{decode_with, to_invoke_string, RecordSchema};
//!
//! let schema = RecordSchema::new()
//!     .resolvable("Path")
//!     .resolvable("Name")
//!     .fixed("Access");
//!
//! let blob = schema
//!     .record()
//!     .with("Path", "container/blob")
//!     .with("Access", "Read");
//! assert_eq!(to_invoke_string(&blob), "container/blob");
//!
//! let back = decode_with(&schema, Some("container/blob")).unwrap();
//! assert_eq!(back.get("Path"), Some("container/blob"));
//! assert_eq!(back.get("Access"), None);
//! ```

use crate::{
    Error, Field, FieldMap, InvokeValues, RecordConstructor, ResolvableFields, Result,
};
use std::sync::Arc;
use tracing::warn;

/// Declaration of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub resolvable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SchemaInner {
    fields: Vec<FieldSpec>,
    flat_field: Option<String>,
}

/// Ordered field declarations for [`Record`]s.
///
/// Cloning a schema is cheap; records share their schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    inner: Arc<SchemaInner>,
}

impl RecordSchema {
    /// Creates a schema with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a resolvable field.
    ///
    /// Declaring an existing name again changes its kind in place.
    #[must_use]
    pub fn resolvable(self, name: &str) -> Self {
        self.declare(name, true)
    }

    /// Declares a fixed field.
    ///
    /// Declaring an existing name again changes its kind in place.
    #[must_use]
    pub fn fixed(self, name: &str) -> Self {
        self.declare(name, false)
    }

    /// Declares a field, rejecting names that are already declared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::{Error, RecordSchema};
    ///
    /// let schema = RecordSchema::new().try_field("Path", true).unwrap();
    /// let err = schema.try_field("Path", false).unwrap_err();
    /// assert_eq!(err, Error::DuplicateField("Path".to_string()));
    /// ```
    pub fn try_field(self, name: &str, resolvable: bool) -> Result<Self> {
        if self.index_of(name).is_some() {
            return Err(Error::duplicate_field(name));
        }
        Ok(self.declare(name, resolvable))
    }

    /// Names the field that receives a flat invoke string.
    ///
    /// Without this, the first declared resolvable field is used.
    #[must_use]
    pub fn with_flat_field(mut self, name: &str) -> Self {
        Arc::make_mut(&mut self.inner).flat_field = Some(name.to_string());
        self
    }

    fn declare(mut self, name: &str, resolvable: bool) -> Self {
        let inner = Arc::make_mut(&mut self.inner);
        match inner.fields.iter_mut().find(|f| f.name == name) {
            Some(spec) => spec.resolvable = resolvable,
            None => inner.fields.push(FieldSpec {
                name: name.to_string(),
                resolvable,
            }),
        }
        self
    }

    /// Returns the declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.inner.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.fields.iter().position(|f| f.name == name)
    }

    /// Returns the name of the field a flat invoke string is assigned to.
    ///
    /// An explicit [`with_flat_field`](Self::with_flat_field) choice wins;
    /// otherwise this is the first declared resolvable field.
    #[must_use]
    pub fn flat_field(&self) -> Option<&str> {
        match &self.inner.flat_field {
            Some(name) => Some(name.as_str()),
            None => self
                .inner
                .fields
                .iter()
                .find(|f| f.resolvable)
                .map(|f| f.name.as_str()),
        }
    }

    /// Creates a record of this schema with every field unset.
    #[must_use]
    pub fn record(&self) -> Record {
        Record {
            schema: self.clone(),
            values: vec![None; self.len()],
        }
    }

    /// Decodes an invoke string into a record of this schema.
    ///
    /// # Errors
    ///
    /// Everything [`decode_with`](crate::decode_with) reports for this
    /// schema.
    pub fn decode(&self, invoke_string: &str) -> Result<Record> {
        crate::decode_with(self, Some(invoke_string))
    }

    fn set_resolvable(&self, record: &mut Record, name: &str, value: String) -> Result<()> {
        let idx = self.index_of(name).ok_or_else(|| Error::unknown_field(name))?;
        if !self.inner.fields[idx].resolvable {
            return Err(Error::fixed_field(name));
        }
        record.values[idx] = Some(value);
        Ok(())
    }
}

impl RecordConstructor for RecordSchema {
    type Record = Record;
    type Error = Error;

    fn construct(&self, values: InvokeValues<'_>) -> Result<Record> {
        let mut record = self.record();
        match values {
            InvokeValues::Empty => {}
            InvokeValues::Flat(value) => {
                let name = self.flat_field().ok_or(Error::NoFlatField)?;
                self.set_resolvable(&mut record, name, value.to_string())?;
            }
            InvokeValues::Fields(map) => {
                for (name, value) in map {
                    self.set_resolvable(&mut record, &name, value)?;
                }
            }
        }
        Ok(record)
    }
}

/// A record whose fields are declared by a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: RecordSchema,
    values: Vec<Option<String>>,
}

impl Record {
    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Returns the value of `name`, or `None` when unset or undeclared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.schema
            .index_of(name)
            .and_then(|idx| self.values[idx].as_deref())
    }

    /// Sets any declared field, fixed or resolvable.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`] if the schema does not declare `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let idx = self
            .schema
            .index_of(name)
            .ok_or_else(|| Error::unknown_field(name))?;
        self.values[idx] = Some(value.into());
        Ok(())
    }

    /// Clears a field, returning its previous value.
    pub fn clear(&mut self, name: &str) -> Option<String> {
        let idx = self.schema.index_of(name)?;
        self.values[idx].take()
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// An undeclared name leaves the record unchanged and logs a warning;
    /// use [`try_with`](Self::try_with) to get the error instead.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Err(err) = self.set(name, value) {
            warn!(field = name, %err, "ignoring value for undeclared field");
        }
        self
    }

    /// Fallible builder form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`] if the schema does not declare `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::{Error, RecordSchema};
    ///
    /// let schema = RecordSchema::new().resolvable("Path");
    /// let err = schema.record().try_with("Pth", "a").unwrap_err();
    /// assert_eq!(err, Error::UnknownField("Pth".to_string()));
    /// ```
    pub fn try_with(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Returns every set field, fixed ones included, in declaration order.
    #[must_use]
    pub fn values(&self) -> FieldMap {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .filter_map(|(spec, value)| value.as_ref().map(|v| (spec.name.clone(), v.clone())))
            .collect()
    }
}

impl ResolvableFields for Record {
    fn fields(&self) -> Vec<Field<'_>> {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| Field::new(&spec.name, value.as_deref(), spec.resolvable))
            .collect()
    }
}
