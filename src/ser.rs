//! Invoke-string encoding.
//!
//! The encoder collects the non-empty resolvable fields of a record into a
//! [`FieldMap`] and then picks the shortest faithful form:
//!
//! | collected fields | output                              |
//! |------------------|-------------------------------------|
//! | none             | `""`                                |
//! | one              | the bare value (flat form)          |
//! | two or more      | `{"Path":"a","Name":"b"}` (structured form) |
//!
//! ```rust
//! use invoke_string::{to_invoke_string, Field, ResolvableFields};
//!
//! struct Blob<'a> { path: &'a str, name: &'a str }
//!
//! impl ResolvableFields for Blob<'_> {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::resolvable("Path", Some(self.path)),
//!             Field::resolvable("Name", Some(self.name)),
//!         ]
//!     }
//! }
//!
//! assert_eq!(to_invoke_string(&Blob { path: "container/blob", name: "" }), "container/blob");
//! assert_eq!(to_invoke_string(&Blob { path: "a", name: "b" }), r#"{"Path":"a","Name":"b"}"#);
//! assert_eq!(to_invoke_string(&Blob { path: "", name: " " }), "");
//! ```

use crate::{FieldMap, ResolvableFields};
use tracing::{error, trace};

/// Collects the resolvable, non-blank field values of `record` in
/// declaration order.
#[must_use]
pub fn to_field_map<R>(record: &R) -> FieldMap
where
    R: ?Sized + ResolvableFields,
{
    record
        .fields()
        .into_iter()
        .filter_map(|field| {
            field
                .encodable_value()
                .map(|value| (field.name.to_string(), value.to_string()))
        })
        .collect()
}

/// Encodes the resolvable fields of `record` as an invoke string.
#[must_use]
pub fn to_invoke_string<R>(record: &R) -> String
where
    R: ?Sized + ResolvableFields,
{
    encode_field_map(&to_field_map(record))
}

/// Encodes an already collected field map.
///
/// An empty map yields `""`, a single entry yields its bare value, and
/// anything larger yields compact structured text in insertion order.
#[must_use]
pub fn encode_field_map(map: &FieldMap) -> String {
    if map.is_empty() {
        trace!(fields = 0, "encoded empty invoke string");
        return String::new();
    }

    if let Some((name, value)) = map.single() {
        trace!(fields = 1, field = name, "encoded flat invoke string");
        return value.to_string();
    }

    trace!(fields = map.len(), "encoded structured invoke string");
    // A map of strings always serializes; an error here means a broken serde impl
    serde_json::to_string(map).unwrap_or_else(|err| {
        error!(%err, "failed to write structured invoke string");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    struct Fields(Vec<(&'static str, Option<&'static str>, bool)>);

    impl ResolvableFields for Fields {
        fn fields(&self) -> Vec<Field<'_>> {
            self.0
                .iter()
                .map(|&(name, value, resolvable)| Field::new(name, value, resolvable))
                .collect()
        }
    }

    #[test]
    fn test_single_value_is_flat() {
        let record = Fields(vec![
            ("Path", Some("container/blob"), true),
            ("Name", Some(""), true),
        ]);
        assert_eq!(to_invoke_string(&record), "container/blob");
    }

    #[test]
    fn test_multiple_values_are_structured() {
        let record = Fields(vec![("Path", Some("a"), true), ("Name", Some("b"), true)]);
        assert_eq!(to_invoke_string(&record), r#"{"Path":"a","Name":"b"}"#);
    }

    #[test]
    fn test_no_values_is_empty() {
        let record = Fields(vec![("Path", Some(""), true), ("Name", None, true)]);
        assert_eq!(to_invoke_string(&record), "");
    }

    #[test]
    fn test_fixed_fields_are_ignored() {
        let record = Fields(vec![
            ("Path", Some("a"), true),
            ("Access", Some("Read"), false),
        ]);
        assert_eq!(to_invoke_string(&record), "a");

        let map = to_field_map(&record);
        assert!(!map.contains("Access"));
    }

    #[test]
    fn test_whitespace_only_values_are_dropped() {
        let record = Fields(vec![
            ("Path", Some("  "), true),
            ("Name", Some("\u{3000}"), true),
            ("Tag", Some("t"), true),
        ]);
        assert_eq!(to_invoke_string(&record), "t");
    }

    #[test]
    fn test_structured_output_escapes_json() {
        let map: FieldMap = [("Path", "a\"b"), ("Name", "c\\d\n")].into_iter().collect();
        assert_eq!(
            encode_field_map(&map),
            r#"{"Path":"a\"b","Name":"c\\d\n"}"#
        );
    }

    #[test]
    fn test_structured_output_matches_serde_json() {
        let map: FieldMap = [("Path", "a/b"), ("Name", "ü\u{1}")].into_iter().collect();
        assert_eq!(encode_field_map(&map), serde_json::to_string(&map).unwrap());
    }

    #[test]
    fn test_structured_output_escapes_control_characters() {
        let map: FieldMap = [("A", "\u{0}\u{1f}"), ("B", "\u{7f}\u{2028}"), ("C", "x")]
            .into_iter()
            .collect();
        assert_eq!(
            encode_field_map(&map),
            "{\"A\":\"\\u0000\\u001f\",\"B\":\"\u{7f}\u{2028}\",\"C\":\"x\"}"
        );
    }

    #[test]
    fn test_flat_value_starting_with_brace_is_kept_verbatim() {
        let record = Fields(vec![("Path", Some("{x}"), true)]);
        assert_eq!(to_invoke_string(&record), "{x}");
    }
}
