use invoke_string::{
    decode_with, from_invoke_string, from_optional_invoke_string, parse_invoke_string,
    to_field_map, to_invoke_string, Error, Field, FieldMap, FromInvokeValues, InvokeValues,
    RecordSchema, ResolvableFields,
};
use std::cell::RefCell;

#[derive(Debug, Default, PartialEq)]
struct BlobAttribute {
    path: Option<String>,
    name: Option<String>,
    access: Option<String>,
}

impl ResolvableFields for BlobAttribute {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::resolvable("Path", self.path.as_deref()),
            Field::resolvable("Name", self.name.as_deref()),
            Field::fixed("Access", self.access.as_deref()),
        ]
    }
}

impl FromInvokeValues for BlobAttribute {
    type Error = Error;

    fn from_invoke_values(values: InvokeValues<'_>) -> Result<Self, Error> {
        let mut attr = BlobAttribute::default();
        match values {
            InvokeValues::Empty => {}
            InvokeValues::Flat(path) => attr.path = Some(path.to_string()),
            InvokeValues::Fields(map) => {
                for (name, value) in map {
                    match name.as_str() {
                        "Path" => attr.path = Some(value),
                        "Name" => attr.name = Some(value),
                        other => return Err(Error::unknown_field(other)),
                    }
                }
            }
        }
        Ok(attr)
    }
}

fn blob(path: &str, name: &str) -> BlobAttribute {
    BlobAttribute {
        path: Some(path.to_string()),
        name: Some(name.to_string()),
        access: None,
    }
}

#[test]
fn test_single_value_encodes_flat() {
    assert_eq!(to_invoke_string(&blob("container/blob", "")), "container/blob");
}

#[test]
fn test_two_values_encode_structured_in_declaration_order() {
    assert_eq!(to_invoke_string(&blob("a", "b")), r#"{"Path":"a","Name":"b"}"#);
}

#[test]
fn test_no_values_encode_empty() {
    assert_eq!(to_invoke_string(&blob("", "")), "");
    assert_eq!(to_invoke_string(&BlobAttribute::default()), "");
}

#[test]
fn test_fixed_field_does_not_influence_encoding() {
    let mut attr = blob("a", "b");
    let before = to_invoke_string(&attr);
    attr.access = Some("Write".to_string());
    assert_eq!(to_invoke_string(&attr), before);
}

#[test]
fn test_whitespace_values_are_omitted() {
    let attr = blob("a", " \t ");
    assert_eq!(to_invoke_string(&attr), "a");
    assert_eq!(to_field_map(&attr).len(), 1);
}

#[test]
fn test_decode_empty_supplies_no_overrides() {
    let seen = RefCell::new(None);
    let ctor = |values: InvokeValues<'_>| -> Result<(), Error> {
        *seen.borrow_mut() = Some(values.is_empty());
        Ok(())
    };
    decode_with(&ctor, Some("")).unwrap();
    assert_eq!(*seen.borrow(), Some(true));
}

#[test]
fn test_decode_structured_passes_field_map() {
    let seen = RefCell::new(FieldMap::new());
    let ctor = |values: InvokeValues<'_>| -> Result<(), Error> {
        if let InvokeValues::Fields(map) = values {
            *seen.borrow_mut() = map;
        }
        Ok(())
    };
    decode_with(&ctor, Some("{\"Path\":\"a\",\"Name\":\"b\"}")).unwrap();

    let expected: FieldMap = [("Path", "a"), ("Name", "b")].into_iter().collect();
    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn test_decode_flat_recognized() {
    assert_eq!(
        parse_invoke_string(Some("container/blob")).unwrap(),
        InvokeValues::Flat("container/blob")
    );
    let attr: BlobAttribute = from_invoke_string("container/blob").unwrap();
    assert_eq!(attr.path.as_deref(), Some("container/blob"));
    assert_eq!(attr.name, None);
}

#[test]
fn test_decode_missing_argument() {
    let err = from_optional_invoke_string::<BlobAttribute>(None).unwrap_err();
    assert!(matches!(err, Error::MissingArgument(_)));
}

#[test]
fn test_decode_malformed_structured_text() {
    let err = from_invoke_string::<BlobAttribute>("{not valid json").unwrap_err();
    assert!(matches!(err, Error::MalformedStructuredText { .. }));
    println!("Malformed error: {}", err);
}

#[test]
fn test_constructor_error_propagates_unchanged() {
    let err = from_invoke_string::<BlobAttribute>(r#"{"Path":"a","Size":"3"}"#).unwrap_err();
    assert_eq!(err, Error::UnknownField("Size".to_string()));
}

#[test]
fn test_round_trip_is_byte_identical() {
    for attr in [
        blob("container/blob", ""),
        blob("a", "b"),
        blob("", ""),
        blob("dir/with \"quotes\"", "tab\there"),
        blob("ünïcödé", "雪"),
    ] {
        let first = to_invoke_string(&attr);
        let back: BlobAttribute = from_invoke_string(&first).unwrap();
        assert_eq!(to_invoke_string(&back), first);
    }
}

#[test]
fn test_leading_brace_ambiguity_is_preserved() {
    let attr = blob("{literal}", "");
    let s = to_invoke_string(&attr);
    assert_eq!(s, "{literal}");
    assert!(from_invoke_string::<BlobAttribute>(&s)
        .unwrap_err()
        .is_malformed());
}

#[test]
fn test_schema_record_round_trip() {
    let schema = RecordSchema::new()
        .resolvable("Path")
        .resolvable("Name")
        .fixed("Access");

    let record = schema
        .record()
        .with("Path", "a")
        .with("Name", "b")
        .with("Access", "Read");
    let s = to_invoke_string(&record);
    assert_eq!(s, r#"{"Path":"a","Name":"b"}"#);

    let back = decode_with(&schema, Some(s.as_str())).unwrap();
    assert_eq!(back.get("Path"), Some("a"));
    assert_eq!(back.get("Name"), Some("b"));
    assert_eq!(back.get("Access"), None);
    assert_eq!(to_invoke_string(&back), s);
}

#[test]
fn test_schema_flat_field_override() {
    let schema = RecordSchema::new()
        .resolvable("Path")
        .resolvable("Name")
        .with_flat_field("Name");

    let record = schema.decode("report").unwrap();
    assert_eq!(record.get("Name"), Some("report"));
    assert_eq!(record.get("Path"), None);
    assert_eq!(to_invoke_string(&record), "report");
}
