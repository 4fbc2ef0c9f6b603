/// Implements [`ResolvableFields`](crate::ResolvableFields) for a struct from
/// a static field list.
///
/// Each entry is `resolve "Name" => member` or `fixed "Name" => member`,
/// listed in declaration order. Members may be any type implementing
/// [`FieldValue`](crate::FieldValue): `String`, `&str` or `Option` of either.
///
/// ```rust
/// use invoke_string::{resolvable_fields, to_invoke_string};
///
/// struct Blob {
///     path: String,
///     name: Option<String>,
///     access: String,
/// }
///
/// resolvable_fields!(Blob {
///     resolve "Path" => path,
///     resolve "Name" => name,
///     fixed "Access" => access,
/// });
///
/// let blob = Blob { path: "a".into(), name: Some("b".into()), access: "Read".into() };
/// assert_eq!(to_invoke_string(&blob), r#"{"Path":"a","Name":"b"}"#);
/// ```
#[macro_export]
macro_rules! resolvable_fields {
    (@kind resolve) => {
        true
    };

    (@kind fixed) => {
        false
    };

    ($ty:ty { $($kind:ident $name:literal => $member:ident),* $(,)? }) => {
        impl $crate::ResolvableFields for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            $name,
                            $crate::FieldValue::field_value(&self.$member),
                            $crate::resolvable_fields!(@kind $kind),
                        )
                    ),*
                ]
            }
        }
    };
}
