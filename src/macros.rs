/// Builds a [`Tags`](crate::Tags) collection in the order written.
///
/// Keys may be identifiers or string literals; options are any expressions
/// implementing `ToString`.
///
/// ```rust
/// use structtag::tags;
///
/// let tags = tags! {
///     json: ["name", "omitempty"],
///     "hcl": ["-"],
///     yaml: [],
/// };
/// assert_eq!(tags.to_string(), r#"json:"name,omitempty" hcl:"-" yaml:"""#);
/// ```
#[macro_export]
macro_rules! tags {
    (@key $key:ident) => {
        stringify!($key)
    };

    (@key $key:literal) => {
        $key
    };

    () => {
        $crate::Tags::new()
    };

    ($($key:tt : [ $($option:expr),* $(,)? ]),+ $(,)?) => {
        $crate::Tags::from(::std::vec![
            $(
                $crate::Tag::new($crate::tags!(@key $key), {
                    let options: ::std::vec::Vec<::std::string::String> =
                        ::std::vec![$(::std::string::ToString::to_string(&$option)),*];
                    options
                })
            ),+
        ])
    };
}
