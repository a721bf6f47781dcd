//! # structtag
//!
//! Parse, edit and re-serialize struct tag strings: space-separated
//! `key:"value"` pairs whose value is a comma-separated list of options.
//!
//! ```text
//! json:"name,omitempty" hcl:"-" validate:"default:\"a,b\""
//! ```
//!
//! ## Key Features
//!
//! - **Lossless**: parsing then printing gives back the input, minus trailing
//!   whitespace and with pairs re-joined by single spaces
//! - **Ordered**: entries and options keep their order through every edit
//! - **Escapes**: `\"` inside a value is a literal quote, and commas between an
//!   opening and closing `\"` do not split options
//! - **Serde Compatible**: [`Tags`] serializes as its tag string
//!
//! ## Quick Start
//!
//! ```rust
//! use structtag::{parse, Tag};
//!
//! let mut tags = parse(r#"json:"foo,omitempty" structs:"bar,omitnested" hcl:"-""#).unwrap();
//!
//! let json = tags.get("json").unwrap();
//! assert_eq!(json.value(), Some("foo"));
//! assert!(json.has_option("omitempty"));
//!
//! tags.set(Tag::new("json", ["bar"])).unwrap();
//! tags.delete("structs");
//! tags.add_options("hcl", ["optional"]);
//!
//! assert_eq!(tags.to_string(), r#"json:"bar" hcl:"-,optional""#);
//! ```
//!
//! ### Sorting
//!
//! Entries are never reordered implicitly. Use [`Tags::sort`] for key order,
//! [`Tags::sort_by`] for anything else, or drive [`Tags::len`],
//! [`Tags::less`] and [`Tags::swap`] from an index-based sort.
//!
//! ### Building Tags with the tags! Macro
//!
//! ```rust
//! use structtag::tags;
//!
//! let tags = tags! { json: ["id"], db: ["user_id", "pk"] };
//! assert_eq!(tags.to_string(), r#"json:"id" db:"user_id,pk""#);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass, no backtracking
//! - **Lookup**: O(k) linear scan over k entries, first match wins
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Parsing is all-or-nothing: an error never comes with partial tags
//! - No panics in the public API except the documented index bounds of
//!   [`Tags::less`] and [`Tags::swap`]

pub mod error;
pub mod macros;
mod scan;
pub mod tag;
pub mod tags;

pub use error::{Error, Result};
pub use tag::Tag;
pub use tags::Tags;

use tracing::debug;

/// Parse a tag string into an ordered [`Tags`] collection.
///
/// Trailing whitespace is ignored and an empty input yields an empty
/// collection.
///
/// # Examples
///
/// ```rust
/// use structtag::parse;
///
/// let tags = parse(r#"json:"foo,bar:\"baz\"""#).unwrap();
/// assert_eq!(tags.get("json").unwrap().options, ["foo", r#"bar:"baz""#]);
///
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse("json").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] when a pair lacks its `key:"` introducer or has an
/// invalid key, and [`Error::ValueSyntax`] when a value is unterminated.
pub fn parse(input: &str) -> Result<Tags> {
    scan::Scanner::new(input)
        .collect::<Result<Tags>>()
        .map_err(|err| {
            debug!(%err, input, "failed to parse tag string");
            err
        })
}
