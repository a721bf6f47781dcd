//! A single `key:"value"` entry.
//!
//! ## Examples
//!
//! ```rust
//! use structtag::Tag;
//!
//! let tag = Tag::new("json", ["name", "omitempty"]);
//! assert_eq!(tag.value(), Some("name"));
//! assert_eq!(tag.raw_value(), "name,omitempty");
//! assert_eq!(tag.to_string(), r#"json:"name,omitempty""#);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scan::{escape_option, Scanner};
use crate::{Error, Result};

/// One parsed pair: a key and its comma-separated options.
///
/// The first option is conventionally the primary value (for `json` the field
/// name), the rest are modifiers such as `omitempty`. Option order is kept
/// through every mutation.
///
/// Only `\"` is an escape, so a backslash is printed as is. If the last option
/// ends in a backslash, the printed tag reads `key:"...\"` and no longer
/// parses. This can happen after removing options from a parsed tag such as
/// `k:"a\,b"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub options: Vec<String>,
}

impl Tag {
    /// Creates a tag from a key and options in order.
    pub fn new<K, I, S>(key: K, options: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tag {
            key: key.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The primary value: the first option, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }

    /// Options after the primary value.
    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        self.options.get(1..).unwrap_or_default()
    }

    /// Returns `true` if any option equals `option` exactly.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|opt| opt == option)
    }

    /// Appends each of `options` not already present, in the order given.
    ///
    /// ```rust
    /// use structtag::Tag;
    ///
    /// let mut tag = Tag::new("json", ["name"]);
    /// tag.add_options(["omitempty", "string", "omitempty"]);
    /// assert_eq!(tag.options, ["name", "omitempty", "string"]);
    /// ```
    pub fn add_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for option in options {
            let option = option.as_ref();
            if !self.has_option(option) {
                self.options.push(option.to_string());
            }
        }
    }

    /// Removes every option equal to one of `options`, keeping the order of
    /// the rest.
    ///
    /// Leaving an option that ends in a backslash at the end makes the tag
    /// unprintable as a parseable string; see [`Tag`].
    pub fn delete_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<S> = options.into_iter().collect();
        self.options
            .retain(|opt| !doomed.iter().any(|d| d.as_ref() == opt.as_str()));
    }

    /// The options joined by commas, quotes left as they are.
    #[must_use]
    pub fn raw_value(&self) -> String {
        self.options.join(",")
    }

    /// The options joined by commas with literal quotes escaped, exactly as
    /// they appear between the quotes of [`Tag`]'s `Display` output. Feeding
    /// this back through the parser yields the same options.
    #[must_use]
    pub fn escaped_value(&self) -> String {
        self.options
            .iter()
            .map(|opt| escape_option(opt))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\"{}\"", self.key, self.escaped_value())
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parses exactly one pair.
    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        let tag = match scanner.next() {
            Some(tag) => tag?,
            None => return Err(Error::syntax(s, 0)),
        };

        scanner.skip_separators();
        if !scanner.at_end() {
            return Err(Error::TrailingInput {
                position: scanner.position(),
            });
        }
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Tag::new("json", Vec::<String>::new()).to_string(), r#"json:"""#);
        assert_eq!(Tag::new("hcl", ["-"]).to_string(), r#"hcl:"-""#);
        assert_eq!(
            Tag::new("json", ["foo", r#"bar:"baz""#]).to_string(),
            r#"json:"foo,bar:\"baz\"""#
        );
    }

    #[test]
    fn test_value_and_modifiers() {
        let tag = Tag::new("json", ["foo", "omitempty", "string"]);
        assert_eq!(tag.value(), Some("foo"));
        assert_eq!(tag.modifiers(), ["omitempty", "string"]);

        let empty = Tag::new("json", Vec::<String>::new());
        assert_eq!(empty.value(), None);
        assert!(empty.modifiers().is_empty());
    }

    #[test]
    fn test_has_option_is_case_sensitive() {
        let tag = Tag::new("json", ["foo", "omitempty"]);
        assert!(tag.has_option("omitempty"));
        assert!(!tag.has_option("OmitEmpty"));
    }

    #[test]
    fn test_add_and_delete_options() {
        let mut tag = Tag::new("structs", ["bar", "omitempty"]);
        tag.add_options(["omitempty"]);
        assert_eq!(tag.options, ["bar", "omitempty"]);

        tag.add_options(["omitnested", "flatten"]);
        assert_eq!(tag.options, ["bar", "omitempty", "omitnested", "flatten"]);

        tag.delete_options(["omitempty", "flatten", "missing"]);
        assert_eq!(tag.options, ["bar", "omitnested"]);
    }

    #[test]
    fn test_trailing_backslash_option_does_not_reparse() {
        let mut tag: Tag = r#"k:"a\,b""#.parse().unwrap();
        assert_eq!(tag.options, [r"a\", "b"]);
        assert_eq!(tag.to_string(), r#"k:"a\,b""#);

        tag.delete_options(["b"]);
        let printed = tag.to_string();
        assert_eq!(printed, r#"k:"a\""#);
        assert!(matches!(
            printed.parse::<Tag>(),
            Err(Error::ValueSyntax { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let tag: Tag = r#"json:"foo,bar:\"baz\"" "#.parse().unwrap();
        assert_eq!(tag, Tag::new("json", ["foo", r#"bar:"baz""#]));
        assert_eq!(tag.raw_value(), r#"foo,bar:"baz""#);
        assert_eq!(tag.escaped_value(), r#"foo,bar:\"baz\""#);
    }

    #[test]
    fn test_from_str_rejects_other_counts() {
        assert!(matches!("".parse::<Tag>(), Err(Error::Syntax { .. })));
        assert_eq!(
            r#"json:"a" hcl:"b""#.parse::<Tag>(),
            Err(Error::TrailingInput { position: 9 })
        );
    }

    #[test]
    fn test_serde_struct_shape() {
        let tag = Tag::new("json", ["foo", "omitempty"]);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"key":"json","options":["foo","omitempty"]}"#);
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
