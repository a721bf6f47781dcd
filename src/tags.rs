//! Ordered collection of [`Tag`] entries.
//!
//! [`Tags`] keeps entries in the order they were parsed or inserted. Keys are
//! not required to be unique: every key-based operation acts on the **first**
//! entry with that key, found by a linear scan. Later duplicates are left
//! untouched but still serialize.
//!
//! The collection has no internal synchronization. Share it read-only, or
//! confine mutation to one owner.
//!
//! ## Examples
//!
//! ```rust
//! use structtag::{parse, Tag};
//!
//! let mut tags = parse(r#"json:"foo,omitempty" structs:"bar,omitnested""#).unwrap();
//!
//! tags.set(Tag::new("json", ["bar"])).unwrap();
//! tags.add_options("structs", ["flatten"]);
//! tags.delete("missing");
//!
//! assert_eq!(tags.to_string(), r#"json:"bar" structs:"bar,omitnested,flatten""#);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::{Error, Result, Tag};

/// An ordered sequence of tags parsed from one tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tags {
    tags: Vec<Tag>,
}

impl Tags {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Tags { tags: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Tags {
            tags: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.tags.iter().position(|tag| tag.key == key)
    }

    /// Returns the first entry with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TagNotExist`] when no entry matches.
    pub fn get(&self, key: &str) -> Result<&Tag> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .ok_or_else(|| Error::not_exist(key))
    }

    /// Returns the first entry with `key` for in-place edits of its options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TagNotExist`] when no entry matches.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Tag> {
        self.tags
            .iter_mut()
            .find(|tag| tag.key == key)
            .ok_or_else(|| Error::not_exist(key))
    }

    /// Replaces the options of the first entry with `tag.key`, keeping its
    /// position, or appends `tag` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotSet`] if `tag.key` is empty.
    pub fn set(&mut self, tag: Tag) -> Result<()> {
        if tag.key.is_empty() {
            return Err(Error::KeyNotSet);
        }

        match self.position(&tag.key) {
            Some(index) => self.tags[index].options = tag.options,
            None => {
                trace!(key = %tag.key, "appending tag");
                self.tags.push(tag);
            }
        }
        Ok(())
    }

    /// Removes the first entry with `key`. Missing keys are ignored.
    pub fn delete(&mut self, key: &str) {
        if let Some(index) = self.position(key) {
            self.tags.remove(index);
        }
    }

    /// Appends each of `options` missing from the first entry with `key`.
    /// Missing keys are ignored.
    pub fn add_options<I, S>(&mut self, key: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Ok(tag) = self.get_mut(key) {
            tag.add_options(options);
        }
    }

    /// Removes each of `options` from the first entry with `key`. Missing keys
    /// and options are ignored.
    pub fn delete_options<I, S>(&mut self, key: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Ok(tag) = self.get_mut(key) {
            tag.delete_options(options);
        }
    }

    /// Number of entries, duplicate keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All entries in order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Keys in order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Whether the entry at `i` orders before the entry at `j` by key.
    ///
    /// Together with [`Tags::len`] and [`Tags::swap`] this is enough to drive
    /// any index-based sort.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.tags[i].key < self.tags[j].key
    }

    /// Swaps the entries at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.tags.swap(i, j);
    }

    /// Sorts entries by key, ascending. Entries with equal keys keep their
    /// relative order.
    ///
    /// ```rust
    /// use structtag::parse;
    ///
    /// let mut tags = parse(r#"json:"foo" structs:"bar,omitnested" hcl:"-""#).unwrap();
    /// tags.sort();
    /// assert_eq!(tags.to_string(), r#"hcl:"-" json:"foo" structs:"bar,omitnested""#);
    /// ```
    pub fn sort(&mut self) {
        self.tags.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Sorts entries with a caller-supplied comparator (stable).
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Tag, &Tag) -> Ordering,
    {
        self.tags.sort_by(compare);
    }

    /// Entries as a mutable slice, for reordering with any slice routine.
    pub fn as_mut_slice(&mut self) -> &mut [Tag] {
        &mut self.tags
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

impl FromStr for Tags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Tags { tags }
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Tags {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Appends without de-duplicating keys.
impl Extend<Tag> for Tags {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.tags.extend(iter);
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl Serialize for Tags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TagsVisitor;

impl Visitor<'_> for TagsVisitor {
    type Value = Tags;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a struct tag string")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Tags, E>
    where
        E: de::Error,
    {
        crate::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TagsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const DUPLICATES: &str = r#"json:"a" hcl:"b" json:"c""#;

    #[test]
    fn test_get_returns_first_match() {
        let tags = parse(DUPLICATES).unwrap();
        assert_eq!(tags.get("json").unwrap().options, ["a"]);
        assert!(tags.get("yaml").unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut tags = parse(r#"json:"foo" hcl:"-""#).unwrap();
        tags.get_mut("json")
            .unwrap()
            .options
            .push("omitempty".to_string());
        assert_eq!(tags.to_string(), r#"json:"foo,omitempty" hcl:"-""#);
    }

    #[test]
    fn test_duplicates_are_inert_but_serialized() {
        let mut tags = parse(DUPLICATES).unwrap();

        tags.set(Tag::new("json", ["x"])).unwrap();
        tags.add_options("json", ["omitempty"]);
        assert_eq!(tags.to_string(), r#"json:"x,omitempty" hcl:"b" json:"c""#);

        tags.delete("json");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.to_string(), r#"hcl:"b" json:"c""#);
    }

    #[test]
    fn test_set_rejects_empty_key() {
        let mut tags = Tags::new();
        assert_eq!(tags.set(Tag::new("", ["x"])), Err(Error::KeyNotSet));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_missing_key_operations_are_noops() {
        let mut tags = parse(r#"json:"foo""#).unwrap();
        tags.delete("hcl");
        tags.add_options("hcl", ["x"]);
        tags.delete_options("hcl", ["x"]);
        tags.delete_options("json", ["missing"]);
        assert_eq!(tags.to_string(), r#"json:"foo""#);
    }

    #[test]
    fn test_keys_and_iteration() {
        let tags = parse(DUPLICATES).unwrap();
        assert_eq!(tags.keys().collect::<Vec<_>>(), ["json", "hcl", "json"]);
        assert_eq!(tags.iter().count(), 3);
        assert_eq!((&tags).into_iter().count(), tags.tags().len());

        let owned: Vec<Tag> = tags.into_iter().collect();
        assert_eq!(owned[2], Tag::new("json", ["c"]));
    }

    #[test]
    fn test_less_and_swap() {
        let mut tags = parse(r#"json:"foo" hcl:"-""#).unwrap();
        assert!(!tags.less(0, 1));
        assert!(tags.less(1, 0));

        tags.swap(0, 1);
        assert_eq!(tags.to_string(), r#"hcl:"-" json:"foo""#);
    }

    #[test]
    fn test_sort_by_custom_order() {
        let mut tags = parse(r#"a:"1" bb:"2" ccc:"3""#).unwrap();
        tags.sort_by(|x, y| y.key.len().cmp(&x.key.len()));
        assert_eq!(tags.to_string(), r#"ccc:"3" bb:"2" a:"1""#);

        tags.as_mut_slice().reverse();
        assert_eq!(tags.to_string(), r#"a:"1" bb:"2" ccc:"3""#);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut tags: Tags = vec![Tag::new("json", ["foo"])].into_iter().collect();
        tags.extend([Tag::new("json", ["bar"])]);
        assert_eq!(tags.len(), 2);
        assert_eq!(Tags::from(tags.tags().to_vec()), tags);
    }

    #[test]
    fn test_serde_as_string() {
        let tags = parse(r#"json:"foo,bar:\"baz\"" hcl:"-""#).unwrap();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#""json:\"foo,bar:\\\"baz\\\"\" hcl:\"-\"""#);

        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);

        let err = serde_json::from_str::<Tags>(r#""json""#).unwrap_err();
        assert!(err.to_string().contains("bad syntax for struct tag pair"));
    }
}
