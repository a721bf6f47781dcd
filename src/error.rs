//! Error types for tag parsing and lookup.
//!
//! ## Error Categories
//!
//! - **Pair syntax**: a pair is missing its `key:"` introducer or has an invalid key
//! - **Value syntax**: a quoted value never closes
//! - **Lookup**: [`Tags::get`](crate::Tags::get) found no entry for a key
//! - **Insertion**: [`Tags::set`](crate::Tags::set) was handed a tag without a key
//!
//! ## Examples
//!
//! ```rust
//! use structtag::{parse, Error};
//!
//! let err = parse("json").unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! assert!(err.to_string().contains("bad syntax for struct tag pair"));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while parsing or querying tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pair does not have the `key:"` shape.
    #[error("bad syntax for struct tag pair at byte {position}: {fragment:?}")]
    Syntax { fragment: String, position: usize },

    /// The quoted value of `key` is not terminated.
    #[error("bad syntax for struct tag value of key {key:?} at byte {position}")]
    ValueSyntax { key: String, position: usize },

    /// A tag without a key was handed to [`Tags::set`](crate::Tags::set).
    #[error("tag key is not set")]
    KeyNotSet,

    /// No entry matches the requested key.
    #[error("tag does not exist: {key:?}")]
    TagNotExist { key: String },

    /// More text follows the single pair expected by [`Tag`](crate::Tag)'s `FromStr`.
    #[error("unexpected input after tag pair at byte {position}")]
    TrailingInput { position: usize },
}

impl Error {
    /// Creates a pair syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structtag::Error;
    ///
    /// let err = Error::syntax("json", 4);
    /// assert!(err.to_string().contains("byte 4"));
    /// ```
    pub fn syntax(fragment: &str, position: usize) -> Self {
        Error::Syntax {
            fragment: fragment.to_string(),
            position,
        }
    }

    /// Creates an unterminated-value error for `key`.
    pub fn value_syntax(key: &str, position: usize) -> Self {
        Error::ValueSyntax {
            key: key.to_string(),
            position,
        }
    }

    /// Creates a lookup error for `key`.
    pub fn not_exist(key: &str) -> Self {
        Error::TagNotExist {
            key: key.to_string(),
        }
    }

    /// Returns `true` if this error was raised while parsing input text.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. } | Error::ValueSyntax { .. } | Error::TrailingInput { .. }
        )
    }

    /// Returns `true` if this is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TagNotExist { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
