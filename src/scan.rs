//! Tag string scanning.
//!
//! This module turns raw tag text into [`Tag`] values. All character-level
//! decisions go through one classifier, [`Tokens`], which recognizes the four
//! character classes that matter inside a value:
//!
//! - `\"`: an escaped quote, contributing one literal `"`
//! - `"`: a bare quote, which terminates a value
//! - `,`: an option separator (unless inside an escaped-quote region)
//! - anything else, taken literally
//!
//! The value-terminator search in [`Scanner`] and the option splitter
//! [`split_options`] both consume this token stream, so they cannot disagree
//! about where an escape starts or ends.
//!
//! ## Grammar
//!
//! ```text
//! tags   = { " " } [ pair { " " { " " } pair } ]
//! pair   = key ":" '"' value '"'
//! key    = 1*( any char except ":" '"' whitespace control )
//! value  = *( '\"' | any char except '"' )
//! ```

use std::borrow::Cow;
use std::mem;

use tracing::trace;

use crate::{Error, Result, Tag};

/// Character classes of a quoted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Char(char),
    EscapedQuote,
    Quote,
    Comma,
}

/// Classifies `input` into [`Token`]s, yielding each with its byte offset.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Tokens { input, position: 0 }
    }
}

impl Iterator for Tokens<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let rest = &self.input[start..];
        let ch = rest.chars().next()?;

        let token = match ch {
            '\\' if rest[1..].starts_with('"') => {
                self.position += 2;
                return Some((start, Token::EscapedQuote));
            }
            '"' => Token::Quote,
            ',' => Token::Comma,
            other => Token::Char(other),
        };
        self.position += ch.len_utf8();
        Some((start, token))
    }
}

/// Splits a raw value into unescaped options.
///
/// Commas between an opening and closing `\"` belong to the option. An empty
/// raw value has no options at all.
pub(crate) fn split_options(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut options = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for (_, token) in Tokens::new(raw) {
        match token {
            Token::Comma if !quoted => options.push(mem::take(&mut current)),
            Token::Comma => current.push(','),
            Token::EscapedQuote => {
                quoted = !quoted;
                current.push('"');
            }
            Token::Quote => current.push('"'),
            Token::Char(ch) => current.push(ch),
        }
    }
    options.push(current);
    options
}

/// Escapes literal quotes of a single option, the inverse of the unescape
/// applied by [`split_options`].
pub(crate) fn escape_option(option: &str) -> Cow<'_, str> {
    if option.contains('"') {
        Cow::Owned(option.replace('"', "\\\""))
    } else {
        Cow::Borrowed(option)
    }
}

/// Single left-to-right scanner over a tag string.
///
/// Yields one [`Tag`] per pair. After the first error the scanner is
/// exhausted.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `input` with trailing whitespace removed.
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner {
            input: input.trim_end(),
            position: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn skip_separators(&mut self) {
        while self.peek_char() == Some(' ') {
            self.next_char();
        }
    }

    /// Text of the pair starting at `start`, up to the next separator.
    fn fragment(&self, start: usize) -> &'a str {
        let rest = &self.input[start..];
        rest.split_once(' ').map_or(rest, |(head, _)| head)
    }

    fn scan_key(&mut self) -> Result<&'a str> {
        let start = self.position;
        loop {
            match self.peek_char() {
                Some(':') => break,
                Some(ch) if ch == '"' || ch.is_whitespace() || ch.is_control() => {
                    return Err(Error::syntax(self.fragment(start), self.position));
                }
                Some(_) => {
                    self.next_char();
                }
                None => return Err(Error::syntax(self.fragment(start), self.position)),
            }
        }

        let key = &self.input[start..self.position];
        if key.is_empty() {
            return Err(Error::syntax(self.fragment(start), self.position));
        }

        // ':' then the opening quote
        self.next_char();
        if self.peek_char() != Some('"') {
            return Err(Error::syntax(self.fragment(start), self.position));
        }
        self.next_char();
        Ok(key)
    }

    /// Scans up to the closing quote, returning the raw (still escaped) value.
    fn scan_value(&mut self, key: &str) -> Result<&'a str> {
        let start = self.position;
        let rest = &self.input[start..];

        for (offset, token) in Tokens::new(rest) {
            if token == Token::Quote {
                self.position = start + offset + 1;
                return Ok(&rest[..offset]);
            }
        }

        Err(Error::value_syntax(key, self.input.len()))
    }

    fn scan_pair(&mut self) -> Result<Tag> {
        let key = self.scan_key()?;
        let raw = self.scan_value(key)?;
        trace!(key, raw, "scanned tag pair");
        Ok(Tag {
            key: key.to_string(),
            options: split_options(raw),
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Tag>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_separators();
        if self.at_end() {
            return None;
        }

        let result = self.scan_pair();
        if result.is_err() {
            self.position = self.input.len();
        }
        Some(result)
    }
}
