//! # Tag Scanner
//!
//! Finds every open or close tag named `think` or `details` in a single
//! forward scan. Tag names match ASCII case-insensitively; anything between
//! the name and the next `>` is attribute content and is skipped without
//! being interpreted.
//!
//! The tag name must be followed by whitespace or `>`, so `<thinking>` and
//! `<detailsx>` are not tags.

use std::sync::LazyLock;

use regex::Regex;

use super::span::Span;

/// Capture 1 is `/` for close tags; capture 2 or 3 names the keyword.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/)?(?i-u:(think)|(details))(?:\s[^>]*)?>").expect("TAG_PATTERN")
});

/// The keyword a tag was spelled with.
///
/// Both keywords open the same kind of reasoning block; the keyword only
/// matters for pairing a close tag with its opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Think,
    Details,
}

impl TagKind {
    /// The tag name as written in lowercase markup.
    pub const fn keyword(self) -> &'static str {
        match self {
            TagKind::Think => "think",
            TagKind::Details => "details",
        }
    }
}

/// A recognized occurrence of an opening or closing tag in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagToken {
    pub kind: TagKind,
    pub is_close: bool,
    /// Byte range of the whole tag markup, `<` through `>`.
    pub span: Span,
}

/// Lazily yields [`TagToken`]s from left to right.
///
/// Each match is at least `<think>` long, and scanning continues from the end
/// of the previous match, so the scanner always makes forward progress.
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::resume(input, 0)
    }

    /// Starts scanning at byte offset `pos`.
    ///
    /// Resuming at the end of a previously yielded token produces exactly the
    /// tokens a scan from the start would have produced after it.
    pub fn resume(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// Byte offset where the next search starts.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for TagScanner<'_> {
    type Item = TagToken;

    fn next(&mut self) -> Option<TagToken> {
        if self.pos > self.input.len() {
            return None;
        }
        let caps = TAG_PATTERN.captures_at(self.input, self.pos)?;
        let whole = caps.get(0)?;
        self.pos = whole.end();

        let kind = if caps.get(2).is_some() {
            TagKind::Think
        } else {
            TagKind::Details
        };

        Some(TagToken {
            kind,
            is_close: caps.get(1).is_some(),
            span: Span::new(whole.start(), whole.end()),
        })
    }
}
