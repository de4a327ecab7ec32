//! Source location spans.
//!
//! The parser annotates every node with the byte range it was read from.
//! Nodes the compiler builds itself carry [`Span::SYNTHETIC`] instead.

use std::fmt;

use crate::Synthetic;

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Marker for nodes that have no source text.
    ///
    /// Never a real location: `start > end` cannot come out of the parser.
    pub const SYNTHETIC: Span = Span {
        start: u32::MAX,
        end: 0,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes. Synthetic spans have length zero.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge two spans to create one covering both.
    ///
    /// A synthetic operand contributes nothing.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        match (self.is_synthetic(), other.is_synthetic()) {
            (true, _) => other,
            (_, true) => self,
            _ => Span {
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            },
        }
    }
}

impl Synthetic for Span {
    fn synthetic() -> Self {
        Span::SYNTHETIC
    }

    fn is_synthetic(&self) -> bool {
        *self == Span::SYNTHETIC
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            f.write_str("<synthetic>")
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}
