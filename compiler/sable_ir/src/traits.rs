//! Focused capability traits.
//!
//! Each trait exposes one thing a node can provide, so consumers (printer,
//! diagnostics, later phases) depend only on what they read.

use crate::Span;

/// Types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Types that have a name.
///
/// For canonical identifiers this is the bare name, without module path.
pub trait Named {
    /// Get the name.
    fn name(&self) -> &str;
}

/// Types that carry a type of the current phase.
///
/// Generic over `T` so the tree does not depend on the type checker's
/// representation.
pub trait Typed<T> {
    /// Get the type of this item.
    fn ty(&self) -> &T;
}

/// Annotation values that can stand in for compiler-built nodes.
///
/// A synthetic annotation is a marker only. It must never be read as a
/// source position or an inferred type; check [`Synthetic::is_synthetic`]
/// before using it as either.
pub trait Synthetic {
    /// The marker value.
    fn synthetic() -> Self;

    /// Whether this value is the marker.
    fn is_synthetic(&self) -> bool;
}

impl Synthetic for () {
    fn synthetic() -> Self {}

    fn is_synthetic(&self) -> bool {
        true
    }
}

impl<T> Synthetic for Option<T> {
    fn synthetic() -> Self {
        None
    }

    fn is_synthetic(&self) -> bool {
        self.is_none()
    }
}
