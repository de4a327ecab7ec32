//! Patterns for lambdas, case branches and definitions.

use super::Literal;

/// Pattern, generic over the constructor name representation `V`.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern<V> {
    /// Constructor pattern: `Just x`, `x :: xs`, `(a, b)`.
    Data(V, Vec<Pattern<V>>),
    /// Record destructuring: `{ x, y }`.
    Record(Vec<String>),
    /// `pattern as name`
    Alias(String, Box<Pattern<V>>),
    /// Variable binding.
    Var(String),
    /// Wildcard: `_`
    Anything,
    Literal(Literal),
}

impl<V> Pattern<V> {
    /// Convert the constructor names of this pattern.
    #[must_use]
    pub fn map_vars<W>(self, f: &mut impl FnMut(V) -> W) -> Pattern<W> {
        match self {
            Pattern::Data(ctor, args) => {
                let ctor = f(ctor);
                Pattern::Data(ctor, args.into_iter().map(|arg| arg.map_vars(f)).collect())
            }
            Pattern::Record(fields) => Pattern::Record(fields),
            Pattern::Alias(name, inner) => Pattern::Alias(name, Box::new(inner.map_vars(f))),
            Pattern::Var(name) => Pattern::Var(name),
            Pattern::Anything => Pattern::Anything,
            Pattern::Literal(lit) => Pattern::Literal(lit),
        }
    }
}
