//! Definitions, phase aliases and tree-building helpers.

use super::{Annotated, Expr, ExprKind, Pattern, Type};
use crate::reserved::SAVE_ENV;
use crate::{Canonical, Raw, Span, Synthetic};

/// A `let` or top-level definition: `pattern = body`, optionally preceded by
/// `pattern : type`.
#[derive(Clone, Debug, PartialEq)]
pub struct Def<A, V, T> {
    pub pattern: Pattern<V>,
    pub body: Expr<A, Def<A, V, T>, V, T>,
    pub annotation: Option<T>,
}

impl<A, V, T> Def<A, V, T> {
    pub fn new(pattern: Pattern<V>, body: Expr<A, Def<A, V, T>, V, T>) -> Self {
        Def {
            pattern,
            body,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: T) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

/// Definition as produced by the parser.
pub type ParsedDef = Def<Span, Raw, Type<Raw>>;
/// Expression as produced by the parser.
pub type ParsedExpr = Expr<Span, ParsedDef, Raw, Type<Raw>>;

/// Definition after name resolution.
pub type CanonicalDef = Def<Span, Canonical, Type<Canonical>>;
/// Expression after name resolution.
pub type CanonicalExpr = Expr<Span, CanonicalDef, Canonical, Type<Canonical>>;

impl<A, D, T> ExprKind<A, D, Raw, T> {
    /// Reference to an unresolved name.
    pub fn raw_var(name: impl Into<String>) -> Self {
        ExprKind::Var(Raw::new(name))
    }
}

impl<A, D, T> ExprKind<A, D, Canonical, T> {
    /// Reference to a name bound in the enclosing scope.
    pub fn local_var(name: impl Into<String>) -> Self {
        ExprKind::Var(Canonical::local(name))
    }
}

/// `let defs in <save-environment>`.
///
/// Later phases drop bindings nothing refers to. Wrapping definitions this
/// way keeps them alive: the body names [`SAVE_ENV`], which no user code can
/// write. Both the `let` and its body carry synthetic annotations.
pub fn dummy_let<A, D, T>(defs: Vec<D>) -> Expr<A, D, Canonical, T>
where
    A: Synthetic,
{
    let body = Annotated::new(A::synthetic(), ExprKind::Var(Canonical::builtin(SAVE_ENV)));
    Annotated::new(
        A::synthetic(),
        ExprKind::Let {
            defs,
            body: Box::new(body),
        },
    )
}
