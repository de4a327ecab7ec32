//! Expression Types
//!
//! One tree definition for every phase. The four type slots are:
//!
//! - `A`: annotation on every node (span after parsing, type after checking)
//! - `D`: definitions bound by `let`
//! - `V`: variable references and operators ([`Raw`](crate::Raw), then
//!   [`Canonical`](crate::Canonical))
//! - `T`: types carried by ports
//!
//! Nothing here validates arity. Producers build well-formed trees and
//! consumers assume them.

use super::{Literal, Pattern, PortImpl};
use crate::{Span, Spanned};

/// A node paired with its annotation.
///
/// The only way metadata is attached to the tree: every expression node is
/// wrapped in exactly one envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotated<A, N> {
    pub annotation: A,
    pub node: N,
}

impl<A, N> Annotated<A, N> {
    pub fn new(annotation: A, node: N) -> Self {
        Annotated { annotation, node }
    }

    /// Replace the annotation, keeping the node.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Annotated<B, N> {
        Annotated {
            annotation: f(self.annotation),
            node: self.node,
        }
    }
}

impl<N> Spanned for Annotated<Span, N> {
    fn span(&self) -> Span {
        self.annotation
    }
}

/// Annotated expression.
pub type Expr<A, D, V, T> = Annotated<A, ExprKind<A, D, V, T>>;

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind<A, D, V, T> {
    Literal(Literal),

    /// Variable reference
    Var(V),

    /// `[low..high]`
    Range {
        low: Box<Expr<A, D, V, T>>,
        high: Box<Expr<A, D, V, T>>,
    },

    /// `[a, b, c]`
    ExplicitList(Vec<Expr<A, D, V, T>>),

    /// Infix operator application. The operator is a variable like any other.
    Binop {
        op: V,
        left: Box<Expr<A, D, V, T>>,
        right: Box<Expr<A, D, V, T>>,
    },

    /// Single-parameter lambda. `\a b -> e` is two nested lambdas.
    Lambda {
        param: Pattern<V>,
        body: Box<Expr<A, D, V, T>>,
    },

    /// Application of one argument. `f a b` is `App(App(f, a), b)`.
    App {
        func: Box<Expr<A, D, V, T>>,
        arg: Box<Expr<A, D, V, T>>,
    },

    /// Guarded conditional. The first branch whose condition holds wins.
    MultiIf(Vec<(Expr<A, D, V, T>, Expr<A, D, V, T>)>),

    Let {
        defs: Vec<D>,
        body: Box<Expr<A, D, V, T>>,
    },

    /// The first branch whose pattern matches wins.
    Case {
        scrutinee: Box<Expr<A, D, V, T>>,
        branches: Vec<(Pattern<V>, Expr<A, D, V, T>)>,
    },

    /// Constructor application. Tuples use the reserved `_Tuple{n}` names
    /// and lists the reserved `::` and `[]` constructors.
    Data {
        ctor: String,
        args: Vec<Expr<A, D, V, T>>,
    },

    /// `record.field`
    Access {
        record: Box<Expr<A, D, V, T>>,
        field: String,
    },

    /// `{ record - field }`
    Remove {
        record: Box<Expr<A, D, V, T>>,
        field: String,
    },

    /// `{ record | field = value }`
    Insert {
        record: Box<Expr<A, D, V, T>>,
        field: String,
        value: Box<Expr<A, D, V, T>>,
    },

    /// `{ record | f1 <- e1, f2 <- e2 }`, fields in written order.
    Modify {
        record: Box<Expr<A, D, V, T>>,
        fields: Vec<(String, Expr<A, D, V, T>)>,
    },

    /// `{ f1 = e1, f2 = e2 }`, fields in written order.
    Record(Vec<(String, Expr<A, D, V, T>)>),

    /// Only present after type checking.
    Port(PortImpl<Box<Expr<A, D, V, T>>, T>),

    /// Inline shader source. Only present after type checking.
    Shader { uid: String, source: String },
}

impl<A, D, V, T> ExprKind<A, D, V, T> {
    /// Tuple of the given elements, encoded as a `_Tuple{n}` constructor.
    pub fn tuple(elements: Vec<Expr<A, D, V, T>>) -> Self {
        ExprKind::Data {
            ctor: crate::reserved::tuple_name(elements.len()),
            args: elements,
        }
    }

    /// Whether this node is the integer literal `n`.
    pub fn is_int_literal(&self, n: i64) -> bool {
        matches!(self, ExprKind::Literal(Literal::Int(value)) if *value == n)
    }

    /// Move this node out, leaving an empty list in its place.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, ExprKind::ExplicitList(Vec::new()))
    }

    fn has_children(&self) -> bool {
        match self {
            ExprKind::Literal(_)
            | ExprKind::Var(_)
            | ExprKind::Shader { .. }
            | ExprKind::Port(PortImpl::In { .. }) => false,
            ExprKind::ExplicitList(items) | ExprKind::Data { args: items, .. } => !items.is_empty(),
            _ => true,
        }
    }

    /// Move the node of every direct child onto `pending`.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            ExprKind::Literal(_)
            | ExprKind::Var(_)
            | ExprKind::Shader { .. }
            | ExprKind::Port(PortImpl::In { .. }) => {}
            ExprKind::Range {
                low: left,
                high: right,
            }
            | ExprKind::Binop { left, right, .. }
            | ExprKind::App {
                func: left,
                arg: right,
            }
            | ExprKind::Insert {
                record: left,
                value: right,
                ..
            } => {
                detach(left, pending);
                detach(right, pending);
            }
            ExprKind::ExplicitList(items) | ExprKind::Data { args: items, .. } => {
                for item in items {
                    detach(item, pending);
                }
            }
            ExprKind::Lambda { body, .. }
            | ExprKind::Let { body, .. }
            | ExprKind::Access { record: body, .. }
            | ExprKind::Remove { record: body, .. }
            | ExprKind::Port(
                PortImpl::Out { expr: body, .. } | PortImpl::Task { expr: body, .. },
            ) => {
                detach(body, pending);
            }
            ExprKind::MultiIf(branches) => {
                for (cond, branch) in branches {
                    detach(cond, pending);
                    detach(branch, pending);
                }
            }
            ExprKind::Case {
                scrutinee,
                branches,
            } => {
                detach(scrutinee, pending);
                for (_, branch) in branches {
                    detach(branch, pending);
                }
            }
            ExprKind::Modify { record, fields } => {
                detach(record, pending);
                for (_, value) in fields {
                    detach(value, pending);
                }
            }
            ExprKind::Record(fields) => {
                for (_, value) in fields {
                    detach(value, pending);
                }
            }
        }
    }
}

fn detach<A, D, V, T>(expr: &mut Expr<A, D, V, T>, pending: &mut Vec<ExprKind<A, D, V, T>>) {
    if expr.node.has_children() {
        pending.push(expr.node.take());
    }
}

/// Teardown runs on a worklist so dropping a deep tree does not recurse.
///
/// Definitions in a `let` are dropped normally; only expression edges are
/// flattened.
impl<A, D, V, T> Drop for ExprKind<A, D, V, T> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl<A, D, V, T> Annotated<A, ExprKind<A, D, V, T>> {
    /// Split a chain of lambdas into its parameters and the innermost body.
    ///
    /// Collection stops at the first node that is not a lambda.
    pub fn collect_lambdas(&self) -> (Vec<&Pattern<V>>, &Expr<A, D, V, T>) {
        let mut params = Vec::new();
        let mut current = self;
        while let ExprKind::Lambda { param, body } = &current.node {
            params.push(param);
            current = body.as_ref();
        }
        (params, current)
    }

    /// Split a chain of applications into the function and its arguments,
    /// in application order.
    pub fn collect_apps(&self) -> (&Expr<A, D, V, T>, Vec<&Expr<A, D, V, T>>) {
        let mut args = Vec::new();
        let mut current = self;
        while let ExprKind::App { func, arg } = &current.node {
            args.push(arg.as_ref());
            current = func.as_ref();
        }
        args.reverse();
        (current, args)
    }
}
