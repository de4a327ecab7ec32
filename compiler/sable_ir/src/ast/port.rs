//! Port implementations attached by the type checker.

use crate::{Named, Typed};

/// How a port talks to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum PortImpl<E, T> {
    /// Driven by the host.
    In { name: String, ty: T },
    /// Sends the value of `expr` to the host.
    Out { name: String, expr: E, ty: T },
    /// Runs the deferred computation `expr` on behalf of the host.
    Task { name: String, expr: E, ty: T },
}

impl<E, T> PortImpl<E, T> {
    /// The carried expression, if this port has one.
    pub fn expr(&self) -> Option<&E> {
        match self {
            PortImpl::In { .. } => None,
            PortImpl::Out { expr, .. } | PortImpl::Task { expr, .. } => Some(expr),
        }
    }

    /// Convert the expression and type of this port.
    pub fn map<F, U>(
        self,
        expr_fn: impl FnOnce(E) -> F,
        ty_fn: impl FnOnce(T) -> U,
    ) -> PortImpl<F, U> {
        match self {
            PortImpl::In { name, ty } => PortImpl::In { name, ty: ty_fn(ty) },
            PortImpl::Out { name, expr, ty } => PortImpl::Out {
                name,
                expr: expr_fn(expr),
                ty: ty_fn(ty),
            },
            PortImpl::Task { name, expr, ty } => PortImpl::Task {
                name,
                expr: expr_fn(expr),
                ty: ty_fn(ty),
            },
        }
    }
}

impl<E, T> Named for PortImpl<E, T> {
    fn name(&self) -> &str {
        match self {
            PortImpl::In { name, .. }
            | PortImpl::Out { name, .. }
            | PortImpl::Task { name, .. } => name,
        }
    }
}

impl<E, T> Typed<T> for PortImpl<E, T> {
    fn ty(&self) -> &T {
        match self {
            PortImpl::In { ty, .. } | PortImpl::Out { ty, .. } | PortImpl::Task { ty, .. } => ty,
        }
    }
}
