//! Names, listings and exported values.

use sable_ir::reserved::is_operator;
use sable_ir::{Canonical, Listing, Named, Raw, Value};

use super::Pretty;
use crate::context::FormatContext;
use crate::emitter::Emitter;

impl Pretty for Raw {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        ctx.emit(&self.0);
    }
}

/// Qualified with its module path when it has one.
impl Pretty for Canonical {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        ctx.emit(&self.to_string());
    }
}

/// Bare names in listings and exports.
impl Pretty for String {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        ctx.parens_if(is_operator(self), |ctx| ctx.emit(self));
    }
}

/// A name in value position: operators become `(+)`.
pub(super) fn variable<E: Emitter, V: Pretty + Named>(ctx: &mut FormatContext<E>, var: &V) {
    ctx.parens_if(is_operator(var.name()), |ctx| var.pretty(ctx, false));
}

/// `(a, b)`, `(..)`, `(a, ..)` or `()`.
impl<T: Pretty> Pretty for Listing<T> {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        ctx.emit("(");
        ctx.separated(&self.explicits, ", ", |ctx, item| item.pretty(ctx, false));
        if self.open {
            if !self.explicits.is_empty() {
                ctx.emit(", ");
            }
            ctx.emit("..");
        }
        ctx.emit(")");
    }
}

impl Pretty for Value {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        match self {
            Value::Value(name) => name.pretty(ctx, false),
            Value::Alias(name) => ctx.emit(name),
            Value::Union(name, ctors) => {
                ctx.emit(name);
                ctors.pretty(ctx, false);
            }
        }
    }
}
