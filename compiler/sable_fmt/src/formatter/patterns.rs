//! Pattern and Definition Formatting

use sable_ir::reserved::{is_tuple_name, CONS, NIL};
use sable_ir::{Def, Named, Pattern};

use super::Pretty;
use crate::context::FormatContext;
use crate::emitter::Emitter;

impl<V: Pretty + Named> Pretty for Pattern<V> {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool) {
        match self {
            Pattern::Data(ctor, args) => data_pattern(ctx, ctor, args, needs_parens),
            Pattern::Record(fields) => {
                ctx.emit("{");
                ctx.separated(fields, ", ", |ctx, field| ctx.emit(field));
                ctx.emit("}");
            }
            Pattern::Alias(name, inner) => ctx.parens_if(needs_parens, |ctx| {
                inner.pretty(ctx, true);
                ctx.emit(" as ");
                name.pretty(ctx, false);
            }),
            Pattern::Var(name) => name.pretty(ctx, false),
            Pattern::Anything => ctx.emit("_"),
            Pattern::Literal(lit) => lit.pretty(ctx, needs_parens),
        }
    }
}

fn data_pattern<E: Emitter, V: Pretty + Named>(
    ctx: &mut FormatContext<E>,
    ctor: &V,
    args: &[Pattern<V>],
    needs_parens: bool,
) {
    match args {
        [head, tail] if ctor.name() == CONS => ctx.parens_if(needs_parens, |ctx| {
            head.pretty(ctx, true);
            ctx.emit(" :: ");
            // `::` is right-associative.
            let tail_is_cons = matches!(
                tail,
                Pattern::Data(next, rest) if next.name() == CONS && rest.len() == 2
            );
            tail.pretty(ctx, !tail_is_cons);
        }),
        [] if ctor.name() == NIL => ctx.emit("[]"),
        _ if is_tuple_name(ctor.name()) => {
            ctx.emit("(");
            ctx.separated(args, ", ", |ctx, arg| arg.pretty(ctx, false));
            ctx.emit(")");
        }
        _ => ctx.parens_if(needs_parens && !args.is_empty(), |ctx| {
            ctor.pretty(ctx, false);
            for arg in args {
                ctx.emit_space();
                arg.pretty(ctx, true);
            }
        }),
    }
}

/// `p : T` on its own line when annotated, then `p = body`.
impl<A, V: Pretty + Named, T: Pretty> Pretty for Def<A, V, T> {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, _: bool) {
        let start = ctx.column();
        if let Some(annotation) = &self.annotation {
            self.pattern.pretty(ctx, false);
            ctx.emit(" : ");
            annotation.pretty(ctx, false);
            ctx.newline_at(start);
        }
        self.pattern.pretty(ctx, false);
        ctx.emit(" = ");
        self.body.pretty(ctx, false);
    }
}
