//! Type Expression Formatting

use sable_ir::reserved::is_tuple_name;
use sable_ir::{Named, Type};

use super::Pretty;
use crate::context::FormatContext;
use crate::emitter::Emitter;

impl<V: Pretty + Named> Pretty for Type<V> {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool) {
        match self {
            Type::Lambda(..) => ctx.parens_if(needs_parens, |ctx| {
                let mut current = self;
                while let Type::Lambda(arg, result) = current {
                    // Only function arguments need parentheses: `(a -> b) -> c`.
                    arg.pretty(ctx, matches!(**arg, Type::Lambda(..)));
                    ctx.emit(" -> ");
                    current = result.as_ref();
                }
                current.pretty(ctx, false);
            }),
            Type::Var(name) => ctx.emit(name),
            Type::Con(ctor) => ctor.pretty(ctx, false),
            Type::App(ctor, args) => match ctor.as_ref() {
                Type::Con(name) if is_tuple_name(name.name()) => {
                    ctx.emit("(");
                    ctx.separated(args, ", ", |ctx, arg| arg.pretty(ctx, false));
                    ctx.emit(")");
                }
                _ => ctx.parens_if(needs_parens && !args.is_empty(), |ctx| {
                    ctor.pretty(ctx, true);
                    for arg in args {
                        ctx.emit_space();
                        arg.pretty(ctx, true);
                    }
                }),
            },
            Type::Record(fields, ext) => {
                if fields.is_empty() && ext.is_none() {
                    ctx.emit("{}");
                    return;
                }
                ctx.emit("{ ");
                if let Some(ext) = ext {
                    ext.pretty(ctx, false);
                    ctx.emit(" | ");
                }
                ctx.separated(fields, ", ", |ctx, (name, ty)| {
                    ctx.emit(name);
                    ctx.emit(" : ");
                    ty.pretty(ctx, false);
                });
                ctx.emit(" }");
            }
        }
    }
}
