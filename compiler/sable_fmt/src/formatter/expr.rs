//! Expression Formatting
//!
//! The tree stores surface sugar in desugared form. Rendering puts the sugar
//! back with an ordered list of shape checks per node kind; the first match
//! wins, so a more specific shape always shadows a more general one:
//!
//! 1. `0 - x` prints as `-x`.
//! 2. Other operators print infix; alphanumeric ones in backquotes.
//! 3. Application chains print as `f a b`.
//! 4. Lambda chains print as `\a b -> e`.
//! 5. A two-argument `::` constructor prints as `h :: t`.
//! 6. A nullary `[]` constructor prints as `[]`.
//! 7. A `_Tuple{n}` constructor prints as `(a, b)`.
//! 8. Insertion into a removal prints as the rename `{r - old | new = v}`.
//! 9. Removal, modification and record literals keep field order.
//! 10. Ports and shaders print as placeholders.

use sable_ir::reserved::{is_operator, is_tuple_name, CONS, NIL};
use sable_ir::stack::ensure_sufficient_stack;
use sable_ir::{Annotated, Expr, ExprKind, Named};

use super::symbols::variable;
use super::Pretty;
use crate::context::FormatContext;
use crate::emitter::Emitter;

/// Annotations never print.
impl<A, N: Pretty> Pretty for Annotated<A, N> {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool) {
        ensure_sufficient_stack(|| self.node.pretty(ctx, needs_parens));
    }
}

impl<A, D, V, T> Pretty for ExprKind<A, D, V, T>
where
    D: Pretty,
    V: Pretty + Named,
{
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool) {
        match self {
            ExprKind::Literal(lit) => lit.pretty(ctx, needs_parens),
            ExprKind::Var(var) => variable(ctx, var),
            ExprKind::Range { low, high } => {
                ctx.emit("[");
                low.pretty(ctx, true);
                ctx.emit("..");
                high.pretty(ctx, true);
                ctx.emit("]");
            }
            ExprKind::ExplicitList(items) => {
                ctx.emit("[");
                ctx.separated(items, ", ", |ctx, item| item.pretty(ctx, false));
                ctx.emit("]");
            }
            ExprKind::Binop { op, left, right }
                if op.name() == "-" && left.node.is_int_literal(0) =>
            {
                ctx.parens_if(needs_parens, |ctx| {
                    ctx.emit("-");
                    right.pretty(ctx, true);
                });
            }
            ExprKind::Binop { op, left, right } => ctx.parens_if(needs_parens, |ctx| {
                left.pretty(ctx, true);
                ctx.emit_space();
                if is_operator(op.name()) {
                    ctx.emit(op.name());
                } else {
                    ctx.emit("`");
                    op.pretty(ctx, false);
                    ctx.emit("`");
                }
                ctx.emit_space();
                right.pretty(ctx, true);
            }),
            ExprKind::App { func, arg } => ctx.parens_if(needs_parens, |ctx| {
                let (head, mut args) = func.collect_apps();
                args.push(arg.as_ref());
                head.pretty(ctx, true);
                for arg in args {
                    ctx.emit_space();
                    arg.pretty(ctx, true);
                }
            }),
            ExprKind::Lambda { param, body } => ctx.parens_if(needs_parens, |ctx| {
                let (rest, body) = body.collect_lambdas();
                ctx.emit("\\");
                ctx.separated(std::iter::once(param).chain(rest), " ", |ctx, param| {
                    param.pretty(ctx, true);
                });
                ctx.emit(" -> ");
                body.pretty(ctx, false);
            }),
            ExprKind::MultiIf(branches) => {
                let indent = ctx.config().if_indent;
                ctx.parens_if(needs_parens, |ctx| {
                    let start = ctx.column();
                    ctx.emit("if");
                    for (condition, branch) in branches {
                        ctx.newline_at(start + indent);
                        ctx.emit("| ");
                        condition.pretty(ctx, false);
                        ctx.emit(" -> ");
                        branch.pretty(ctx, false);
                    }
                });
            }
            ExprKind::Let { defs, body } => {
                let indent = ctx.config().let_indent;
                ctx.parens_if(needs_parens, |ctx| {
                    let start = ctx.column();
                    ctx.emit("let");
                    for def in defs {
                        ctx.newline_at(start + indent);
                        def.pretty(ctx, false);
                    }
                    ctx.newline_at(start);
                    ctx.emit("in ");
                    body.pretty(ctx, false);
                });
            }
            ExprKind::Case {
                scrutinee,
                branches,
            } => {
                let indent = ctx.config().case_indent;
                ctx.parens_if(needs_parens, |ctx| {
                    let start = ctx.column();
                    ctx.emit("case ");
                    scrutinee.pretty(ctx, false);
                    ctx.emit(" of");
                    for (pattern, branch) in branches {
                        ctx.newline_at(start + indent);
                        pattern.pretty(ctx, false);
                        ctx.emit(" -> ");
                        branch.pretty(ctx, false);
                    }
                });
            }
            ExprKind::Data { ctor, args } => data(ctx, ctor, args, needs_parens),
            ExprKind::Access { record, field } => {
                record.pretty(ctx, true);
                ctx.emit(".");
                ctx.emit(field);
            }
            ExprKind::Remove { record, field } => {
                ctx.emit("{");
                record.pretty(ctx, false);
                ctx.emit(" - ");
                ctx.emit(field);
                ctx.emit("}");
            }
            ExprKind::Insert {
                record,
                field,
                value,
            } => {
                ctx.emit("{");
                if let ExprKind::Remove {
                    record: inner,
                    field: old,
                } = &record.node
                {
                    inner.pretty(ctx, false);
                    ctx.emit(" - ");
                    ctx.emit(old);
                } else {
                    record.pretty(ctx, false);
                }
                ctx.emit(" | ");
                ctx.emit(field);
                ctx.emit(" = ");
                value.pretty(ctx, false);
                ctx.emit("}");
            }
            ExprKind::Modify { record, fields } => {
                ctx.emit("{");
                record.pretty(ctx, false);
                ctx.emit(" | ");
                ctx.separated(fields, ", ", |ctx, (field, value)| {
                    ctx.emit(field);
                    ctx.emit(" <- ");
                    value.pretty(ctx, false);
                });
                ctx.emit("}");
            }
            ExprKind::Record(fields) => {
                ctx.emit("{");
                ctx.separated(fields, ", ", |ctx, (field, value)| {
                    ctx.emit(field);
                    ctx.emit(" = ");
                    value.pretty(ctx, false);
                });
                ctx.emit("}");
            }
            ExprKind::Port(port) => ctx.emit(&format!("<port:{}>", port.name())),
            ExprKind::Shader { .. } => ctx.emit("[glsl| ... |]"),
        }
    }
}

fn data<E, A, D, V, T>(
    ctx: &mut FormatContext<E>,
    ctor: &str,
    args: &[Expr<A, D, V, T>],
    needs_parens: bool,
) where
    E: Emitter,
    D: Pretty,
    V: Pretty + Named,
{
    match args {
        [head, tail] if ctor == CONS => ctx.parens_if(needs_parens, |ctx| {
            head.pretty(ctx, true);
            ctx.emit(" :: ");
            tail.pretty(ctx, !is_cons(&tail.node));
        }),
        [] if ctor == NIL => ctx.emit("[]"),
        _ if is_tuple_name(ctor) => {
            ctx.emit("(");
            ctx.separated(args, ", ", |ctx, arg| arg.pretty(ctx, false));
            ctx.emit(")");
        }
        _ => ctx.parens_if(needs_parens && !args.is_empty(), |ctx| {
            ctx.emit(ctor);
            for arg in args {
                ctx.emit_space();
                arg.pretty(ctx, true);
            }
        }),
    }
}

/// `::` is right-associative, so a cons tail needs no parentheses.
fn is_cons<A, D, V, T>(node: &ExprKind<A, D, V, T>) -> bool {
    matches!(node, ExprKind::Data { ctor, args } if ctor == CONS && args.len() == 2)
}
