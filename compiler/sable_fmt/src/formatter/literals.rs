//! Literal Value Formatting
//!
//! Non-finite floats have no literal form and print as the division that
//! produces them.

use sable_ir::Literal;

use super::Pretty;
use crate::context::FormatContext;
use crate::emitter::Emitter;

impl Pretty for Literal {
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool) {
        match self {
            Literal::Int(n) => {
                ctx.parens_if(needs_parens && *n < 0, |ctx| ctx.emit(&n.to_string()));
            }
            Literal::Float(f) if f.is_nan() => {
                ctx.parens_if(needs_parens, |ctx| ctx.emit("0 / 0"));
            }
            Literal::Float(f) if f.is_infinite() => {
                let text = if f.is_sign_negative() {
                    "-1 / 0"
                } else {
                    "1 / 0"
                };
                ctx.parens_if(needs_parens, |ctx| ctx.emit(text));
            }
            Literal::Float(f) => {
                ctx.parens_if(needs_parens && f.is_sign_negative(), |ctx| {
                    ctx.emit(&format!("{f:?}"));
                });
            }
            Literal::Char(c) => emit_quoted(ctx, &c.to_string(), '\''),
            Literal::Str(s) => emit_quoted(ctx, s, '"'),
            Literal::Bool(true) => ctx.emit("True"),
            Literal::Bool(false) => ctx.emit("False"),
        }
    }
}

fn emit_quoted<E: Emitter>(ctx: &mut FormatContext<E>, text: &str, quote: char) {
    let mut buf = String::with_capacity(text.len() + 2);
    buf.push(quote);
    for c in text.chars() {
        match c {
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\t' => buf.push_str("\\t"),
            '\r' => buf.push_str("\\r"),
            '\0' => buf.push_str("\\0"),
            c if c == quote => {
                buf.push('\\');
                buf.push(c);
            }
            c => buf.push(c),
        }
    }
    buf.push(quote);
    ctx.emit(&buf);
}
