//! Formatter Core
//!
//! Renders IR values back to surface syntax for diagnostics.
//!
//! Every renderable value implements [`Pretty`]. The caller passes down a
//! single `needs_parens` flag instead of a precedence: compound forms wrap
//! themselves in parentheses when it is set, atomic forms (literals,
//! variables, lists, tuples, records) never do. The result is conservative,
//! not minimal: `f (g x)` and `a + (b * c)` keep their parentheses.
//!
//! Output is always multi-line for `let`, `if` and `case`, and always
//! single-line for everything else, so the same tree prints the same way
//! regardless of where it is embedded.
//!
//! # Modules
//!
//! - [`expr`]: expressions, including the resugaring rules
//! - [`patterns`]: patterns and definitions
//! - [`types`]: type expressions
//! - [`literals`]: literal values
//! - [`symbols`]: names, listings and exported values

mod expr;
mod literals;
mod patterns;
mod symbols;
#[cfg(test)]
mod tests;
mod types;

use sable_ir::{Def, Expr, Listing, Named, Value};

use crate::context::{FormatConfig, FormatContext};
use crate::emitter::Emitter;

/// Values that render as surface syntax.
pub trait Pretty {
    /// Emit `self` into `ctx`, parenthesized if it is compound and
    /// `needs_parens` is set.
    fn pretty<E: Emitter>(&self, ctx: &mut FormatContext<E>, needs_parens: bool);
}

/// Formatter over an in-memory buffer.
pub struct Formatter {
    ctx: FormatContext,
}

impl Formatter {
    /// Create a new formatter with default config.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create a new formatter with custom config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            ctx: FormatContext::with_config(config),
        }
    }

    /// Render `item` at the top level, without surrounding parentheses.
    pub fn format<P: Pretty>(mut self, item: &P) -> String {
        item.pretty(&mut self.ctx, false);
        self.ctx.output()
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an expression of any phase.
///
/// Annotations are ignored, so spans, types and synthetic markers all
/// print the same tree the same way.
#[tracing::instrument(level = "trace", skip_all)]
pub fn format_expr<A, D, V, T>(expr: &Expr<A, D, V, T>) -> String
where
    D: Pretty,
    V: Pretty + Named,
{
    Formatter::new().format(expr)
}

/// Format a definition: its type annotation line, if any, then `p = e`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn format_def<A, V, T>(def: &Def<A, V, T>) -> String
where
    V: Pretty + Named,
    T: Pretty,
{
    Formatter::new().format(def)
}

/// Format an import or export listing, e.g. `(map, Maybe(..), ..)`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn format_listing<T: Pretty>(listing: &Listing<T>) -> String {
    Formatter::new().format(listing)
}

/// Format one exported value, e.g. `Color(Red, Green)`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn format_value(value: &Value) -> String {
    Formatter::new().format(value)
}
