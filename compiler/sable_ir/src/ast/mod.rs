//! AST Types
//!
//! The phase-generic expression tree and the sub-trees it embeds.
//!
//! # Module Organization
//!
//! - `expr`: `Annotated`, `Expr`, `ExprKind`, chain utilities
//! - `port`: port implementations (`PortImpl`)
//! - `def`: `Def`, per-phase aliases, `raw_var`/`local_var`/`dummy_let`
//! - `rewrite`: phase-to-phase conversion (`Rewrite`)
//! - `literal`, `pattern`, `types`: leaves embedded in expressions

mod def;
mod expr;
mod literal;
mod pattern;
mod port;
mod rewrite;
mod types;


pub use def::{dummy_let, CanonicalDef, CanonicalExpr, Def, ParsedDef, ParsedExpr};
pub use expr::{Annotated, Expr, ExprKind};
pub use literal::Literal;
pub use pattern::Pattern;
pub use port::PortImpl;
pub use rewrite::{Rewrite, Rewritten};
pub use types::Type;
