//! Sable IR - Intermediate Representation Types
//!
//! This crate contains the data shared by every phase of the Sable compiler:
//! - Spans for source locations
//! - Raw and canonical identifiers, import/export listings
//! - The phase-generic expression tree (`Expr<A, D, V, T>`)
//! - The binary codec for the module interface cache
//!
//! # Phases
//!
//! The parser emits `Expr<Span, ParsedDef, Raw, Type<Raw>>`. The resolver
//! rewrites it (see [`ast::Rewrite`]) into canonical form, the type checker
//! replaces the annotations, and code generation reads the result. The
//! formatter and the interface cache may be called at any boundary.
//!
//! Every operation here is a pure function of its inputs.

pub mod ast;
pub mod cache;
mod listing;
pub mod reserved;
mod span;
pub mod stack;
mod symbol;
mod traits;

pub use ast::{
    dummy_let, Annotated, CanonicalDef, CanonicalExpr, Def, Expr, ExprKind, Literal, ParsedDef,
    ParsedExpr, Pattern, PortImpl, Rewrite, Type,
};
pub use listing::{aliases, unions, values, Listing, Value};
pub use span::Span;
pub use symbol::{Canonical, Home, ModuleName, Raw};
pub use traits::{Named, Spanned, Synthetic, Typed};
