//! Sable Formatter
//!
//! Pretty printer for Sable IR trees. Diagnostics call it on any tree
//! fragment, from any phase, to show readable source text.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction
//! - [`context`]: Formatting context with column tracking and layout config
//! - [`formatter`]: The [`Pretty`] trait and its implementations

pub mod context;
pub mod emitter;
pub mod formatter;

pub use context::{FormatConfig, FormatContext};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::{format_def, format_expr, format_listing, format_value, Formatter, Pretty};
