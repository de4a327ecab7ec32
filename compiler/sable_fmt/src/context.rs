//! Formatting Context
//!
//! Tracks state during formatting: the output sink, the current column and
//! the layout configuration.
//!
//! Multi-line forms indent relative to the column they start at, not to a
//! global indentation level. A `let` printed after `x = ` lays its
//! definitions out under the `let` keyword itself:
//!
//! ```text
//! x = let
//!         y = 1
//!     in y
//! ```

use crate::emitter::{Emitter, StringEmitter};

/// Configuration for the formatter.
///
/// The offsets are cosmetic, but diagnostics and golden files depend on
/// them, so the defaults must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Definitions under `let`, relative to the `let` keyword.
    pub let_indent: usize,

    /// Guarded branches under `if`, relative to the `if` keyword.
    pub if_indent: usize,

    /// Branches under `case ... of`, relative to the `case` keyword.
    pub case_indent: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            let_indent: 4,
            if_indent: 3,
            case_indent: 2,
        }
    }
}

/// Formatting context that tracks state during output.
///
/// All emit operations update the column position automatically.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    column: usize,
    config: FormatConfig,
}

impl FormatContext<StringEmitter> {
    /// Create a new format context with a string emitter and default config.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create a new format context with a string emitter and custom config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self::with_emitter_and_config(StringEmitter::new(), config)
    }

    /// Consume the context and return the output.
    pub fn output(self) -> String {
        self.emitter.output()
    }
}

impl Default for FormatContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> FormatContext<E> {
    /// Create a format context with a specific emitter and config.
    pub fn with_emitter_and_config(emitter: E, config: FormatConfig) -> Self {
        Self {
            emitter,
            column: 0,
            config,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Get the current column position (0-indexed, in characters).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
        self.column += text.chars().count();
    }

    /// Emit a single space.
    pub fn emit_space(&mut self) {
        self.emit(" ");
    }

    /// Start a new line and indent it to `column`.
    pub fn newline_at(&mut self, column: usize) {
        self.emitter.emit_newline();
        self.emitter.emit_indent(column);
        self.column = column;
    }

    /// Wrap whatever `f` emits in parentheses when `parens` is set.
    pub fn parens_if(&mut self, parens: bool, f: impl FnOnce(&mut Self)) {
        if parens {
            self.emit("(");
        }
        f(self);
        if parens {
            self.emit(")");
        }
    }

    /// Emit `items` separated by `separator`.
    pub fn separated<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        separator: &str,
        mut f: impl FnMut(&mut Self, T),
    ) {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.emit(separator);
            }
            f(self, item);
        }
    }
}
