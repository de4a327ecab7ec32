//! Output Emitter
//!
//! Abstraction for output production during formatting.

/// Trait for emitting formatted output.
///
/// The formatter writes to an emitter during rendering. Diagnostics render
/// into a [`StringEmitter`]; other sinks implement this trait.
pub trait Emitter {
    /// Emit a text fragment. Never contains a newline.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit `width` spaces of indentation.
    fn emit_indent(&mut self, width: usize);
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, width: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(width));
    }
}
