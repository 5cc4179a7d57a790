//! Output Emitter
//!
//! Abstraction for text production during rendering. Section builders write
//! through [`Emitter`] so they never deal with buffers or line endings
//! directly.

/// Trait for emitting rendered output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation for the given nesting level.
    fn emit_indent(&mut self, level: usize);

    /// Emit a complete line.
    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit_newline();
    }

    /// Emit a complete line at the given nesting level.
    fn emit_indented_line(&mut self, level: usize, text: &str) {
        self.emit_indent(level);
        self.emit_line(text);
    }

    /// Emit an empty line.
    fn emit_blank_line(&mut self) {
        self.emit_newline();
    }
}

/// String-based emitter.
///
/// Builds the output incrementally in memory; nothing reaches the filesystem
/// until the caller writes [`output`](StringEmitter::output).
#[derive(Debug)]
pub struct StringEmitter {
    buffer: String,
    indent_width: usize,
}

impl Default for StringEmitter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl StringEmitter {
    /// Create an emitter that indents by `indent_width` spaces per level.
    pub fn new(indent_width: usize) -> Self {
        StringEmitter {
            buffer: String::new(),
            indent_width,
        }
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(indent_width: usize, capacity: usize) -> Self {
        StringEmitter {
            buffer: String::with_capacity(capacity),
            indent_width,
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Ensure the output ends with a single newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * self.indent_width {
            self.buffer.push(' ');
        }
    }
}
