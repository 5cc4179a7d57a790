//! Emission settings.

/// Settings that shape the emitted text without changing its content.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EmitConfig {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Include guard macro used when wrapping in a header.
    pub include_guard: String,
    /// File name shown in the header's `@file` line.
    pub file_name: String,
    /// Wrap the sections in a complete header. When false only the four
    /// sections are emitted.
    pub wrap_in_header: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            indent: 4,
            include_guard: "ADUC_RESULT_H".to_owned(),
            file_name: "result.h".to_owned(),
            wrap_in_header: true,
        }
    }
}

impl EmitConfig {
    /// Emit the bare sections, no header wrapper.
    pub fn sections_only() -> Self {
        EmitConfig {
            wrap_in_header: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn with_include_guard(mut self, guard: impl Into<String>) -> Self {
        self.include_guard = guard.into();
        self
    }
}
