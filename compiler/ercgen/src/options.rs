use std::path::{Path, PathBuf};

use ercgen_emit::EmitConfig;

/// Paths and emission settings for one generator run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// JSON specification to read.
    pub input: PathBuf,
    /// Artifact to write.
    pub output: PathBuf,
    pub emit: EmitConfig,
}

impl GenerateOptions {
    /// Options with the default header layout; the `@file` line names the
    /// output file.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        let mut emit = EmitConfig::default();
        if let Some(name) = file_name(&output) {
            emit.file_name = name;
        }
        GenerateOptions {
            input: input.into(),
            output,
            emit,
        }
    }

    #[must_use]
    pub fn with_emit_config(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
