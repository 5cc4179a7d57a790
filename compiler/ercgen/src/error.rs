//! Error taxonomy for a generator run.
//!
//! Every error is fatal. Stage-local errors are collected into
//! [`GenerateError`]; the pipeline wraps the one that stopped it in a
//! [`PipelineError`] together with the stage it was in.

use std::fmt;
use std::io;
use std::path::PathBuf;

use ercgen_emit::EmptyModelError;
use ercgen_ir::{DuplicateDefinitionError, ModelError, RangeError};
use thiserror::Error;

use crate::Stage;

/// The specification could not be read or is not JSON.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input `{}` does not exist", .path.display())]
    Missing { path: PathBuf },
    #[error("input `{}` is not a regular file", .path.display())]
    NotAFile { path: PathBuf },
    #[error("cannot read input `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input {origin} is not valid JSON: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON type a specification field must have.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    Object,
    Array,
    Integer,
    String,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Object => write!(f, "an object"),
            Expected::Array => write!(f, "an array"),
            Expected::Integer => write!(f, "an integer"),
            Expected::String => write!(f, "a string"),
        }
    }
}

/// A field is missing or has the wrong JSON type.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("`{path}` must be {expected}, found {found}")]
pub struct SchemaError {
    /// Location of the field, e.g. `facilities[0].components[2].code`.
    pub path: String,
    pub expected: Expected,
    /// Description of what was there instead.
    pub found: &'static str,
}

/// The artifact could not be persisted.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output path `{}` does not name a file", .path.display())]
    NoFileName { path: PathBuf },
    #[error("output path `{}` is a directory", .path.display())]
    IsDirectory { path: PathBuf },
    #[error("output directory `{}` does not exist", .dir.display())]
    MissingDirectory { dir: PathBuf },
    #[error("output parent `{}` is not a directory", .dir.display())]
    NotADirectory { dir: PathBuf },
    #[error("cannot write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any error that can stop a run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    DuplicateDefinition(#[from] DuplicateDefinitionError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    EmptyModel(#[from] EmptyModelError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<ModelError> for GenerateError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Duplicate(dup) => GenerateError::DuplicateDefinition(dup),
            ModelError::Range(range) => GenerateError::Range(range),
        }
    }
}

/// A run that aborted, with the stage it aborted in.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: GenerateError,
}
