//! ercgen - Extended Result Code Generator
//!
//! Turns a three-level JSON specification (facility → component → result)
//! into C definitions for packed 32-bit extended result codes.
//!
//! # Architecture
//!
//! ```text
//! JSON file
//!     │
//!     ▼
//! schema::load_spec() ──► RawSpec            (Parsing)
//!     │
//!     ▼
//! HierarchyModel::add_*() ──► HierarchyModel (Building, Validating)
//!     │
//!     ▼
//! HierarchyModel::seal() ──► SealedModel     (Encoding)
//!     │
//!     ▼
//! render_document() ──► String               (Emitting)
//!     │
//!     ▼
//! output::write_atomic()                     (Writing)
//! ```
//!
//! Every stage either hands its product to the next or aborts the run. The
//! artifact is assembled fully in memory and written with a single rename, so
//! a failed run never leaves a partial or modified output file.

pub mod error;
mod options;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod tracing_setup;

pub use ercgen_emit::EmitConfig;
pub use error::{GenerateError, InputError, OutputError, PipelineError, SchemaError};
pub use options::GenerateOptions;
pub use pipeline::{GenerateReport, Pipeline, Stage};

/// Run the whole pipeline: read the specification, write the artifact.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, PipelineError> {
    Pipeline::new().run(options)
}

/// Render a JSON specification held in memory, without touching the
/// filesystem.
pub fn render_source(json: &str, config: &EmitConfig) -> Result<String, PipelineError> {
    Pipeline::new().render(json, config)
}
