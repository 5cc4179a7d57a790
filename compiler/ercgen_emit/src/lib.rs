//! Definition emitter for extended result codes.
//!
//! Renders a [`SealedModel`](ercgen_ir::SealedModel) into C source text in a
//! fixed order:
//!
//! 1. the facility enumeration
//! 2. one component enumeration per facility that has components
//! 3. accessor functions, each facility accessor followed by its components'
//! 4. one `#define` per result, invoking its component's accessor
//!
//! Each section is built independently (see [`sections`]) and the document
//! wrapper in [`render_document`] only concatenates them, optionally inside a
//! complete header with include guard and base definitions.
//!
//! Output is a pure function of the model and [`EmitConfig`]: the same input
//! always renders byte-identical text.

mod config;
pub mod emitter;
mod error;
mod header;
pub mod naming;
pub mod sections;

pub use config::EmitConfig;
pub use emitter::{Emitter, StringEmitter};
pub use error::EmptyModelError;
pub use header::render_document;
pub use sections::{render_sections, RenderedSections, Section};
