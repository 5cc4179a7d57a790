//! Stage-by-stage driver for a generator run.
//!
//! A [`Pipeline`] moves strictly forward through [`Stage`]s and records each
//! one it enters. The first error aborts the run: the pipeline moves to
//! [`Stage::Aborted`] and the error is returned tagged with the stage that
//! produced it. There is no retry and no partial output.

use std::fmt;
use std::path::PathBuf;

use ercgen_emit::{render_document, EmitConfig};
use ercgen_ir::{HierarchyModel, SealedModel};
use tracing::{debug, info};

use crate::error::{GenerateError, PipelineError};
use crate::schema::{self, RawSpec};
use crate::{output, GenerateOptions};

/// Where a run currently is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    /// Reading the file and checking its JSON shape.
    Parsing,
    /// Inserting entities into the hierarchy model.
    Building,
    /// Confirming the model is complete.
    Validating,
    /// Freezing the model with every result packed.
    Encoding,
    /// Rendering the artifact text.
    Emitting,
    /// Persisting the artifact.
    Writing,
    Done,
    Aborted,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Aborted)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Parsing => "parsing",
            Stage::Building => "building",
            Stage::Validating => "validating",
            Stage::Encoding => "encoding",
            Stage::Emitting => "emitting",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Summary of a successful run.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GenerateReport {
    /// Path the artifact was written to.
    pub output: PathBuf,
    pub facilities: usize,
    pub components: usize,
    pub results: usize,
    /// Results whose value did not fit in 20 bits.
    pub masked_values: usize,
    /// Size of the artifact.
    pub bytes: usize,
}

/// Run driver.
///
/// Each call to [`run`](Self::run) or [`render`](Self::render) starts over
/// at [`Stage::Parsing`] with a fresh history, so one pipeline can drive
/// several independent runs.
#[derive(Clone, Debug)]
pub struct Pipeline {
    stage: Stage,
    history: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            stage: Stage::Parsing,
            history: vec![Stage::Parsing],
        }
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Every stage entered so far, in order.
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    /// Read `options.input`, generate, and write `options.output`.
    #[tracing::instrument(level = "debug", skip_all, fields(input = %options.input.display()))]
    pub fn run(&mut self, options: &GenerateOptions) -> Result<GenerateReport, PipelineError> {
        self.restart();
        let spec = schema::load_spec(&options.input).map_err(|e| self.abort(e))?;
        let (model, masked_values) = self.model_from(spec)?;

        self.advance(Stage::Emitting);
        let text = render_document(&model, &options.emit).map_err(|e| self.abort(e))?;

        self.advance(Stage::Writing);
        output::write_atomic(&options.output, &text).map_err(|e| self.abort(e))?;

        self.advance(Stage::Done);
        Ok(GenerateReport {
            output: options.output.clone(),
            facilities: model.facilities().len(),
            components: model.component_count(),
            results: model.result_count(),
            masked_values,
            bytes: text.len(),
        })
    }

    /// Generate from JSON text held in memory. Stops after emitting.
    #[tracing::instrument(level = "debug", skip_all, fields(len = json.len()))]
    pub fn render(&mut self, json: &str, config: &EmitConfig) -> Result<String, PipelineError> {
        self.restart();
        let spec = schema::parse_document(json, "<memory>")
            .map_err(GenerateError::from)
            .and_then(|document| schema::parse_spec(&document).map_err(GenerateError::from))
            .map_err(|e| self.abort(e))?;
        let (model, _) = self.model_from(spec)?;

        self.advance(Stage::Emitting);
        let text = render_document(&model, config).map_err(|e| self.abort(e))?;

        self.advance(Stage::Done);
        Ok(text)
    }

    /// Building through Encoding. Returns the sealed model and how many
    /// result values were masked.
    fn model_from(&mut self, spec: RawSpec) -> Result<(SealedModel, usize), PipelineError> {
        self.advance(Stage::Building);
        let model = build_model(spec).map_err(|e| self.abort(e))?;

        // Every entity was checked on insertion.
        self.advance(Stage::Validating);

        self.advance(Stage::Encoding);
        let model = model.seal();
        let masked = model.results().filter(|(_, _, r)| r.is_masked()).count();
        debug!(
            facilities = model.facilities().len(),
            components = model.component_count(),
            results = model.result_count(),
            masked,
            "model sealed"
        );
        Ok((model, masked))
    }

    fn restart(&mut self) {
        self.stage = Stage::Parsing;
        self.history.clear();
        self.history.push(Stage::Parsing);
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(!self.stage.is_terminal(), "pipeline already finished");
        info!(from = %self.stage, to = %next, "stage");
        self.stage = next;
        self.history.push(next);
    }

    fn abort(&mut self, err: impl Into<GenerateError>) -> PipelineError {
        let stage = self.stage;
        self.stage = Stage::Aborted;
        self.history.push(Stage::Aborted);
        PipelineError {
            stage,
            source: err.into(),
        }
    }
}

/// Insert every record, depth-first in document order.
pub fn build_model(spec: RawSpec) -> Result<HierarchyModel, GenerateError> {
    let mut model = HierarchyModel::new();
    for facility in spec.facilities {
        let facility_id = model.add_facility(facility.code, facility.name, facility.doc_string)?;
        for component in facility.components {
            let component_id =
                model.add_component(facility_id, component.code, component.name, component.doc_string)?;
            for result in component.results {
                model.add_result(component_id, result.value, result.name)?;
            }
        }
    }
    Ok(model)
}
