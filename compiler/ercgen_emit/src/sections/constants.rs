use ercgen_ir::erc;
use ercgen_ir::SealedModel;

use super::{emit_blocks, emit_brief, Section};
use crate::emitter::{Emitter, StringEmitter};
use crate::naming;
use crate::{EmitConfig, EmptyModelError};

/// One `#define` per result, annotated with its packed value.
pub fn result_constants(
    model: &SealedModel,
    config: &EmitConfig,
) -> Result<String, EmptyModelError> {
    if model.results().next().is_none() {
        return Err(EmptyModelError {
            section: Section::ResultConstants,
        });
    }

    let mut out = StringEmitter::new(config.indent);
    emit_blocks(&mut out, model.results(), |out, (_, component, result)| {
        let packed = erc::as_unsigned(result.packed());
        emit_brief(
            out,
            &format!("{}, ERC Value: {packed} ({packed:#x})", result.name()),
        );
        out.emit_line(&format!(
            "#define {} {}({})",
            result.name(),
            naming::component_accessor(component.name()),
            result.value()
        ));
    });
    Ok(out.output())
}
