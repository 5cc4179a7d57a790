use ercgen_ir::SealedModel;

use super::{emit_blocks, emit_brief, summary, Section};
use crate::emitter::{Emitter, StringEmitter};
use crate::naming;
use crate::{EmitConfig, EmptyModelError};

/// One entry per facility, in insertion order.
pub fn facility_enum(model: &SealedModel, config: &EmitConfig) -> Result<String, EmptyModelError> {
    let facilities = model.facilities();
    if facilities.is_empty() {
        return Err(EmptyModelError {
            section: Section::FacilityEnum,
        });
    }

    let mut out = StringEmitter::new(config.indent);
    emit_brief(
        &mut out,
        &format!("Facility codes to pass to {}.", naming::PACK_FUNCTION),
    );
    emit_enum(
        &mut out,
        naming::FACILITY_ENUM,
        facilities
            .iter()
            .map(|f| (f.name(), f.code(), f.doc())),
    );
    Ok(out.output())
}

/// One enumeration per facility that owns at least one component.
pub fn component_enums(
    model: &SealedModel,
    config: &EmitConfig,
) -> Result<String, EmptyModelError> {
    let owners: Vec<_> = model
        .facilities()
        .iter()
        .filter(|f| !f.components().is_empty())
        .collect();
    if owners.is_empty() {
        return Err(EmptyModelError {
            section: Section::ComponentEnums,
        });
    }

    let mut out = StringEmitter::new(config.indent);
    emit_blocks(&mut out, owners, |out, facility| {
        emit_brief(
            out,
            &format!("Component codes for the {} facility.", facility.name()),
        );
        emit_enum(
            out,
            &naming::component_enum(facility.name()),
            facility
                .components()
                .iter()
                .map(|c| (c.name(), c.code(), c.doc())),
        );
    });
    Ok(out.output())
}

fn emit_enum<'a>(
    out: &mut impl Emitter,
    type_name: &str,
    entries: impl Iterator<Item = (&'a str, u8, &'a str)>,
) {
    out.emit("typedef enum ");
    out.emit_line(&naming::enum_tag(type_name));
    out.emit_line("{");
    for (name, code, doc) in entries {
        out.emit_indented_line(
            1,
            &format!("{name} = {code}, //!< {}", summary(name, code, doc)),
        );
    }
    out.emit_line(&format!("}} {type_name};"));
}
