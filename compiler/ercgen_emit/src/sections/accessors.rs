use ercgen_ir::{Component, Facility, SealedModel};

use super::{emit_blocks, emit_brief, Section};
use crate::emitter::{Emitter, StringEmitter};
use crate::naming;
use crate::{EmitConfig, EmptyModelError};

/// Accessor functions: each facility's, then one per component it owns.
///
/// A component accessor binds its own code and forwards to the facility
/// accessor, so a result constant only has to name the component.
pub fn accessors(model: &SealedModel, config: &EmitConfig) -> Result<String, EmptyModelError> {
    if model.facilities().is_empty() {
        return Err(EmptyModelError {
            section: Section::Accessors,
        });
    }

    let blocks = model.facilities().iter().flat_map(|facility| {
        std::iter::once(Accessor::Facility(facility)).chain(
            facility
                .components()
                .iter()
                .map(move |component| Accessor::Component(facility, component)),
        )
    });

    let mut out = StringEmitter::new(config.indent);
    emit_blocks(&mut out, blocks, |out, accessor| match accessor {
        Accessor::Facility(facility) => emit_facility_accessor(out, facility),
        Accessor::Component(facility, component) => {
            emit_component_accessor(out, facility, component);
        }
    });
    Ok(out.output())
}

enum Accessor<'a> {
    Facility(&'a Facility),
    Component(&'a Facility, &'a Component),
}

fn emit_facility_accessor(out: &mut impl Emitter, facility: &Facility) {
    emit_brief(
        out,
        &format!("Extended Result Codes for {} Facility", facility.name()),
    );
    out.emit_line(&format!(
        "static inline {} {}(const unsigned int component, const int32_t value)",
        naming::RESULT_TYPE,
        naming::facility_accessor(facility.name()),
    ));
    out.emit_line("{");
    out.emit_indented_line(
        1,
        &format!(
            "return {}({}, component, value);",
            naming::PACK_FUNCTION,
            facility.name()
        ),
    );
    out.emit_line("}");
}

fn emit_component_accessor(out: &mut impl Emitter, facility: &Facility, component: &Component) {
    emit_brief(
        out,
        &format!(
            "Function for generating Extended Result Codes for {} Component",
            component.name()
        ),
    );
    out.emit_line(&format!(
        "static inline {} {}(const int32_t value)",
        naming::RESULT_TYPE,
        naming::component_accessor(component.name()),
    ));
    out.emit_line("{");
    out.emit_indented_line(
        1,
        &format!(
            "return {}({}, value);",
            naming::facility_accessor(facility.name()),
            component.name()
        ),
    );
    out.emit_line("}");
}
