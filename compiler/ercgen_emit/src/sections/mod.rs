//! The four ordered output sections.
//!
//! Every builder takes the sealed model and returns its section as a
//! standalone string, so each can be rendered and tested on its own. A
//! builder whose section would be empty returns [`EmptyModelError`] instead.

mod accessors;
mod constants;
mod enums;

use std::fmt;

use ercgen_ir::SealedModel;

use crate::emitter::Emitter;
use crate::{EmitConfig, EmptyModelError};

pub use accessors::accessors;
pub use constants::result_constants;
pub use enums::{component_enums, facility_enum};

/// One of the emitted sections, in output order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Section {
    FacilityEnum,
    ComponentEnums,
    Accessors,
    ResultConstants,
}

impl Section {
    /// All sections in the order they are emitted.
    pub const ALL: [Section; 4] = [
        Section::FacilityEnum,
        Section::ComponentEnums,
        Section::Accessors,
        Section::ResultConstants,
    ];

    /// Banner text placed above the section inside a header.
    pub fn title(self) -> &'static str {
        match self {
            Section::FacilityEnum => "Facility Code Definitions",
            Section::ComponentEnums => "Component Code Definitions",
            Section::Accessors => "Extended Result Code Make Functions",
            Section::ResultConstants => "Extended Result Code Definitions",
        }
    }

    /// Entities whose absence leaves this section empty.
    pub fn entities(self) -> &'static str {
        match self {
            Section::FacilityEnum | Section::Accessors => "facilities",
            Section::ComponentEnums => "components",
            Section::ResultConstants => "results",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::FacilityEnum => write!(f, "facility enumeration"),
            Section::ComponentEnums => write!(f, "component enumeration"),
            Section::Accessors => write!(f, "accessor"),
            Section::ResultConstants => write!(f, "result constant"),
        }
    }
}

/// All four sections, rendered.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RenderedSections {
    pub facility_enum: String,
    pub component_enums: String,
    pub accessors: String,
    pub result_constants: String,
}

impl RenderedSections {
    /// Sections paired with their text, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(move |section| (section, self.get(section)))
    }

    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::FacilityEnum => &self.facility_enum,
            Section::ComponentEnums => &self.component_enums,
            Section::Accessors => &self.accessors,
            Section::ResultConstants => &self.result_constants,
        }
    }
}

/// Render every section, failing on the first one that would be empty.
#[tracing::instrument(level = "debug", skip_all, fields(facilities = model.facilities().len()))]
pub fn render_sections(
    model: &SealedModel,
    config: &EmitConfig,
) -> Result<RenderedSections, EmptyModelError> {
    Ok(RenderedSections {
        facility_enum: facility_enum(model, config)?,
        component_enums: component_enums(model, config)?,
        accessors: accessors(model, config)?,
        result_constants: result_constants(model, config)?,
    })
}

/// Emit a doxygen `@brief` block.
pub(crate) fn emit_brief<E: Emitter + ?Sized>(out: &mut E, brief: &str) {
    out.emit_line("/**");
    out.emit(" * @brief ");
    out.emit_line(&comment_text(brief));
    out.emit_line(" */");
}

/// Emit `blocks` separated by one blank line each.
pub(crate) fn emit_blocks<E: Emitter, T>(
    out: &mut E,
    blocks: impl IntoIterator<Item = T>,
    mut emit_block: impl FnMut(&mut E, T),
) {
    for (index, block) in blocks.into_iter().enumerate() {
        if index > 0 {
            out.emit_blank_line();
        }
        emit_block(out, block);
    }
}

/// `NAME : code, doc` summary used in enum entry comments.
pub(crate) fn summary(name: &str, code: u8, doc: &str) -> String {
    let doc = comment_text(doc);
    if doc.is_empty() {
        format!("{name} : {code}")
    } else {
        format!("{name} : {code}, {doc}")
    }
}

/// Make `text` safe inside a single-line `//` or `/** */` comment.
///
/// Line breaks are folded into single spaces and `*/` is split so it cannot
/// close the enclosing block comment.
pub(crate) fn comment_text(text: &str) -> String {
    let folded = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    folded.replace("*/", "* /")
}
