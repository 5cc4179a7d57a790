use thiserror::Error;

use crate::Section;

/// A section would render with no entries.
///
/// The emitter refuses to produce an artifact that looks complete but is
/// missing one of its sections.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("nothing to emit for the {section} section: the model has no {}", .section.entities())]
pub struct EmptyModelError {
    pub section: Section,
}
