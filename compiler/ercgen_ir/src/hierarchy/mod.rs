//! Facility → Component → Result hierarchy.
//!
//! [`HierarchyModel`] is the only way to create entities. Every insertion is
//! checked against the entities already present in its scope and rejected on
//! collision; nothing is ever overwritten, removed or renamed. Once all
//! entities are in, [`HierarchyModel::seal`] produces a read-only
//! [`SealedModel`] for emission.
//!
//! # Uniqueness scopes
//!
//! | Entity    | Unique name within | Unique code within | Code width |
//! |-----------|--------------------|--------------------|------------|
//! | Facility  | whole model        | whole model        | 4 bits     |
//! | Component | owning facility    | owning facility    | 8 bits     |
//! | Result    | owning component   | (not required)     | masked     |

use tracing::{debug, warn};

use crate::entity::{Component, EntityKind, Facility, ResultCode};
use crate::erc;
use crate::error::{Conflict, DuplicateDefinitionError, ModelError, RangeError};

/// Handle to a facility inside a [`HierarchyModel`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FacilityId(u32);

/// Handle to a component inside a [`HierarchyModel`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ComponentId {
    facility: FacilityId,
    index: u32,
}

impl ComponentId {
    /// The facility that owns this component.
    pub fn facility(self) -> FacilityId {
        self.facility
    }
}

/// Incrementally built facility graph.
///
/// Handles returned by one model must only be passed back to that model;
/// a foreign handle panics on lookup.
#[derive(Clone, Default, Debug)]
pub struct HierarchyModel {
    facilities: Vec<Facility>,
}

impl HierarchyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a facility at the end of the facility list.
    ///
    /// Rejects codes outside 0..=15 with [`RangeError`], and any name or code
    /// already used by another facility with [`DuplicateDefinitionError`].
    pub fn add_facility(
        &mut self,
        code: i64,
        name: impl Into<String>,
        doc: impl Into<String>,
    ) -> Result<FacilityId, ModelError> {
        let name = name.into();
        let code = check_range(EntityKind::Facility, &name, code)?;

        for existing in &self.facilities {
            if let Some(conflict) = collision(existing.name(), existing.code(), &name, code) {
                return Err(DuplicateDefinitionError {
                    kind: EntityKind::Facility,
                    conflict,
                    name,
                    existing: existing.name().to_owned(),
                    scope: None,
                }
                .into());
            }
        }

        debug!(facility = %name, code, "added facility");
        let id = FacilityId(index_u32(self.facilities.len()));
        self.facilities.push(Facility::new(name, code, doc.into()));
        Ok(id)
    }

    /// Insert a component at the end of `facility`'s component list.
    ///
    /// Rejects codes outside 0..=255 with [`RangeError`], and any name or code
    /// already used by another component of the same facility with
    /// [`DuplicateDefinitionError`].
    pub fn add_component(
        &mut self,
        facility: FacilityId,
        code: i64,
        name: impl Into<String>,
        doc: impl Into<String>,
    ) -> Result<ComponentId, ModelError> {
        let name = name.into();
        let code = check_range(EntityKind::Component, &name, code)?;
        let owner = &mut self.facilities[facility.0 as usize];

        for existing in owner.components() {
            if let Some(conflict) = collision(existing.name(), existing.code(), &name, code) {
                return Err(DuplicateDefinitionError {
                    kind: EntityKind::Component,
                    conflict,
                    name,
                    existing: existing.name().to_owned(),
                    scope: Some(owner.name().to_owned()),
                }
                .into());
            }
        }

        debug!(facility = owner.name(), component = %name, code, "added component");
        let id = ComponentId {
            facility,
            index: index_u32(owner.components.len()),
        };
        let facility_code = owner.code();
        owner
            .components
            .push(Component::new(name, code, doc.into(), facility_code));
        Ok(id)
    }

    /// Insert a result at the end of `component`'s result list and return its
    /// packed code.
    ///
    /// Only the name must be unique within the component; two results may
    /// share a value. Values outside the 20-bit field are masked, not
    /// rejected, and reported at `warn` level.
    pub fn add_result(
        &mut self,
        component: ComponentId,
        value: i128,
        name: impl Into<String>,
    ) -> Result<i32, ModelError> {
        let name = name.into();
        let owner =
            &mut self.facilities[component.facility.0 as usize].components[component.index as usize];

        if let Some(existing) = owner.results().iter().find(|r| r.name() == name) {
            return Err(DuplicateDefinitionError {
                kind: EntityKind::Result,
                conflict: Conflict::Name,
                name,
                existing: existing.name().to_owned(),
                scope: Some(owner.name().to_owned()),
            }
            .into());
        }

        let result = ResultCode::new(name, value, owner.facility_code(), owner.code());
        if result.is_masked() {
            warn!(
                result = result.name(),
                value,
                masked = erc::unpack(result.packed()).value,
                "result value does not fit in {} bits and will be masked",
                erc::VALUE_BITS
            );
        }
        debug!(
            component = owner.name(),
            result = result.name(),
            packed = erc::as_unsigned(result.packed()),
            "added result"
        );

        let packed = result.packed();
        owner.results.push(result);
        Ok(packed)
    }

    /// Facilities in insertion order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Freeze the model. No further insertions are possible.
    pub fn seal(self) -> SealedModel {
        SealedModel {
            facilities: self.facilities,
        }
    }
}

/// Read-only, fully validated model.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SealedModel {
    facilities: Vec<Facility>,
}

impl SealedModel {
    /// Facilities in insertion order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn component_count(&self) -> usize {
        self.facilities.iter().map(|f| f.components().len()).sum()
    }

    pub fn result_count(&self) -> usize {
        self.results().count()
    }

    /// Every result with its owners, facility-major in insertion order.
    pub fn results(&self) -> impl Iterator<Item = (&Facility, &Component, &ResultCode)> {
        self.facilities.iter().flat_map(|facility| {
            facility.components().iter().flat_map(move |component| {
                component
                    .results()
                    .iter()
                    .map(move |result| (facility, component, result))
            })
        })
    }
}

/// Narrow `code` to the width allowed for `kind`.
fn check_range(kind: EntityKind, name: &str, code: i64) -> Result<u8, RangeError> {
    match u8::try_from(code) {
        Ok(narrow) if u32::from(narrow) <= kind.max_code() => Ok(narrow),
        _ => Err(RangeError {
            kind,
            name: name.to_owned(),
            code,
        }),
    }
}

/// Name collisions are reported ahead of code collisions.
fn collision(existing_name: &str, existing_code: u8, name: &str, code: u8) -> Option<Conflict> {
    if existing_name == name {
        Some(Conflict::Name)
    } else if existing_code == code {
        Some(Conflict::Code(i64::from(code)))
    } else {
        None
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "facility and component counts are bounded by their 4-bit and 8-bit codes"
)]
fn index_u32(len: usize) -> u32 {
    len as u32
}

#[cfg(test)]
mod tests;
