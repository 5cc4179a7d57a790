//! Facility, Component and Result entities.
//!
//! Entities are created by [`HierarchyModel`](crate::HierarchyModel) only and
//! expose read-only accessors; the owning model decides what may be inserted.

use std::fmt;

/// Which level of the hierarchy an entity belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EntityKind {
    Facility,
    Component,
    Result,
}

impl EntityKind {
    /// Bit width available to this entity's code in the packed layout.
    pub fn code_bits(self) -> u32 {
        match self {
            EntityKind::Facility => crate::erc::FACILITY_BITS,
            EntityKind::Component => crate::erc::COMPONENT_BITS,
            EntityKind::Result => crate::erc::VALUE_BITS,
        }
    }

    /// Largest code that fits in [`code_bits`](Self::code_bits).
    pub fn max_code(self) -> u32 {
        (1 << self.code_bits()) - 1
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Facility => write!(f, "facility"),
            EntityKind::Component => write!(f, "component"),
            EntityKind::Result => write!(f, "result"),
        }
    }
}

/// Top-level error domain.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Facility {
    name: String,
    code: u8,
    doc: String,
    pub(crate) components: Vec<Component>,
}

impl Facility {
    pub(crate) fn new(name: String, code: u8, doc: String) -> Self {
        Facility {
            name,
            code,
            doc,
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// Subsystem within a facility.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Component {
    name: String,
    code: u8,
    doc: String,
    /// Code of the owning facility (lookup only).
    facility_code: u8,
    pub(crate) results: Vec<ResultCode>,
}

impl Component {
    pub(crate) fn new(name: String, code: u8, doc: String, facility_code: u8) -> Self {
        Component {
            name,
            code,
            doc,
            facility_code,
            results: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn facility_code(&self) -> u8 {
        self.facility_code
    }

    /// Results in insertion order.
    pub fn results(&self) -> &[ResultCode] {
        &self.results
    }
}

/// A single named error condition.
///
/// `value` is kept exactly as written in the specification; `packed` is the
/// extended result code derived from it and the owning codes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResultCode {
    name: String,
    value: i128,
    packed: i32,
}

impl ResultCode {
    pub(crate) fn new(name: String, value: i128, facility_code: u8, component_code: u8) -> Self {
        let packed = crate::erc::pack(
            u32::from(facility_code),
            u32::from(component_code),
            value,
        );
        ResultCode {
            name,
            value,
            packed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value as written in the specification.
    pub fn value(&self) -> i128 {
        self.value
    }

    /// Packed extended result code.
    pub fn packed(&self) -> i32 {
        self.packed
    }

    /// Whether packing discarded bits of the raw value.
    pub fn is_masked(&self) -> bool {
        !crate::erc::value_fits(self.value)
    }
}
