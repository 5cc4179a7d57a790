//! Identifier conventions for generated definitions.
//!
//! Call sites only ever spell the component accessor; the facility accessor
//! and the base packer are reached through it.

/// C type of a packed result code.
pub const RESULT_TYPE: &str = "ADUC_Result_t";

/// Base packer taking the full (facility, component, value) triple.
pub const PACK_FUNCTION: &str = "MAKE_ADUC_EXTENDEDRESULTCODE";

/// Enumeration type holding every facility code.
pub const FACILITY_ENUM: &str = "ADUC_Facility";

/// Accessor that packs a component code and value for one facility.
pub fn facility_accessor(facility: &str) -> String {
    format!("{PACK_FUNCTION}_FOR_FACILITY_{facility}")
}

/// Accessor that packs a value for one component.
pub fn component_accessor(component: &str) -> String {
    format!("{PACK_FUNCTION}_FOR_COMPONENT_{component}")
}

/// Enumeration type holding one facility's component codes.
pub fn component_enum(facility: &str) -> String {
    format!("{facility}_Components")
}

/// Struct tag for an enumeration type.
pub fn enum_tag(type_name: &str) -> String {
    format!("tag{type_name}")
}
