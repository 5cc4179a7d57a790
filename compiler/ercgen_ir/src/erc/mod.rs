//! Extended result code packing.
//!
//! An extended result code (ERC) is a 32-bit integer made of a 4-bit facility,
//! an 8-bit component and a 20-bit value. Packing masks every field to its
//! width; bits outside a field are discarded, never reported.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "bit packing deliberately reinterprets between widths"
)]

/// Width of the facility field.
pub const FACILITY_BITS: u32 = 4;
/// Width of the component field.
pub const COMPONENT_BITS: u32 = 8;
/// Width of the value field.
pub const VALUE_BITS: u32 = 20;

pub const FACILITY_MASK: u32 = (1 << FACILITY_BITS) - 1;
pub const COMPONENT_MASK: u32 = (1 << COMPONENT_BITS) - 1;
pub const VALUE_MASK: u32 = (1 << VALUE_BITS) - 1;

const COMPONENT_SHIFT: u32 = VALUE_BITS;
const FACILITY_SHIFT: u32 = VALUE_BITS + COMPONENT_BITS;

/// The three fields of an unpacked extended result code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErcFields {
    pub facility: u8,
    pub component: u8,
    pub value: u32,
}

/// Pack a facility code, component code and raw value into an ERC.
///
/// Equivalent to
/// `((facility & 0xF) << 28) | ((component & 0xFF) << 20) | (value & 0xFFFFF)`.
/// The value is any JSON integer, from `i64::MIN` to `u64::MAX`. Negative
/// values are masked in two's complement, so `-1` packs as `0xFFFFF`.
#[inline]
pub fn pack(facility: u32, component: u32, value: i128) -> i32 {
    let packed = ((facility & FACILITY_MASK) << FACILITY_SHIFT)
        | ((component & COMPONENT_MASK) << COMPONENT_SHIFT)
        | (value as u32 & VALUE_MASK);
    packed as i32
}

/// Split an ERC back into its fields.
///
/// Right inverse of [`pack`] for in-range inputs.
#[inline]
pub fn unpack(code: i32) -> ErcFields {
    let bits = code as u32;
    ErcFields {
        facility: ((bits >> FACILITY_SHIFT) & FACILITY_MASK) as u8,
        component: ((bits >> COMPONENT_SHIFT) & COMPONENT_MASK) as u8,
        value: bits & VALUE_MASK,
    }
}

/// Whether `value` survives packing unchanged.
#[inline]
pub fn value_fits(value: i128) -> bool {
    (0..=i128::from(VALUE_MASK)).contains(&value)
}

/// The packed code read as an unsigned 32-bit quantity, as shown in annotations.
#[inline]
pub fn as_unsigned(code: i32) -> u32 {
    code as u32
}

#[cfg(test)]
mod tests;
