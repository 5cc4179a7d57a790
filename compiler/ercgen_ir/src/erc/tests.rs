use super::*;
use proptest::prelude::*;

#[test]
fn pack_minimal_triple() {
    assert_eq!(pack(1, 2, 5), 0x1020_0005);
    assert_eq!(pack(1, 2, 5), (1 << 28) | (2 << 20) | 5);
}

#[test]
fn pack_high_facility_sets_sign_bit() {
    let code = pack(0xF, 0xFF, 0xF_FFFF);
    assert_eq!(as_unsigned(code), 0xFFFF_FFFF);
    assert_eq!(code, -1);
}

#[test]
fn pack_masks_out_of_range_fields() {
    assert_eq!(pack(0x1F, 0, 0), pack(0xF, 0, 0));
    assert_eq!(pack(0, 0x1FF, 0), pack(0, 0xFF, 0));
    assert_eq!(pack(0, 0, 0x10_0001), pack(0, 0, 1));
}

#[test]
fn pack_negative_value_uses_twos_complement() {
    assert_eq!(unpack(pack(3, 4, -1)).value, VALUE_MASK);
    assert_eq!(unpack(pack(3, 4, -1)).facility, 3);
    assert_eq!(unpack(pack(3, 4, -1)).component, 4);
}

#[test]
fn unpack_splits_fields() {
    assert_eq!(
        unpack(0x1020_0005),
        ErcFields {
            facility: 1,
            component: 2,
            value: 5,
        }
    );
}

#[test]
fn value_fits_bounds() {
    assert!(value_fits(0));
    assert!(value_fits(0xF_FFFF));
    assert!(!value_fits(0x10_0000));
    assert!(!value_fits(-1));
}

proptest! {
    #[test]
    fn prop_round_trip(f in 0u32..=15, c in 0u32..=255, v in 0i128..=0xF_FFFF) {
        let fields = unpack(pack(f, c, v));
        prop_assert_eq!(u32::from(fields.facility), f);
        prop_assert_eq!(u32::from(fields.component), c);
        prop_assert_eq!(i128::from(fields.value), v);
    }

    #[test]
    fn prop_pack_only_keeps_low_bits(f in any::<u32>(), c in any::<u32>(), v in any::<i64>()) {
        let v = i128::from(v);
        let masked = pack(f & FACILITY_MASK, c & COMPONENT_MASK, v & i128::from(VALUE_MASK));
        prop_assert_eq!(pack(f, c, v), masked);
    }
}
