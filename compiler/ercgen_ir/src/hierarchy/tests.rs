#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn duplicate(err: ModelError) -> DuplicateDefinitionError {
    match err {
        ModelError::Duplicate(dup) => dup,
        ModelError::Range(range) => panic!("expected duplicate error, got {range}"),
    }
}

fn range(err: ModelError) -> RangeError {
    match err {
        ModelError::Range(range) => range,
        ModelError::Duplicate(dup) => panic!("expected range error, got {dup}"),
    }
}

#[test]
fn minimal_triple_packs_expected_code() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(1, "FAC_A", "facility a").unwrap();
    let comp = model.add_component(fac, 2, "COMP_X", "component x").unwrap();
    let packed = model.add_result(comp, 5, "RES_OK").unwrap();

    assert_eq!(packed, 0x1020_0005);
    let sealed = model.seal();
    let (facility, component, result) = sealed.results().next().unwrap();
    assert_eq!(facility.name(), "FAC_A");
    assert_eq!(component.name(), "COMP_X");
    assert_eq!(component.facility_code(), 1);
    assert_eq!(result.packed(), 0x1020_0005);
    assert_eq!(result.value(), 5);
}

#[test]
fn facility_same_code_different_name_rejected() {
    let mut model = HierarchyModel::new();
    model.add_facility(3, "FAC_A", "").unwrap();
    let err = duplicate(model.add_facility(3, "FAC_B", "").unwrap_err());

    assert_eq!(err.kind, EntityKind::Facility);
    assert_eq!(err.conflict, Conflict::Code(3));
    assert_eq!(err.name, "FAC_B");
    assert_eq!(err.existing, "FAC_A");
    assert_eq!(err.scope, None);
}

#[test]
fn facility_same_name_different_code_rejected() {
    let mut model = HierarchyModel::new();
    model.add_facility(3, "FAC_A", "").unwrap();
    let err = duplicate(model.add_facility(4, "FAC_A", "").unwrap_err());

    assert_eq!(err.conflict, Conflict::Name);
    assert_eq!(
        err.to_string(),
        "duplicate facility name: `FAC_A` collides with `FAC_A`"
    );
}

#[test]
fn facility_code_range() {
    let mut model = HierarchyModel::new();
    assert!(model.add_facility(15, "FAC_MAX", "").is_ok());

    let err = range(model.add_facility(16, "FAC_OVER", "").unwrap_err());
    assert_eq!(err.kind, EntityKind::Facility);
    assert_eq!(err.code, 16);
    assert_eq!(
        err.to_string(),
        "facility `FAC_OVER` has code 16, outside the 4-bit range 0..=15"
    );

    assert!(model.add_facility(-1, "FAC_NEG", "").is_err());
    assert_eq!(model.facilities().len(), 1);
}

#[test]
fn component_code_range() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(0, "FAC", "").unwrap();
    assert!(model.add_component(fac, 255, "COMP_MAX", "").is_ok());

    let err = range(model.add_component(fac, 256, "COMP_OVER", "").unwrap_err());
    assert_eq!(err.kind, EntityKind::Component);
    assert_eq!(
        err.to_string(),
        "component `COMP_OVER` has code 256, outside the 8-bit range 0..=255"
    );
}

#[test]
fn component_uniqueness_is_scoped_to_facility() {
    let mut model = HierarchyModel::new();
    let a = model.add_facility(1, "FAC_A", "").unwrap();
    let b = model.add_facility(2, "FAC_B", "").unwrap();

    model.add_component(a, 7, "COMP", "").unwrap();
    // Same name and code under a different facility is fine.
    model.add_component(b, 7, "COMP", "").unwrap();

    let err = duplicate(model.add_component(a, 8, "COMP", "").unwrap_err());
    assert_eq!(err.conflict, Conflict::Name);
    assert_eq!(err.scope.as_deref(), Some("FAC_A"));

    let err = duplicate(model.add_component(a, 7, "OTHER", "").unwrap_err());
    assert_eq!(err.conflict, Conflict::Code(7));
    assert_eq!(
        err.to_string(),
        "duplicate component code 7: `OTHER` collides with `COMP` in `FAC_A`"
    );
}

#[test]
fn result_duplicate_value_distinct_names_accepted() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(1, "FAC", "").unwrap();
    let comp = model.add_component(fac, 1, "COMP", "").unwrap();

    let first = model.add_result(comp, 9, "RES_ONE").unwrap();
    let second = model.add_result(comp, 9, "RES_TWO").unwrap();
    assert_eq!(first, second);
    assert_eq!(model.seal().result_count(), 2);
}

#[test]
fn result_duplicate_name_rejected() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(1, "FAC", "").unwrap();
    let comp = model.add_component(fac, 1, "COMP", "").unwrap();

    model.add_result(comp, 1, "RES").unwrap();
    let err = duplicate(model.add_result(comp, 2, "RES").unwrap_err());
    assert_eq!(err.kind, EntityKind::Result);
    assert_eq!(err.scope.as_deref(), Some("COMP"));
}

#[test]
fn result_value_is_masked_not_rejected() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(2, "FAC", "").unwrap();
    let comp = model.add_component(fac, 3, "COMP", "").unwrap();

    let packed = model.add_result(comp, 0x10_0001, "RES_WIDE").unwrap();
    assert_eq!(packed, crate::pack(2, 3, 1));

    let sealed = model.seal();
    let (_, _, result) = sealed.results().next().unwrap();
    assert!(result.is_masked());
    assert_eq!(result.value(), 0x10_0001);
}

#[test]
fn insertion_order_is_preserved() {
    let mut model = HierarchyModel::new();
    let z = model.add_facility(9, "FAC_Z", "").unwrap();
    let a = model.add_facility(1, "FAC_A", "").unwrap();
    let za = model.add_component(z, 200, "Z_LAST", "").unwrap();
    model.add_component(z, 1, "Z_FIRST", "").unwrap();
    let aa = model.add_component(a, 0, "A_ONLY", "").unwrap();
    model.add_result(za, 2, "R2").unwrap();
    model.add_result(za, 1, "R1").unwrap();
    model.add_result(aa, 0, "R0").unwrap();

    let sealed = model.seal();
    let facilities: Vec<_> = sealed.facilities().iter().map(Facility::name).collect();
    assert_eq!(facilities, ["FAC_Z", "FAC_A"]);

    let components: Vec<_> = sealed.facilities()[0]
        .components()
        .iter()
        .map(Component::name)
        .collect();
    assert_eq!(components, ["Z_LAST", "Z_FIRST"]);

    let results: Vec<_> = sealed.results().map(|(_, _, r)| r.name()).collect();
    assert_eq!(results, ["R2", "R1", "R0"]);
    assert_eq!(sealed.component_count(), 3);
    assert_eq!(za.facility(), z);
}

#[test]
fn rejected_insertion_leaves_model_unchanged() {
    let mut model = HierarchyModel::new();
    let fac = model.add_facility(1, "FAC", "doc").unwrap();
    let before = model.clone().seal();

    assert!(model.add_facility(1, "FAC_AGAIN", "").is_err());
    assert!(model.add_component(fac, 300, "COMP", "").is_err());
    assert_eq!(model.seal(), before);
}
