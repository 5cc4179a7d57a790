#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn parse_minimal_spec() {
    let doc = json!({
        "facilities": [{
            "code": 1, "name": "FAC_A", "doc_string": "Facility A",
            "components": [{
                "code": 2, "name": "COMP_X", "doc_string": "Component X",
                "results": [{ "value": 5, "name": "RES_OK" }]
            }]
        }]
    });

    let spec = parse_spec(&doc).unwrap();
    assert_eq!(
        spec,
        RawSpec {
            facilities: vec![RawFacility {
                code: 1,
                name: "FAC_A".into(),
                doc_string: "Facility A".into(),
                components: vec![RawComponent {
                    code: 2,
                    name: "COMP_X".into(),
                    doc_string: "Component X".into(),
                    results: vec![RawResult {
                        value: 5,
                        name: "RES_OK".into(),
                    }],
                }],
            }],
        }
    );
}

#[test]
fn empty_lists_are_structurally_valid() {
    let spec = parse_spec(&json!({ "facilities": [] })).unwrap();
    assert!(spec.facilities.is_empty());

    let spec = parse_spec(&json!({
        "facilities": [{ "code": 0, "name": "F", "doc_string": "", "components": [] }]
    }))
    .unwrap();
    assert!(spec.facilities[0].components.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let spec = parse_spec(&json!({
        "version": 3,
        "facilities": [{ "code": 0, "name": "F", "doc_string": "", "components": [], "extra": true }]
    }))
    .unwrap();
    assert_eq!(spec.facilities.len(), 1);
}

#[test]
fn missing_facilities_section() {
    let err = parse_spec(&json!({ "components": [] })).unwrap_err();
    assert_eq!(err.path, "facilities");
    assert_eq!(err.expected, Expected::Array);
    assert_eq!(err.to_string(), "`facilities` must be an array, found nothing");
}

#[test]
fn root_must_be_object() {
    let err = parse_spec(&json!([1, 2])).unwrap_err();
    assert_eq!(err.path, "<document>");
    assert_eq!(err.expected, Expected::Object);
    assert_eq!(err.found, "an array");
}

#[test]
fn facility_code_wrong_type() {
    let err = parse_spec(&json!({
        "facilities": [{ "code": "1", "name": "F", "doc_string": "", "components": [] }]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`facilities[0].code` must be an integer, found a string"
    );
}

#[test]
fn fractional_code_rejected() {
    let err = parse_spec(&json!({
        "facilities": [{ "code": 1.5, "name": "F", "doc_string": "", "components": [] }]
    }))
    .unwrap_err();
    assert_eq!(err.found, "a fractional number");
}

#[test]
fn component_missing_doc_string() {
    let err = parse_spec(&json!({
        "facilities": [{
            "code": 1, "name": "F", "doc_string": "",
            "components": [
                { "code": 1, "name": "C1", "doc_string": "", "results": [] },
                { "code": 2, "name": "C2", "results": [] }
            ]
        }]
    }))
    .unwrap_err();
    assert_eq!(err.path, "facilities[0].components[1].doc_string");
    assert_eq!(err.expected, Expected::String);
}

#[test]
fn result_name_wrong_type() {
    let err = parse_spec(&json!({
        "facilities": [{
            "code": 1, "name": "F", "doc_string": "",
            "components": [{
                "code": 1, "name": "C", "doc_string": "",
                "results": [{ "value": 1, "name": 7 }]
            }]
        }]
    }))
    .unwrap_err();
    assert_eq!(err.path, "facilities[0].components[0].results[0].name");
    assert_eq!(err.found, "an integer");
}

#[test]
fn record_must_be_object() {
    let err = parse_spec(&json!({ "facilities": ["FAC_A"] })).unwrap_err();
    assert_eq!(err.path, "facilities[0]");
    assert_eq!(err.expected, Expected::Object);
}

#[test]
fn negative_values_parse() {
    let spec = parse_spec(&json!({
        "facilities": [{
            "code": 1, "name": "F", "doc_string": "",
            "components": [{
                "code": 1, "name": "C", "doc_string": "",
                "results": [{ "value": -3, "name": "R" }]
            }]
        }]
    }))
    .unwrap();
    assert_eq!(spec.facilities[0].components[0].results[0].value, -3);
}

#[test]
fn invalid_json_is_input_error() {
    let err = parse_document("{ \"facilities\": [", "<test>").unwrap_err();
    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().starts_with("input <test> is not valid JSON"));
}

#[test]
fn missing_file_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_document(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Missing { .. }));

    let err = load_document(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::NotAFile { .. }));
}

#[test]
fn result_value_beyond_i64_parses() {
    let spec = parse_spec(&json!({
        "facilities": [{
            "code": 1, "name": "F", "doc_string": "",
            "components": [{
                "code": 1, "name": "C", "doc_string": "",
                "results": [{ "value": u64::MAX, "name": "R" }]
            }]
        }]
    }))
    .unwrap();
    assert_eq!(
        spec.facilities[0].components[0].results[0].value,
        i128::from(u64::MAX)
    );
}

#[test]
fn code_beyond_i64_is_not_an_integer_code() {
    let err = parse_spec(&json!({
        "facilities": [{ "code": u64::MAX, "name": "F", "doc_string": "", "components": [] }]
    }))
    .unwrap_err();
    assert_eq!(err.found, "an integer beyond the signed 64-bit range");
}
