//! Documents that must be rejected as a whole

use articula_model::{ErrorCategory, LinkKind, Model, ModelError, shapes};
use serde_json::{Value, json};
use test_case::test_case;

fn person_document() -> Value {
    serde_json::from_str(&shapes::person().unwrap().to_json().unwrap()).unwrap()
}

fn import_with(pointer: &str, replacement: Value) -> ModelError {
    let mut document = person_document();
    *document
        .pointer_mut(pointer)
        .unwrap_or_else(|| panic!("no field at {pointer}")) = replacement;
    Model::from_json(&document.to_string()).unwrap_err()
}

#[test_case("/edge/0/child", json!(42), ErrorCategory::Structural,
    |e| matches!(e, ModelError::LinkOutOfRange {
        segment: 0, link: LinkKind::Child, target: 42, count: 10
    })
    ; "child out of range")]
#[test_case("/edge/9/sibling", json!(1), ErrorCategory::Structural,
    |e| matches!(e, ModelError::CycleDetected { segment: 1 })
    ; "sibling loops back")]
#[test_case("/edge/4/child", json!(4), ErrorCategory::Structural,
    |e| matches!(e, ModelError::SelfLink { segment: 4, link: LinkKind::Child })
    ; "self link")]
#[test_case("/edge/2/topology/0", json!([16, 17, 18]), ErrorCategory::Structural,
    |e| matches!(e, ModelError::FaceArity { segment: 2, face: 0, len: 3 })
    ; "triangle face")]
#[test_case("/edge/1/rotationAxis", json!(7), ErrorCategory::Structural,
    |e| matches!(e, ModelError::InvalidRotationAxis { segment: 1, code: 7 })
    ; "unknown axis")]
#[test_case("/edge/1/rotateDirection", json!(0), ErrorCategory::Structural,
    |e| matches!(e, ModelError::InvalidDirection { segment: 1, value: 0 })
    ; "zero direction")]
#[test_case("/bumpType", json!(9), ErrorCategory::Structural,
    |e| matches!(e, ModelError::InvalidSurfaceMode(9))
    ; "unknown surface mode")]
#[test_case("/rootNode", json!(99), ErrorCategory::Structural,
    |e| matches!(e, ModelError::RootOutOfRange { root: 99, count: 10 })
    ; "root out of range")]
#[test_case("/edge/2/topology/0/0", json!(500), ErrorCategory::Contract,
    |e| matches!(e, ModelError::VertexOutOfRange { segment: 2, face: 0, index: 500, pool_len: 80 })
    ; "vertex outside pool")]
#[test_case("/edge/3/color", json!([[1.0, 0.0, 0.0, 1.0]]), ErrorCategory::Contract,
    |e| matches!(e, ModelError::ColorCountMismatch { segment: 3, faces: 6, colors: 1 })
    ; "one colour for six faces")]
#[test_case("/edge/1/minRotateAngle", json!(90), ErrorCategory::Contract,
    |e| matches!(e, ModelError::InvalidAngleRange { segment: 1, .. })
    ; "inverted limits")]
#[test_case("/edge/0/topology", json!("box"), ErrorCategory::Structural,
    |e| matches!(e, ModelError::Document(_))
    ; "topology of wrong type")]
#[test_case("/vertices/0", json!([0.0, 0.0]), ErrorCategory::Structural,
    |e| matches!(e, ModelError::Document(_))
    ; "two-component vertex")]
fn test_rejects_document(
    pointer: &str,
    replacement: Value,
    category: ErrorCategory,
    expected: fn(&ModelError) -> bool,
) {
    let err = import_with(pointer, replacement);
    assert!(expected(&err), "unexpected error: {err:?}");
    assert_eq!(err.category(), category);
}

#[test_case("vertices" ; "vertex pool")]
#[test_case("edge" ; "segments")]
#[test_case("rootNode" ; "root index")]
#[test_case("bumpType" ; "surface mode")]
fn test_rejects_missing_top_level_field(field: &str) {
    let mut document = person_document();
    document.as_object_mut().unwrap().remove(field);
    let err = Model::from_json(&document.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Document(_)));
}

#[test]
fn test_rejects_missing_segment_field() {
    let mut document = person_document();
    document["edge"][5].as_object_mut().unwrap().remove("joints");
    let err = Model::from_json(&document.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Document(_)));
}

#[test]
fn test_rejects_non_json() {
    let err = Model::from_json("vertices: []").unwrap_err();
    assert!(matches!(err, ModelError::Document(_)));
}

#[test]
fn test_rejects_empty_segment_list() {
    let text = r#"{"vertices": [], "edge": [], "bumpType": 3, "rootNode": 0}"#;
    let err = Model::from_json(text).unwrap_err();
    assert!(matches!(err, ModelError::EmptyModel));
}
