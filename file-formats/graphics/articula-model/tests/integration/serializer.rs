//! Export/import round trips through strings, writers and files

use articula_model::{Model, ModelDocument, shapes};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;
use test_case::test_case;

fn assert_same_model(a: &Model, b: &Model) {
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.segments(), b.segments());
    assert_eq!(a.root(), b.root());
    assert_eq!(a.surface_mode(), b.surface_mode());
    assert_eq!(a.traversal_order(), b.traversal_order());
}

#[test_case("person" ; "person")]
#[test_case("dog" ; "dog")]
fn test_json_round_trip(name: &str) {
    let model = shapes::builtin(name).unwrap();
    let again = Model::from_json(&model.to_json().unwrap()).unwrap();
    assert_same_model(&model, &again);

    let pretty = Model::from_json(&model.to_json_pretty().unwrap()).unwrap();
    assert_same_model(&model, &pretty);
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("person.json");

    let model = shapes::person().unwrap();
    model.save(&path).unwrap();
    let loaded = Model::load(&path).unwrap();

    assert_same_model(&model, &loaded);
}

#[test]
fn test_writer_reader_round_trip() {
    let model = shapes::dog().unwrap();
    let mut bytes = Vec::new();
    model.to_writer(&mut bytes).unwrap();
    let loaded = Model::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(loaded, model);
}

#[test]
fn test_export_uses_viewer_field_names() {
    let text = shapes::person().unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["rootNode"], json!(0));
    assert_eq!(value["bumpType"], json!(0));
    assert_eq!(value["vertices"].as_array().unwrap().len(), 80);

    let head = &value["edge"][1];
    assert_eq!(head["name"], json!("Head"));
    assert_eq!(head["rotationAxis"], json!(1));
    assert_eq!(head["maxRotateAngle"], json!(45.0));
    assert_eq!(head["minRotateAngle"], json!(-45.0));
    assert_eq!(head["rotateDirection"], json!(1));
    assert_eq!(head["sibling"], json!(2));
    assert!(head["child"].is_null());
    assert_eq!(head["topology"].as_array().unwrap().len(), 6);
    assert_eq!(head["joints"].as_array().unwrap().len(), 3);
}

#[test]
fn test_document_conversion_is_lossless() {
    let model = shapes::dog().unwrap();
    let document = ModelDocument::from(&model);
    let rebuilt = Model::try_from(document.clone()).unwrap();
    assert_eq!(ModelDocument::from(&rebuilt), document);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Model::load(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.category(), articula_model::ErrorCategory::Io);
}
