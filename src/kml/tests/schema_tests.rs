//! Tests for the field tables

use crate::kml::elements::KmlElementKind;
use crate::kml::errors::KmlError;
use crate::kml::schema::{FieldSchema, TransformerKind};
use crate::kml::transformers::NodeTransformers;
use crate::kml::value::KmlValue;
use crate::coordinate::Position;
use super::test_utils::sample_placemark;

#[test]
fn test_embedded_schema_loads() {
    let schema = FieldSchema::embedded();
    assert_eq!(schema.transformer_for(KmlElementKind::Point, "coordinates"), Some(&TransformerKind::Positions));
    assert_eq!(schema.transformer_for(KmlElementKind::Polygon, "outerBoundaryIs"), Some(&TransformerKind::LinearRing));
    assert_eq!(schema.transformer_for(KmlElementKind::TimeSpan, "begin"), Some(&TransformerKind::Date));
    for kind in KmlElementKind::all() {
        assert!(schema.has_fields(kind), "{} has no fields", kind);
    }
}

#[test]
fn test_category_tables_apply() {
    let schema = FieldSchema::embedded();
    // From [feature]
    assert_eq!(schema.transformer_for(KmlElementKind::Folder, "name"), Some(&TransformerKind::String));
    // From [geometry]
    assert_eq!(schema.transformer_for(KmlElementKind::LineString, "tessellate"), Some(&TransformerKind::Boolean));
    // Neither applies to styles
    assert_eq!(schema.transformer_for(KmlElementKind::LineStyle, "name"), None);
    assert_eq!(schema.attributes_for(KmlElementKind::Data), vec!["id", "targetId", "name"]);
}

#[test]
fn test_element_table_overrides_common() {
    let schema = FieldSchema::from_str(r#"
        [common]
        name = "string"

        [Placemark]
        name = "number"
    "#).unwrap();

    assert_eq!(schema.transformer_for(KmlElementKind::Placemark, "name"), Some(&TransformerKind::Number));
    assert_eq!(schema.transformer_for(KmlElementKind::Folder, "name"), Some(&TransformerKind::String));
}

#[test]
fn test_schema_errors() {
    let unknown_element = FieldSchema::from_str("[Placemarks]\nname = \"string\"");
    assert!(matches!(unknown_element, Err(KmlError::SchemaError(_))));

    let unknown_transformer = FieldSchema::from_str("[Placemark]\nname = \"text\"");
    assert!(matches!(unknown_transformer, Err(KmlError::SchemaError(_))));

    let attribute_on_child = FieldSchema::from_str("[Placemark]\nname = \"attribute\"");
    assert!(matches!(attribute_on_child, Err(KmlError::SchemaError(_))));

    let child_on_attribute = FieldSchema::from_str("[Placemark]\n\"@id\" = \"string\"");
    assert!(matches!(child_on_attribute, Err(KmlError::SchemaError(_))));

    let not_a_table = FieldSchema::from_str("Placemark = 1");
    assert!(matches!(not_a_table, Err(KmlError::SchemaError(_))));

    assert!(FieldSchema::from_str("[Placemark").is_err());
}

#[test]
fn test_schema_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.toml");
    std::fs::write(&path, "[Point]\ncoordinates = \"positions\"\n").unwrap();

    let schema = FieldSchema::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(schema.transformer_for(KmlElementKind::Point, "coordinates"), Some(&TransformerKind::Positions));
    assert!(FieldSchema::from_file("/nonexistent/fields.toml").is_err());
}

#[test]
fn test_transform_fields_walks_document_order() {
    let transformers = NodeTransformers::standard();
    let schema = FieldSchema::embedded();
    let node = sample_placemark();

    let placemark = transformers.kml_object(&node).unwrap();
    let fields = schema.transform_fields(&transformers, &placemark);
    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    // gx:balloonVisibility has no transformer
    assert_eq!(names, vec!["@id", "name", "visibility", "TimeStamp", "Polygon"]);

    assert_eq!(fields[0].1.as_str(), Some("field"));
    assert_eq!(fields[1].1.as_str(), Some("North field"));
    assert_eq!(fields[2].1.as_bool(), Some(false));

    let time_stamp = fields[3].1.as_object().unwrap();
    let when = schema.transform_fields(&transformers, time_stamp);
    assert_eq!(when[0].1.to_string(), "2016-03-09T00:00:00Z");

    let polygon = fields[4].1.as_object().unwrap();
    let polygon_fields = schema.transform_fields(&transformers, polygon);
    assert_eq!(polygon_fields[0].1.as_bool(), Some(true));

    // outerBoundaryIs is read as a ring backed by the boundary element
    let ring = polygon_fields[1].1.as_object().unwrap();
    assert_eq!(ring.kind(), KmlElementKind::LinearRing);
    let ring_fields = schema.transform_fields(&transformers, ring);
    let inner = ring_fields[0].1.as_object().unwrap();
    let coordinates = schema.transform_fields(&transformers, inner);
    match &coordinates[0].1 {
        KmlValue::Positions(positions) => {
            assert_eq!(positions.len(), 4);
            assert_eq!(positions[0], Position::new(50.1, 14.4, 0.0));
        }
        other => panic!("expected positions, got {}", other),
    }
}
