//! Tests for the node transformers

use crate::coordinate::Position;
use crate::kml::elements::KmlElementKind;
use crate::kml::object::KmlObject;
use crate::kml::registry::ElementRegistry;
use crate::kml::schema::TransformerKind;
use crate::kml::transformers::{self, NodeTransformers};
use crate::kml::value::KmlValue;
use crate::xml::{Node, XmlNode, XmlReader};
use super::test_utils::text_element;

#[test]
fn test_string_returns_first_text_child() {
    let node = text_element("name", "  Prague castle ");
    assert_eq!(transformers::string(&node), "  Prague castle ");
}

#[test]
fn test_string_without_text_is_empty() {
    assert_eq!(transformers::string(&XmlNode::element("name")), "");
    assert_eq!(transformers::string(None::<&XmlNode>), "");

    // First child is an element, not text
    let nested = XmlNode::element("name").with_child(XmlNode::element("b"));
    assert_eq!(transformers::string(&nested), "");
}

#[test]
fn test_number() {
    assert_eq!(transformers::number(&text_element("scale", "1.5")), 1.5);
    assert_eq!(transformers::number(&text_element("drawOrder", "-3")), -3.0);
    assert!(transformers::number(&text_element("scale", "large")).is_nan());
    assert!(transformers::number(&XmlNode::element("scale")).is_nan());
    assert!(transformers::number(None::<&XmlNode>).is_nan());
}

#[test]
fn test_boolean() {
    assert!(transformers::boolean(&text_element("open", "1")));
    assert!(transformers::boolean(&text_element("open", "true")));
    assert!(!transformers::boolean(&text_element("open", "0")));
    assert!(!transformers::boolean(&text_element("open", "false")));
    assert!(!transformers::boolean(&XmlNode::element("open")));
    assert!(!transformers::boolean(None::<&XmlNode>));
}

#[test]
fn test_date() {
    let when = transformers::date(&text_element("when", "2016-03-09T12:00:00Z"));
    assert!(when.is_valid());
    assert_eq!(when.to_string(), "2016-03-09T12:00:00Z");

    assert!(!transformers::date(&text_element("when", "soon")).is_valid());
    assert!(!transformers::date(None::<&XmlNode>).is_valid());
}

#[test]
fn test_positions_swap_longitude_and_latitude() {
    let node = text_element("coordinates", "1,2,3 4,5,6");
    assert_eq!(transformers::positions(&node), vec![
        Position::new(2.0, 1.0, 3.0),
        Position::new(5.0, 4.0, 6.0),
    ]);
}

#[test]
fn test_positions_default_altitude() {
    let node = text_element("coordinates", "1,2");
    assert_eq!(transformers::positions(&node), vec![Position::new(2.0, 1.0, 0.0)]);

    let empty_altitude = text_element("coordinates", "1,2,");
    assert_eq!(transformers::positions(&empty_altitude), vec![Position::new(2.0, 1.0, 0.0)]);
}

#[test]
fn test_positions_collapse_whitespace() {
    let node = text_element("coordinates", "\n\t  -122.08,37.42,10\n   -122.09,37.43,20  \r\n");
    let positions = transformers::positions(&node);
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], Position::new(37.42, -122.08, 10.0));
    assert_eq!(positions[1], Position::new(37.43, -122.09, 20.0));
}

#[test]
fn test_positions_of_empty_text() {
    assert!(transformers::positions(&text_element("coordinates", "   \n ")).is_empty());
    assert!(transformers::positions(&XmlNode::element("coordinates")).is_empty());
}

#[test]
fn test_positions_with_bad_fields_are_nan() {
    let positions = transformers::positions(&text_element("coordinates", "abc,2 7"));
    assert_eq!(positions.len(), 2);
    assert!(positions[0].longitude.is_nan());
    assert_eq!(positions[0].latitude, 2.0);
    assert_eq!(positions[1].longitude, 7.0);
    assert!(positions[1].latitude.is_nan());
    assert!(!positions[1].is_valid());
}

#[test]
fn test_attribute_transformer_is_reusable() {
    let id = transformers::attribute::<XmlNode>("id");
    let a = XmlNode::element("Style").with_attribute("id", "a");
    let b = XmlNode::element("Style").with_attribute("id", "b");

    assert_eq!(id(&a), Some("a".to_string()));
    assert_eq!(id(&b), Some("b".to_string()));
    assert_eq!(id(&a), Some("a".to_string()));
    assert_eq!(id(&XmlNode::element("Style")), None);
}

#[test]
fn test_kml_object_resolves_by_name() {
    let transformers = NodeTransformers::standard();
    let node = XmlNode::element("Placemark").with_attribute("id", "home");

    let object = transformers.kml_object(&node).unwrap();
    assert_eq!(object.kind(), KmlElementKind::Placemark);
    assert_eq!(object.id(), Some("home".to_string()));
    assert!(std::ptr::eq(object.node(), &node));
}

#[test]
fn test_kml_object_unknown_name_is_none() {
    let transformers = NodeTransformers::standard();
    assert!(transformers.kml_object(&XmlNode::element("gx:Tour")).is_none());
    assert!(transformers.kml_object(&XmlNode::element("placemark")).is_none());
    assert!(transformers.kml_object(&XmlNode::text("Placemark")).is_none());
}

#[test]
fn test_linear_ring_ignores_node_name() {
    let transformers = NodeTransformers::standard();
    let boundary = XmlNode::element("outerBoundaryIs")
        .with_child(XmlNode::element("LinearRing"));

    let ring = transformers.linear_ring(&boundary).unwrap();
    assert_eq!(ring.kind(), KmlElementKind::LinearRing);
    assert_eq!(ring.node().node_name(), "outerBoundaryIs");

    // The name based lookup has nothing for the boundary element
    assert!(transformers.kml_object(&boundary).is_none());
}

#[test]
fn test_linear_ring_uses_registered_constructor() {
    let registry = ElementRegistry::<XmlNode>::builder()
        .register(KmlElementKind::LinearRing, |options| {
            KmlObject::new(KmlElementKind::Polygon, options)
        }).unwrap()
        .register_remaining()
        .build().unwrap();
    let transformers = NodeTransformers::new(&registry);

    let inner = XmlNode::element("innerBoundaryIs");
    let ring = transformers.linear_ring(&inner).unwrap();
    assert_eq!(ring.kind(), KmlElementKind::Polygon);
    assert!(std::ptr::eq(ring.node(), &inner));
    assert!(std::ptr::eq(transformers.registry(), &registry));
}

#[test]
fn test_transformers_are_idempotent() {
    let transformers = NodeTransformers::standard();
    let root = XmlReader::parse_str(
        "<Placemark><name>A</name><coordinates>1,2 3,4</coordinates><when>2020</when></Placemark>",
    ).unwrap();

    for child in root.descendants() {
        for kind in [TransformerKind::String, TransformerKind::Number, TransformerKind::Boolean,
                     TransformerKind::Date, TransformerKind::Positions, TransformerKind::KmlObject,
                     TransformerKind::LinearRing, TransformerKind::Attribute("id".to_string())] {
            let first = transformers.apply(&kind, child);
            let second = transformers.apply(&kind, child);
            match (&first, &second) {
                // NaN never equals itself
                (KmlValue::Number(a), KmlValue::Number(b)) if a.is_nan() => assert!(b.is_nan()),
                (KmlValue::Positions(_), KmlValue::Positions(_)) => {
                    assert_eq!(first.to_string(), second.to_string())
                }
                _ => assert_eq!(first, second),
            }
        }
    }
}

#[test]
fn test_apply_dispatches_on_kind() {
    let transformers = NodeTransformers::standard();
    let node = text_element("width", "2.5").with_attribute("unit", "px");

    assert_eq!(transformers.apply(&TransformerKind::Number, &node).as_number(), Some(2.5));
    assert_eq!(transformers.apply(&TransformerKind::String, &node).as_str(), Some("2.5"));
    assert_eq!(transformers.apply(&TransformerKind::Boolean, &node).as_bool(), Some(false));
    assert_eq!(
        transformers.apply(&TransformerKind::Attribute("unit".to_string()), &node).as_str(),
        Some("px")
    );
    assert!(transformers.apply(&TransformerKind::KmlObject, &node).as_object().is_none());
    assert!(transformers.apply(&TransformerKind::LinearRing, &node).as_object().is_some());
}
