//! Node transformers
//!
//! Functions turning a single KML node into an application value. The
//! primitive transformers never fail: missing or malformed text degrades
//! to an empty string, NaN, `false` or an invalid date. The object
//! transformers return `None` when no constructor matches.
//!
//! ```
//! use kmlkit::kml::transformers;
//! use kmlkit::xml::XmlNode;
//!
//! let node = XmlNode::element("coordinates").with_text("1,2,3 4,5");
//! let positions = transformers::positions(&node);
//! assert_eq!(positions[0].latitude, 2.0);
//! assert_eq!(positions[1].altitude, 0.0);
//! ```

use lazy_static::lazy_static;

use crate::coordinate::Position;
use crate::kml::elements::KmlElementKind;
use crate::kml::object::KmlObject;
use crate::kml::registry::ElementRegistry;
use crate::kml::schema::TransformerKind;
use crate::kml::value::KmlValue;
use crate::utils::coercion::{parse_number, transform_to_boolean, KmlDate};
use crate::utils::string_utils::whitespace_tokens;
use crate::xml::{Attribute, Node, XmlNode};

lazy_static! {
    /// Standard registry for the crate's own DOM
    pub static ref STANDARD_REGISTRY: ElementRegistry<XmlNode> = ElementRegistry::standard();
}

/// Text of the node's first child
///
/// Empty when the node is absent, has no children, or its first child is
/// not a text node.
pub fn text_of<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> &'a str {
    node.into()
        .and_then(|node| node.child_nodes().first())
        .and_then(|child| child.node_value())
        .unwrap_or("")
}

/// Node text as a string
pub fn string<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> String {
    text_of(node).to_string()
}

/// Node text as a number, NaN when it is not one
pub fn number<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> f64 {
    parse_number(text_of(node))
}

/// Node text as a boolean: `1` and `true` are true
pub fn boolean<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> bool {
    transform_to_boolean(text_of(node))
}

/// Node text as a date
pub fn date<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> KmlDate {
    KmlDate::parse(text_of(node))
}

/// Positions from a KML coordinate list
///
/// Tuples are separated by whitespace, fields within a tuple by commas, in
/// the order `longitude,latitude[,altitude]`. An absent or empty altitude
/// is 0. Fields that are not numbers become NaN. Empty text yields no
/// positions.
pub fn positions<'a, N: Node + 'a>(node: impl Into<Option<&'a N>>) -> Vec<Position> {
    whitespace_tokens(text_of(node))
        .iter()
        .map(|tuple| position_from_tuple(tuple))
        .collect()
}

fn position_from_tuple(tuple: &str) -> Position {
    let mut fields = tuple.split(',');
    let longitude = fields.next().map(parse_number).unwrap_or(f64::NAN);
    let latitude = fields.next().map(parse_number).unwrap_or(f64::NAN);
    let altitude = match fields.next() {
        Some(field) if !field.is_empty() => parse_number(field),
        _ => 0.0,
    };
    Position::from_kml_tuple(longitude, latitude, altitude)
}

/// Transformer reading the attribute `name`
///
/// The returned closure holds no state besides the name and can be applied
/// to any number of nodes.
pub fn attribute<N: Node>(name: &str) -> impl Fn(&N) -> Option<String> + Clone + Send + Sync {
    let name = name.to_string();
    move |node: &N| Attribute::new(node, &name).value()
}

/// Transformers that need an element registry
pub struct NodeTransformers<'r, N> {
    registry: &'r ElementRegistry<N>,
}

impl<'r, N: Node + 'static> NodeTransformers<'r, N> {
    pub fn new(registry: &'r ElementRegistry<N>) -> Self {
        NodeTransformers { registry }
    }

    pub fn registry(&self) -> &'r ElementRegistry<N> {
        self.registry
    }

    /// Domain object for the node, chosen by the node's own name
    ///
    /// `None` when the name has no registered constructor.
    pub fn kml_object<'a>(&self, node: &'a N) -> Option<KmlObject<'a, N>> {
        self.registry.construct(node.node_name(), node)
    }

    /// `LinearRing` object backed by the node, whatever its name
    ///
    /// Boundary elements such as `outerBoundaryIs` are read as rings.
    pub fn linear_ring<'a>(&self, node: &'a N) -> Option<KmlObject<'a, N>> {
        self.registry.construct(KmlElementKind::LinearRing.as_str(), node)
    }

    /// Apply the transformer named by `kind`
    pub fn apply<'a>(&self, kind: &TransformerKind, node: &'a N) -> KmlValue<'a, N> {
        match kind {
            TransformerKind::String => KmlValue::String(string(node)),
            TransformerKind::Number => KmlValue::Number(number(node)),
            TransformerKind::Boolean => KmlValue::Boolean(boolean(node)),
            TransformerKind::Date => KmlValue::Date(date(node)),
            TransformerKind::Positions => KmlValue::Positions(positions(node)),
            TransformerKind::KmlObject => KmlValue::Object(self.kml_object(node)),
            TransformerKind::LinearRing => KmlValue::Object(self.linear_ring(node)),
            TransformerKind::Attribute(name) => KmlValue::Attribute(attribute::<N>(name)(node)),
        }
    }
}

impl NodeTransformers<'static, XmlNode> {
    /// Transformers over the standard registry for `XmlNode`
    pub fn standard() -> Self {
        Self::new(&STANDARD_REGISTRY)
    }
}
