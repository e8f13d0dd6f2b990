//! Values produced by table-driven transformation

use std::fmt;

use crate::coordinate::Position;
use crate::kml::object::KmlObject;
use crate::utils::coercion::KmlDate;
use crate::xml::Node;

/// Result of applying a transformer picked from a field table
#[derive(Debug, Clone, PartialEq)]
pub enum KmlValue<'a, N: Node> {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(KmlDate),
    Positions(Vec<Position>),
    /// `None` when no constructor matched
    Object(Option<KmlObject<'a, N>>),
    /// `None` when the attribute is absent
    Attribute(Option<String>),
}

impl<'a, N: Node> KmlValue<'a, N> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KmlValue::String(value) => Some(value),
            KmlValue::Attribute(value) => value.as_deref(),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            KmlValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            KmlValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_positions(&self) -> Option<&[Position]> {
        match self {
            KmlValue::Positions(positions) => Some(positions),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&KmlObject<'a, N>> {
        match self {
            KmlValue::Object(object) => object.as_ref(),
            _ => None,
        }
    }
}

impl<'a, N: Node> fmt::Display for KmlValue<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlValue::String(value) => write!(f, "{:?}", value),
            KmlValue::Number(value) => write!(f, "{}", value),
            KmlValue::Boolean(value) => write!(f, "{}", value),
            KmlValue::Date(value) => write!(f, "{}", value),
            KmlValue::Positions(positions) => {
                let rendered: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            KmlValue::Object(Some(object)) => write!(f, "<{}>", object.label()),
            KmlValue::Object(None) | KmlValue::Attribute(None) => f.write_str("(none)"),
            KmlValue::Attribute(Some(value)) => write!(f, "{:?}", value),
        }
    }
}
