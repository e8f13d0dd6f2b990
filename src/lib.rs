pub mod xml;
pub mod kml;
pub mod utils;
pub mod coordinate;
pub mod commands;
pub mod api;

pub use crate::api::KmlKit;

pub use kml::{KmlDocument, KmlElementKind, KmlError, KmlObject, KmlResult, KmlValue, NodeTransformers};
pub use coordinate::{BoundingBox, Position};
pub use xml::{Node, XmlNode};
