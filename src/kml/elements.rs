//! KML element kinds
//!
//! Every KML element the crate knows how to represent as a domain object,
//! together with its tag name and the abstract KML class it belongs to.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;

/// Abstract KML class an element derives from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    /// Document, Folder
    Container,
    /// Placemarks, network links and overlays
    Feature,
    /// Point, LineString, Polygon and friends
    Geometry,
    /// Style, StyleMap
    StyleSelector,
    /// IconStyle, LineStyle, ...
    SubStyle,
    /// TimeSpan, TimeStamp
    TimePrimitive,
    /// Camera, LookAt
    View,
    /// Region and its boxes
    Region,
    /// Link, Icon
    Link,
    /// ExtendedData and its parts
    Data,
    /// Everything else (Orientation, Location, Scale, ...)
    Other,
}

/// Known KML element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KmlElementKind {
    Document,
    Folder,
    Placemark,
    NetworkLink,
    GroundOverlay,
    ScreenOverlay,
    PhotoOverlay,
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiGeometry,
    Model,
    Style,
    StyleMap,
    IconStyle,
    LabelStyle,
    LineStyle,
    PolyStyle,
    BalloonStyle,
    ListStyle,
    TimeSpan,
    TimeStamp,
    Camera,
    LookAt,
    Region,
    LatLonBox,
    LatLonAltBox,
    Lod,
    Link,
    Icon,
    ExtendedData,
    Data,
    SchemaData,
    Orientation,
    Location,
    Scale,
    Pair,
}

// Tag name and category for each kind, in declaration order
const ELEMENT_TABLE: &[(KmlElementKind, &str, ElementCategory)] = &[
    (KmlElementKind::Document, "Document", ElementCategory::Container),
    (KmlElementKind::Folder, "Folder", ElementCategory::Container),
    (KmlElementKind::Placemark, "Placemark", ElementCategory::Feature),
    (KmlElementKind::NetworkLink, "NetworkLink", ElementCategory::Feature),
    (KmlElementKind::GroundOverlay, "GroundOverlay", ElementCategory::Feature),
    (KmlElementKind::ScreenOverlay, "ScreenOverlay", ElementCategory::Feature),
    (KmlElementKind::PhotoOverlay, "PhotoOverlay", ElementCategory::Feature),
    (KmlElementKind::Point, "Point", ElementCategory::Geometry),
    (KmlElementKind::LineString, "LineString", ElementCategory::Geometry),
    (KmlElementKind::LinearRing, "LinearRing", ElementCategory::Geometry),
    (KmlElementKind::Polygon, "Polygon", ElementCategory::Geometry),
    (KmlElementKind::MultiGeometry, "MultiGeometry", ElementCategory::Geometry),
    (KmlElementKind::Model, "Model", ElementCategory::Geometry),
    (KmlElementKind::Style, "Style", ElementCategory::StyleSelector),
    (KmlElementKind::StyleMap, "StyleMap", ElementCategory::StyleSelector),
    (KmlElementKind::IconStyle, "IconStyle", ElementCategory::SubStyle),
    (KmlElementKind::LabelStyle, "LabelStyle", ElementCategory::SubStyle),
    (KmlElementKind::LineStyle, "LineStyle", ElementCategory::SubStyle),
    (KmlElementKind::PolyStyle, "PolyStyle", ElementCategory::SubStyle),
    (KmlElementKind::BalloonStyle, "BalloonStyle", ElementCategory::SubStyle),
    (KmlElementKind::ListStyle, "ListStyle", ElementCategory::SubStyle),
    (KmlElementKind::TimeSpan, "TimeSpan", ElementCategory::TimePrimitive),
    (KmlElementKind::TimeStamp, "TimeStamp", ElementCategory::TimePrimitive),
    (KmlElementKind::Camera, "Camera", ElementCategory::View),
    (KmlElementKind::LookAt, "LookAt", ElementCategory::View),
    (KmlElementKind::Region, "Region", ElementCategory::Region),
    (KmlElementKind::LatLonBox, "LatLonBox", ElementCategory::Region),
    (KmlElementKind::LatLonAltBox, "LatLonAltBox", ElementCategory::Region),
    (KmlElementKind::Lod, "Lod", ElementCategory::Region),
    (KmlElementKind::Link, "Link", ElementCategory::Link),
    (KmlElementKind::Icon, "Icon", ElementCategory::Link),
    (KmlElementKind::ExtendedData, "ExtendedData", ElementCategory::Data),
    (KmlElementKind::Data, "Data", ElementCategory::Data),
    (KmlElementKind::SchemaData, "SchemaData", ElementCategory::Data),
    (KmlElementKind::Orientation, "Orientation", ElementCategory::Other),
    (KmlElementKind::Location, "Location", ElementCategory::Other),
    (KmlElementKind::Scale, "Scale", ElementCategory::Other),
    (KmlElementKind::Pair, "Pair", ElementCategory::Other),
];

lazy_static! {
    static ref KINDS_BY_NAME: HashMap<&'static str, KmlElementKind> = ELEMENT_TABLE
        .iter()
        .map(|(kind, name, _)| (*name, *kind))
        .collect();
}

impl KmlElementKind {
    /// Every known kind, in declaration order
    pub fn all() -> impl Iterator<Item = KmlElementKind> {
        ELEMENT_TABLE.iter().map(|(kind, _, _)| *kind)
    }

    /// Look up a kind by its exact (case-sensitive) tag name
    pub fn from_name(name: &str) -> Option<KmlElementKind> {
        KINDS_BY_NAME.get(name).copied()
    }

    /// The KML tag name of this kind
    pub fn as_str(&self) -> &'static str {
        ELEMENT_TABLE[*self as usize].1
    }

    /// The abstract KML class of this kind
    pub fn category(&self) -> ElementCategory {
        ELEMENT_TABLE[*self as usize].2
    }

    pub fn is_geometry(&self) -> bool {
        self.category() == ElementCategory::Geometry
    }

    /// Containers are features too
    pub fn is_feature(&self) -> bool {
        matches!(self.category(), ElementCategory::Feature | ElementCategory::Container)
    }
}

impl fmt::Display for KmlElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
