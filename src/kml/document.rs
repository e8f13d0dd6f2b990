//! A parsed KML document and the walks over it

use log::{debug, info};

use crate::coordinate::Position;
use crate::kml::elements::KmlElementKind;
use crate::kml::errors::KmlResult;
use crate::kml::object::KmlObject;
use crate::kml::schema::FieldSchema;
use crate::kml::transformers::{self, NodeTransformers};
use crate::xml::{Node, XmlNode, XmlReader};

/// Transformed fields of one element, rendered for display
#[derive(Debug, Clone, PartialEq)]
pub struct ElementReport {
    /// Element label, e.g. `Placemark#home`
    pub label: String,
    /// Field name and rendered value, in document order
    pub fields: Vec<(String, String)>,
}

/// KML document held in memory
#[derive(Debug, Clone)]
pub struct KmlDocument {
    root: XmlNode,
}

impl KmlDocument {
    /// Wrap an already parsed tree
    pub fn new(root: XmlNode) -> Self {
        KmlDocument { root }
    }

    /// Parse KML text
    pub fn parse_str(kml: &str) -> KmlResult<Self> {
        Ok(KmlDocument::new(XmlReader::parse_str(kml)?))
    }

    /// Read and parse a KML file
    pub fn from_file(path: &str) -> KmlResult<Self> {
        let document = KmlDocument::new(XmlReader::from_file(path)?);
        info!("Loaded {} with {} elements", path, document.root.descendants().len());
        Ok(document)
    }

    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Every element with a registered constructor, depth-first
    pub fn objects<'a>(&'a self, transformers: &NodeTransformers<'_, XmlNode>) -> Vec<KmlObject<'a, XmlNode>> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter_map(|node| transformers.kml_object(node))
            .collect()
    }

    /// Every position of every `coordinates` element, in document order
    pub fn positions(&self) -> Vec<Position> {
        self.root
            .elements_by_name("coordinates")
            .into_iter()
            .flat_map(|node| transformers::positions(node))
            .collect()
    }

    /// Render the transformed fields of every object, optionally of one kind only
    pub fn report(
        &self,
        transformers: &NodeTransformers<'_, XmlNode>,
        schema: &FieldSchema,
        kind: Option<KmlElementKind>,
    ) -> Vec<ElementReport> {
        let objects = self.objects(transformers);
        debug!("Found {} KML objects", objects.len());

        objects
            .iter()
            .filter(|object| kind.map_or(true, |kind| object.kind() == kind))
            .map(|object| ElementReport {
                label: object.label(),
                fields: schema
                    .transform_fields(transformers, object)
                    .into_iter()
                    .map(|(name, value)| (name, value.to_string()))
                    .collect(),
            })
            .collect()
    }

    /// Names of elements without a registered constructor, deduplicated
    pub fn unknown_elements(&self, transformers: &NodeTransformers<'_, XmlNode>) -> Vec<String> {
        let mut unknown: Vec<String> = Vec::new();
        for node in self.root.descendants() {
            let name = node.node_name();
            let is_field = node.child_elements().next().is_none();
            if !is_field && transformers.kml_object(node).is_none() && !unknown.iter().any(|u| u == name) {
                unknown.push(name.to_string());
            }
        }
        unknown
    }
}
