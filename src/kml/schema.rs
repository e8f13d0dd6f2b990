//! Field tables: which transformer reads which field
//!
//! A `FieldSchema` maps an element kind and a child element name to the
//! transformer that reads it, so walking a document is a table lookup and
//! not a chain of conditions. Tables are written in TOML; see
//! `kml_fields.toml` for the table embedded in the crate.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::kml::elements::KmlElementKind;
use crate::kml::errors::{KmlError, KmlResult};
use crate::kml::object::KmlObject;
use crate::kml::transformers::NodeTransformers;
use crate::kml::value::KmlValue;
use crate::xml::Node;

lazy_static! {
    // Parse the embedded field tables on first use
    static ref EMBEDDED_SCHEMA: FieldSchema = {
        let content = include_str!("../../kml_fields.toml");
        FieldSchema::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse embedded KML field tables: {}", e);
            FieldSchema::default()
        })
    };
}

/// Name of the table applying to every element
const COMMON_TABLE: &str = "common";
/// Name of the table applying to features and containers
const FEATURE_TABLE: &str = "feature";
/// Name of the table applying to geometries
const GEOMETRY_TABLE: &str = "geometry";

/// Transformer selected for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformerKind {
    String,
    Number,
    Boolean,
    Date,
    Positions,
    KmlObject,
    LinearRing,
    /// Reads the named attribute of the element itself
    Attribute(String),
}

impl TransformerKind {
    /// Look up a child-element transformer by its table name
    ///
    /// `attribute` is not a child-element transformer and yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(TransformerKind::String),
            "number" => Some(TransformerKind::Number),
            "boolean" => Some(TransformerKind::Boolean),
            "date" => Some(TransformerKind::Date),
            "positions" => Some(TransformerKind::Positions),
            "kmlObject" => Some(TransformerKind::KmlObject),
            "linearRing" => Some(TransformerKind::LinearRing),
            _ => None,
        }
    }

    /// Name used in field tables
    pub fn name(&self) -> &'static str {
        match self {
            TransformerKind::String => "string",
            TransformerKind::Number => "number",
            TransformerKind::Boolean => "boolean",
            TransformerKind::Date => "date",
            TransformerKind::Positions => "positions",
            TransformerKind::KmlObject => "kmlObject",
            TransformerKind::LinearRing => "linearRing",
            TransformerKind::Attribute(_) => "attribute",
        }
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformerKind::Attribute(name) => write!(f, "attribute({})", name),
            other => f.write_str(other.name()),
        }
    }
}

/// Fields of one table
#[derive(Debug, Clone, Default)]
struct FieldTable {
    // Child element name to transformer
    children: HashMap<String, TransformerKind>,
    // Attribute names, sorted
    attributes: Vec<String>,
}

impl FieldTable {
    fn parse(section: &str, table: &toml::Table) -> KmlResult<Self> {
        let mut fields = FieldTable::default();

        for (key, value) in table {
            let transformer = value.as_str().ok_or_else(|| {
                KmlError::SchemaError(format!("[{}] {}: transformer must be a string", section, key))
            })?;

            if let Some(attribute) = key.strip_prefix('@') {
                if transformer != "attribute" {
                    return Err(KmlError::SchemaError(format!(
                        "[{}] {}: attributes can only use the attribute transformer", section, key)));
                }
                fields.attributes.push(attribute.to_string());
            } else {
                let kind = TransformerKind::from_name(transformer).ok_or_else(|| {
                    KmlError::SchemaError(format!(
                        "[{}] {}: unknown transformer '{}'", section, key, transformer))
                })?;
                fields.children.insert(key.clone(), kind);
            }
        }

        fields.attributes.sort();
        Ok(fields)
    }
}

/// Element kind and field name → transformer table
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    common: FieldTable,
    feature: FieldTable,
    geometry: FieldTable,
    elements: HashMap<KmlElementKind, FieldTable>,
}

impl FieldSchema {
    /// The field tables embedded in the crate
    pub fn embedded() -> &'static FieldSchema {
        &EMBEDDED_SCHEMA
    }

    /// Parse field tables from a TOML string
    pub fn from_str(content: &str) -> KmlResult<Self> {
        let document: toml::Table = toml::from_str(content)
            .map_err(|e| KmlError::SchemaError(format!("Failed to parse TOML: {}", e)))?;

        let mut schema = FieldSchema::default();

        for (section, value) in &document {
            let table = value.as_table().ok_or_else(|| {
                KmlError::SchemaError(format!("'{}' must be a table", section))
            })?;
            let fields = FieldTable::parse(section, table)?;

            match section.as_str() {
                COMMON_TABLE => schema.common = fields,
                FEATURE_TABLE => schema.feature = fields,
                GEOMETRY_TABLE => schema.geometry = fields,
                name => {
                    let kind = KmlElementKind::from_name(name).ok_or_else(|| {
                        KmlError::SchemaError(format!("Unknown KML element: [{}]", name))
                    })?;
                    schema.elements.insert(kind, fields);
                }
            }
        }

        debug!("Loaded field tables for {} element kinds", schema.elements.len());
        Ok(schema)
    }

    /// Load field tables from a TOML file
    pub fn from_file(path: &str) -> KmlResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    // Tables consulted for a kind, most specific first
    fn tables_for(&self, kind: KmlElementKind) -> Vec<&FieldTable> {
        let mut tables = Vec::with_capacity(3);
        if let Some(table) = self.elements.get(&kind) {
            tables.push(table);
        }
        if kind.is_feature() {
            tables.push(&self.feature);
        }
        if kind.is_geometry() {
            tables.push(&self.geometry);
        }
        tables.push(&self.common);
        tables
    }

    /// Transformer for the child element `field` of an element of `kind`
    pub fn transformer_for(&self, kind: KmlElementKind, field: &str) -> Option<&TransformerKind> {
        self.tables_for(kind)
            .into_iter()
            .find_map(|table| table.children.get(field))
    }

    /// Attributes read from an element of `kind`, general tables first
    pub fn attributes_for(&self, kind: KmlElementKind) -> Vec<&str> {
        let mut attributes: Vec<&str> = Vec::new();
        for table in self.tables_for(kind).into_iter().rev() {
            for attribute in &table.attributes {
                if !attributes.contains(&attribute.as_str()) {
                    attributes.push(attribute);
                }
            }
        }
        attributes
    }

    /// Whether any table mentions `kind` or applies to it
    pub fn has_fields(&self, kind: KmlElementKind) -> bool {
        self.tables_for(kind)
            .iter()
            .any(|table| !table.children.is_empty() || !table.attributes.is_empty())
    }

    /// Transform every known field of `object`
    ///
    /// Present attributes come first, as `@name`, followed by the child
    /// elements that have a transformer, in document order. Children
    /// without a transformer are skipped.
    pub fn transform_fields<'a, N: Node + 'static>(
        &self,
        transformers: &NodeTransformers<'_, N>,
        object: &KmlObject<'a, N>,
    ) -> Vec<(String, KmlValue<'a, N>)> {
        let kind = object.kind();
        let mut fields = Vec::new();

        for attribute in self.attributes_for(kind) {
            let transformer = TransformerKind::Attribute(attribute.to_string());
            let value = transformers.apply(&transformer, object.node());
            if matches!(value, KmlValue::Attribute(Some(_))) {
                fields.push((format!("@{}", attribute), value));
            }
        }

        for child in object.children() {
            if let Some(transformer) = self.transformer_for(kind, child.node_name()) {
                fields.push((child.node_name().to_string(), transformers.apply(transformer, child)));
            }
        }

        fields
    }
}
