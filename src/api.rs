use log::info;

use crate::coordinate::{BoundingBox, Position};
use crate::kml::document::{ElementReport, KmlDocument};
use crate::kml::elements::KmlElementKind;
use crate::kml::errors::KmlResult;
use crate::kml::schema::FieldSchema;
use crate::kml::transformers::NodeTransformers;

/// Main interface to the kmlkit library
pub struct KmlKit {
    schema: FieldSchema,
}

impl KmlKit {
    /// Create a new KmlKit instance using the built-in field tables
    pub fn new() -> Self {
        KmlKit {
            schema: FieldSchema::embedded().clone(),
        }
    }

    /// Create a KmlKit instance reading fields through the tables in `schema_path`
    ///
    /// # Arguments
    /// * `schema_path` - Path to a TOML file with field tables
    ///
    /// # Returns
    /// A KmlKit instance or an error if the tables cannot be loaded
    pub fn with_schema_file(schema_path: &str) -> KmlResult<Self> {
        Ok(KmlKit {
            schema: FieldSchema::from_file(schema_path)?,
        })
    }

    /// Field tables in use
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Load a KML file
    pub fn load(&self, input_path: &str) -> KmlResult<KmlDocument> {
        KmlDocument::from_file(input_path)
    }

    /// Inspect a KML file and return its objects with their transformed fields
    ///
    /// # Arguments
    /// * `input_path` - Path to the KML file
    /// * `element` - Only report objects of this kind
    pub fn inspect(&self, input_path: &str, element: Option<KmlElementKind>) -> KmlResult<Vec<ElementReport>> {
        let document = self.load(input_path)?;
        let reports = document.report(&NodeTransformers::standard(), &self.schema, element);
        info!("Inspected {}: {} objects", input_path, reports.len());
        Ok(reports)
    }

    /// Inspect a KML file and format the result as text
    pub fn summary(&self, input_path: &str) -> KmlResult<String> {
        let reports = self.inspect(input_path, None)?;

        let mut result = String::from("KML Inspection Results:\n");
        result.push_str(&format!("  Number of objects: {}\n", reports.len()));

        for report in &reports {
            result.push_str(&format!("\n{}\n", report.label));
            for (name, value) in &report.fields {
                result.push_str(&format!("  {}: {}\n", name, value));
            }
        }

        Ok(result)
    }

    /// Every position of every `coordinates` element in a KML file
    pub fn coordinates(&self, input_path: &str) -> KmlResult<Vec<Position>> {
        Ok(self.load(input_path)?.positions())
    }

    /// Bounding box of every valid position in a KML file
    pub fn bounds(&self, input_path: &str) -> KmlResult<Option<BoundingBox>> {
        let positions = self.coordinates(input_path)?;
        Ok(BoundingBox::from_positions(&positions))
    }
}

impl Default for KmlKit {
    fn default() -> Self {
        Self::new()
    }
}
