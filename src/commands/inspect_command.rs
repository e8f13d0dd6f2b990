//! KML inspection command
//!
//! This module implements the command for listing the KML objects of a
//! document together with their transformed fields.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::kml::document::{ElementReport, KmlDocument};
use crate::kml::elements::KmlElementKind;
use crate::kml::errors::{KmlError, KmlResult};
use crate::kml::schema::FieldSchema;
use crate::kml::transformers::NodeTransformers;

/// Command for inspecting the objects of a KML file
pub struct InspectCommand {
    /// Path to the input file
    input_file: String,
    /// Only report elements of this kind
    element: Option<KmlElementKind>,
    /// Field tables used to read each element
    schema: FieldSchema,
    /// Whether to enable verbose output
    verbose: bool,
}

impl InspectCommand {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches) -> KmlResult<Self> {
        let input_file = super::input_file(args)?;

        let element = match args.get_one::<String>("element") {
            Some(name) => Some(KmlElementKind::from_name(name).ok_or_else(|| {
                KmlError::GenericError(format!("Unknown KML element: {}", name))
            })?),
            None => None,
        };

        Ok(InspectCommand {
            input_file,
            element,
            schema: super::field_schema(args)?,
            verbose: args.get_flag("verbose"),
        })
    }

    /// Display the fields of one element
    fn display_report(&self, report: &ElementReport) {
        info!("{}", report.label);
        for (name, value) in &report.fields {
            info!("  {}: {}", name, value);
        }
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> KmlResult<()> {
        info!("Inspecting file: {}", self.input_file);

        let document = KmlDocument::from_file(&self.input_file)?;
        let transformers = NodeTransformers::standard();

        let reports = document.report(&transformers, &self.schema, self.element);
        for report in &reports {
            self.display_report(report);
        }
        info!("{} KML objects reported", reports.len());

        if self.verbose {
            for name in document.unknown_elements(&transformers) {
                warn!("No KML object for element <{}>", name);
            }
        }

        debug!("Inspection completed successfully");
        Ok(())
    }
}
