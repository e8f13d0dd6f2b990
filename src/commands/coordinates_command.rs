//! Coordinate listing command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::coordinate::BoundingBox;
use crate::kml::document::KmlDocument;
use crate::kml::errors::KmlResult;

/// Command for listing every position of a KML file
pub struct CoordinatesCommand {
    /// Path to the input file
    input_file: String,
}

impl CoordinatesCommand {
    /// Create a new coordinates command
    pub fn new(args: &ArgMatches) -> KmlResult<Self> {
        Ok(CoordinatesCommand {
            input_file: super::input_file(args)?,
        })
    }
}

impl Command for CoordinatesCommand {
    fn execute(&self) -> KmlResult<()> {
        info!("Reading coordinates from: {}", self.input_file);

        let document = KmlDocument::from_file(&self.input_file)?;
        let positions = document.positions();

        for position in &positions {
            info!("  lat={} lon={} alt={}", position.latitude, position.longitude, position.altitude);
        }
        info!("{} positions", positions.len());

        match BoundingBox::from_positions(&positions) {
            Some(bbox) => info!("Bounds: south={} west={} north={} east={}",
                                bbox.min_latitude, bbox.min_longitude,
                                bbox.max_latitude, bbox.max_longitude),
            None => info!("Bounds: none"),
        }

        debug!("Coordinate listing completed successfully");
        Ok(())
    }
}
