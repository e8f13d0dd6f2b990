//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod coordinates_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use coordinates_command::CoordinatesCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::kml::errors::{KmlError, KmlResult};
use crate::kml::schema::FieldSchema;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct KmlkitCommandFactory;

impl KmlkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        KmlkitCommandFactory
    }
}

impl Default for KmlkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for KmlkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> KmlResult<Box<dyn Command>> {
        if args.get_flag("coordinates") {
            Ok(Box::new(CoordinatesCommand::new(args)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args)?))
        }
    }
}

/// Read the required input path
pub(crate) fn input_file(args: &ArgMatches) -> KmlResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| KmlError::GenericError("Missing input file".to_string()))
}

/// Load the field tables named by `--schema`, or the embedded ones
pub(crate) fn field_schema(args: &ArgMatches) -> KmlResult<FieldSchema> {
    match args.get_one::<String>("schema") {
        Some(path) => FieldSchema::from_file(path),
        None => Ok(FieldSchema::embedded().clone()),
    }
}

/// Command-line interface definition
pub fn cli() -> ClapCommand {
    ClapCommand::new("kmlkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read KML elements into typed values and coordinates")
        .arg(
            Arg::new("input")
                .help("Input KML file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("coordinates")
                .short('c')
                .long("coordinates")
                .help("List every position and their bounding box")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("element")
                .short('e')
                .long("element")
                .help("Only inspect elements with this name (e.g. Placemark)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .help("TOML file with field tables to use instead of the built-in ones")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TRACK: &str = "<kml><Placemark><LineString><coordinates>1,2 3,4</coordinates></LineString></Placemark></kml>";

    fn matches(args: &[&str]) -> ArgMatches {
        cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(cli().try_get_matches_from(["kmlkit"]).is_err());
    }

    #[test]
    fn test_factory_runs_both_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.kml");
        fs::write(&path, TRACK).unwrap();
        let path = path.to_str().unwrap();

        let factory = KmlkitCommandFactory::new();
        for args in [vec!["kmlkit", path], vec!["kmlkit", path, "--coordinates"],
                     vec!["kmlkit", path, "--element", "LineString", "-v"]] {
            let command = factory.create_command(&matches(&args)).unwrap();
            command.execute().unwrap();
        }
    }

    #[test]
    fn test_unknown_element_is_rejected() {
        let factory = KmlkitCommandFactory::new();
        let result = factory.create_command(&matches(&["kmlkit", "in.kml", "--element", "Placemarks"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_fails_on_execute() {
        let factory = KmlkitCommandFactory::new();
        let command = factory.create_command(&matches(&["kmlkit", "/nonexistent/in.kml"])).unwrap();
        assert!(matches!(command.execute(), Err(KmlError::IoError(_))));
    }
}
