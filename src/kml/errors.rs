//! Custom error types for KML processing

use std::fmt;
use std::io;

use crate::kml::elements::KmlElementKind;

/// KML-specific error types
#[derive(Debug)]
pub enum KmlError {
    /// I/O error
    IoError(io::Error),
    /// Malformed XML reported by the reader
    XmlError(String),
    /// A constructor was registered twice for the same element kind
    DuplicateConstructor(KmlElementKind),
    /// The registry was built without a constructor for an element kind
    MissingConstructor(KmlElementKind),
    /// Invalid field schema definition
    SchemaError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlError::IoError(e) => write!(f, "I/O error: {}", e),
            KmlError::XmlError(msg) => write!(f, "XML error: {}", msg),
            KmlError::DuplicateConstructor(kind) => {
                write!(f, "Constructor registered twice for element: {}", kind)
            }
            KmlError::MissingConstructor(kind) => {
                write!(f, "No constructor registered for element: {}", kind)
            }
            KmlError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            KmlError::GenericError(msg) => write!(f, "KML error: {}", msg),
        }
    }
}

impl std::error::Error for KmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmlError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for KmlError {
    fn from(error: io::Error) -> Self {
        KmlError::IoError(error)
    }
}

impl From<quick_xml::Error> for KmlError {
    fn from(error: quick_xml::Error) -> Self {
        KmlError::XmlError(error.to_string())
    }
}

impl From<String> for KmlError {
    fn from(msg: String) -> Self {
        KmlError::GenericError(msg)
    }
}

/// Result type for KML operations
pub type KmlResult<T> = Result<T, KmlError>;
