//! KML node transformation
//!
//! This module turns KML elements into typed values and domain objects:
//! the transformers themselves, the element registry they consult, and
//! the field tables that decide which transformer reads which field.

pub mod document;
pub mod elements;
pub mod errors;
pub mod object;
pub mod registry;
pub mod schema;
pub mod transformers;
pub mod value;
#[cfg(test)]
mod tests;

pub use document::{ElementReport, KmlDocument};
pub use elements::{ElementCategory, KmlElementKind};
pub use errors::{KmlError, KmlResult};
pub use object::{KmlObject, ObjectOptions};
pub use registry::{Constructor, ElementRegistry, RegistryBuilder};
pub use schema::{FieldSchema, TransformerKind};
pub use transformers::NodeTransformers;
pub use value::KmlValue;
