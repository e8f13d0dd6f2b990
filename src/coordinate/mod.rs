//! Coordinate handling for KML geometry
//!
//! Positions produced from KML coordinate tuples and their extent.

mod bbox;
mod position;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::position::Position;
