//! Minimal XML document model
//!
//! The `Node` trait is the contract the KML transformers read through;
//! `XmlNode` and `XmlReader` provide a concrete tree for it.

mod attribute;
mod node;
mod reader;

pub use self::attribute::Attribute;
pub use self::node::{Node, XmlNode, TEXT_NODE_NAME};
pub use self::reader::XmlReader;
