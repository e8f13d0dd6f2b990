//! Named attribute of a node

use super::node::Node;

/// Accessor for one named attribute of a node
///
/// The attribute is read lazily, each call goes back to the node.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a, N: Node> {
    node: &'a N,
    name: &'a str,
}

impl<'a, N: Node> Attribute<'a, N> {
    /// Create an accessor for `name` on `node`
    pub fn new(node: &'a N, name: &'a str) -> Self {
        Attribute { node, name }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether the node carries the attribute at all
    pub fn exists(&self) -> bool {
        self.node.attribute(self.name).is_some()
    }

    /// The attribute value, or `None` when the node does not carry it
    pub fn value(&self) -> Option<String> {
        self.node.attribute(self.name).map(str::to_string)
    }
}
