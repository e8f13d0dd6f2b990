//! Node contract and the in-memory DOM implementing it

/// Read-only view of an XML node, as the transformers see it
///
/// Mirrors the small part of the DOM the transformers need: a name, the
/// ordered child nodes, the value of text nodes and attribute lookup.
pub trait Node: Sized {
    /// Element name, or `#text` for text nodes
    fn node_name(&self) -> &str;

    /// Ordered child nodes, text and elements interleaved
    fn child_nodes(&self) -> &[Self];

    /// Character data of a text node; `None` for elements
    fn node_value(&self) -> Option<&str>;

    /// Raw value of the named attribute
    fn attribute(&self, name: &str) -> Option<&str>;

    fn is_element(&self) -> bool {
        self.node_value().is_none()
    }

    /// Child elements, skipping text nodes
    fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.child_nodes().iter().filter(|child| child.is_element())
    }

    /// First child element with the given name
    fn child_element(&self, name: &str) -> Option<&Self> {
        self.child_elements().find(|child| child.node_name() == name)
    }
}

/// Name reported for text nodes
pub const TEXT_NODE_NAME: &str = "#text";

/// A node of the in-memory XML tree
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// An element with its attributes (in document order) and children
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<XmlNode>,
    },
    /// Character data (text or CDATA)
    Text(String),
}

impl XmlNode {
    /// Create an empty element
    pub fn element(name: &str) -> Self {
        XmlNode::Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(value: &str) -> Self {
        XmlNode::Text(value.to_string())
    }

    /// Add an attribute (builder style); no-op on text nodes
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        if let XmlNode::Element { attributes, .. } = &mut self {
            attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Append a child node (builder style); no-op on text nodes
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.push_child(child);
        self
    }

    /// Append a text child (builder style)
    pub fn with_text(self, value: &str) -> Self {
        self.with_child(XmlNode::text(value))
    }

    pub(crate) fn push_child(&mut self, child: XmlNode) {
        if let XmlNode::Element { children, .. } = self {
            children.push(child);
        }
    }

    /// All descendant elements with the given name, depth-first in document order
    ///
    /// The node itself is not included.
    pub fn elements_by_name(&self, name: &str) -> Vec<&XmlNode> {
        let mut found = Vec::new();
        self.collect_elements(&mut |node: &XmlNode| node.node_name() == name, &mut found);
        found
    }

    /// All descendant elements, depth-first in document order
    pub fn descendants(&self) -> Vec<&XmlNode> {
        let mut found = Vec::new();
        self.collect_elements(&mut |_: &XmlNode| true, &mut found);
        found
    }

    fn collect_elements<'a, F>(&'a self, predicate: &mut F, found: &mut Vec<&'a XmlNode>)
    where
        F: FnMut(&XmlNode) -> bool,
    {
        for child in self.child_nodes() {
            if child.is_element() {
                if predicate(child) {
                    found.push(child);
                }
                child.collect_elements(predicate, found);
            }
        }
    }
}

impl Node for XmlNode {
    fn node_name(&self) -> &str {
        match self {
            XmlNode::Element { name, .. } => name,
            XmlNode::Text(_) => TEXT_NODE_NAME,
        }
    }

    fn child_nodes(&self) -> &[XmlNode] {
        match self {
            XmlNode::Element { children, .. } => children,
            XmlNode::Text(_) => &[],
        }
    }

    fn node_value(&self) -> Option<&str> {
        match self {
            XmlNode::Element { .. } => None,
            XmlNode::Text(value) => Some(value),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            XmlNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            XmlNode::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let node = XmlNode::element("Placemark")
            .with_attribute("id", "pm-1")
            .with_child(XmlNode::element("name").with_text("Home"));

        assert_eq!(node.node_name(), "Placemark");
        assert_eq!(node.attribute("id"), Some("pm-1"));
        assert_eq!(node.attribute("targetId"), None);
        assert!(node.is_element());

        let name = node.child_element("name").unwrap();
        assert_eq!(name.child_nodes()[0].node_value(), Some("Home"));
        assert_eq!(name.child_nodes()[0].node_name(), TEXT_NODE_NAME);
    }

    #[test]
    fn test_elements_by_name_is_depth_first() {
        let tree = XmlNode::element("Document")
            .with_child(XmlNode::element("Folder")
                .with_child(XmlNode::element("Placemark").with_attribute("id", "a")))
            .with_child(XmlNode::element("Placemark").with_attribute("id", "b"));

        let ids: Vec<_> = tree.elements_by_name("Placemark")
            .iter()
            .map(|node| node.attribute("id").unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(tree.descendants().len(), 3);
    }
}
