//! Domain objects backed by KML elements

use std::fmt;

use crate::kml::elements::KmlElementKind;
use crate::xml::{Attribute, Node};

/// Options handed to an element constructor
pub struct ObjectOptions<'a, N> {
    /// The element the new object reads its fields from
    pub object_node: &'a N,
}

impl<'a, N> ObjectOptions<'a, N> {
    pub fn new(object_node: &'a N) -> Self {
        ObjectOptions { object_node }
    }
}

/// A KML object of a known kind, reading its fields from its backing node
///
/// The backing node is usually the element whose name matches the kind,
/// but not always: a `LinearRing` built for `outerBoundaryIs` is backed by
/// the boundary element.
pub struct KmlObject<'a, N> {
    kind: KmlElementKind,
    node: &'a N,
}

impl<'a, N: Node> KmlObject<'a, N> {
    /// Create an object of `kind` backed by `options.object_node`
    pub fn new(kind: KmlElementKind, options: ObjectOptions<'a, N>) -> Self {
        KmlObject {
            kind,
            node: options.object_node,
        }
    }

    pub fn kind(&self) -> KmlElementKind {
        self.kind
    }

    /// The backing element
    pub fn node(&self) -> &'a N {
        self.node
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<String> {
        Attribute::new(self.node, "id").value()
    }

    /// Value of the `targetId` attribute
    pub fn target_id(&self) -> Option<String> {
        Attribute::new(self.node, "targetId").value()
    }

    /// Child elements of the backing node, in document order
    pub fn children(&self) -> Vec<&'a N> {
        self.node.child_elements().collect()
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&'a N> {
        self.node.child_element(name)
    }

    /// Apply `transformer` to the first child element named `name`
    ///
    /// Returns `None` when there is no such child.
    pub fn field<T, F>(&self, name: &str, transformer: F) -> Option<T>
    where
        F: FnOnce(&'a N) -> T,
    {
        self.child(name).map(transformer)
    }

    /// Label used in reports, e.g. `Placemark#home`
    pub fn label(&self) -> String {
        match self.id() {
            Some(id) => format!("{}#{}", self.kind, id),
            None => self.kind.to_string(),
        }
    }
}

impl<'a, N> Clone for KmlObject<'a, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N> Copy for KmlObject<'a, N> {}

impl<'a, N: Node> fmt::Debug for KmlObject<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmlObject")
            .field("kind", &self.kind)
            .field("node", &self.node.node_name())
            .finish()
    }
}

impl<'a, N: Node> PartialEq for KmlObject<'a, N> {
    /// Same kind backed by the very same node
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && std::ptr::eq(self.node, other.node)
    }
}
