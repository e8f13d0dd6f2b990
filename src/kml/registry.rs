//! Element constructor registry
//!
//! Maps each `KmlElementKind` to the function that builds its domain
//! object. Registries are assembled through `RegistryBuilder`, which
//! refuses duplicate registrations and refuses to build while any kind
//! is left without a constructor.

use std::collections::HashMap;
use std::fmt;
use log::debug;

use crate::kml::elements::KmlElementKind;
use crate::kml::errors::{KmlError, KmlResult};
use crate::kml::object::{KmlObject, ObjectOptions};
use crate::xml::Node;

/// Builds the domain object for one element kind
pub type Constructor<N> =
    Box<dyn for<'a> Fn(ObjectOptions<'a, N>) -> KmlObject<'a, N> + Send + Sync>;

/// Immutable kind → constructor table
pub struct ElementRegistry<N> {
    constructors: HashMap<KmlElementKind, Constructor<N>>,
}

impl<N: Node + 'static> ElementRegistry<N> {
    /// Start an empty registry
    pub fn builder() -> RegistryBuilder<N> {
        RegistryBuilder {
            constructors: HashMap::new(),
        }
    }

    /// Registry with the plain `KmlObject` constructor for every kind
    pub fn standard() -> Self {
        let constructors = KmlElementKind::all()
            .map(|kind| (kind, default_constructor::<N>(kind)))
            .collect();
        ElementRegistry { constructors }
    }

    /// Constructor registered under the exact (case-sensitive) element name
    pub fn lookup(&self, name: &str) -> Option<(KmlElementKind, &Constructor<N>)> {
        let kind = KmlElementKind::from_name(name)?;
        self.constructors.get(&kind).map(|constructor| (kind, constructor))
    }

    /// Build the object registered under `name`, backed by `node`
    ///
    /// Returns `None` when no constructor matches the name.
    pub fn construct<'a>(&self, name: &str, node: &'a N) -> Option<KmlObject<'a, N>> {
        match self.lookup(name) {
            Some((_, constructor)) => Some(constructor(ObjectOptions::new(node))),
            None => {
                debug!("No constructor registered for <{}>", name);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<N> fmt::Debug for ElementRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.constructors.keys().collect();
        kinds.sort();
        f.debug_struct("ElementRegistry").field("kinds", &kinds).finish()
    }
}

/// Collects constructors and validates them into an `ElementRegistry`
pub struct RegistryBuilder<N> {
    constructors: HashMap<KmlElementKind, Constructor<N>>,
}

impl<N: Node + 'static> RegistryBuilder<N> {
    /// Register `constructor` for `kind`
    ///
    /// Fails with `DuplicateConstructor` when `kind` already has one.
    pub fn register<F>(mut self, kind: KmlElementKind, constructor: F) -> KmlResult<Self>
    where
        F: for<'a> Fn(ObjectOptions<'a, N>) -> KmlObject<'a, N> + Send + Sync + 'static,
    {
        if self.constructors.contains_key(&kind) {
            return Err(KmlError::DuplicateConstructor(kind));
        }
        self.constructors.insert(kind, Box::new(constructor));
        Ok(self)
    }

    /// Register the plain `KmlObject` constructor for `kind`
    pub fn register_default(self, kind: KmlElementKind) -> KmlResult<Self> {
        self.register(kind, move |options| KmlObject::new(kind, options))
    }

    /// Register the plain constructor for every kind not registered yet
    pub fn register_remaining(mut self) -> Self {
        for kind in KmlElementKind::all() {
            self.constructors
                .entry(kind)
                .or_insert_with(|| default_constructor::<N>(kind));
        }
        self
    }

    /// Finish the registry
    ///
    /// Fails with `MissingConstructor` naming the first kind, in declaration
    /// order, that has no constructor.
    pub fn build(self) -> KmlResult<ElementRegistry<N>> {
        if let Some(missing) = KmlElementKind::all().find(|kind| !self.constructors.contains_key(kind)) {
            return Err(KmlError::MissingConstructor(missing));
        }
        Ok(ElementRegistry {
            constructors: self.constructors,
        })
    }
}

fn default_constructor<N: Node + 'static>(kind: KmlElementKind) -> Constructor<N> {
    boxed::<N, _>(move |options| KmlObject::new(kind, options))
}

fn boxed<N, F>(constructor: F) -> Constructor<N>
where
    F: for<'a> Fn(ObjectOptions<'a, N>) -> KmlObject<'a, N> + Send + Sync + 'static,
{
    Box::new(constructor)
}
