//! Element registry: maps a type tag to the behavior that builds it.

use std::sync::Arc;

use indexmap::IndexMap;

use tailor_elements::{Element, ElementBehavior, ElementJson, ElementOptions, Extensions};

/// A registered element type.
struct RegisteredElement {
    behavior: Arc<dyn ElementBehavior>,
    options: ElementOptions,
}

/// Registry of element types, keyed by tag.
///
/// Registration order is the order elements appear in the serialized
/// library. Registering a tag again replaces the earlier entry.
#[derive(Default)]
pub struct ElementRegistry {
    elements: IndexMap<String, RegisteredElement>,
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown element tag: {0}")]
    UnknownTag(String),
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element type under a tag.
    pub fn register<B>(&mut self, tag: impl Into<String>, behavior: B, options: ElementOptions)
    where
        B: ElementBehavior + 'static,
    {
        let tag = tag.into();
        if self.elements.contains_key(&tag) {
            tracing::debug!(%tag, "element type replaced");
        }
        self.elements.insert(
            tag,
            RegisteredElement {
                behavior: Arc::new(behavior),
                options,
            },
        );
    }

    /// Check whether a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.elements.contains_key(tag)
    }

    /// All registered tags, in registration order.
    pub fn tags(&self) -> Vec<&str> {
        self.elements.keys().map(String::as_str).collect()
    }

    /// Number of registered element types.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Instantiate the element registered under `tag`.
    ///
    /// The element is returned undeclared; the caller drives the
    /// `declare`/`prepare` lifecycle.
    pub fn create(&self, tag: &str) -> Result<Element, RegistryError> {
        let entry = self
            .elements
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))?;

        Ok(Element::from_arc(
            tag,
            Arc::clone(&entry.behavior),
            entry.options.clone(),
        ))
    }

    /// Build the serialized element library for the editor client.
    ///
    /// Every registered element is instantiated, declared and prepared;
    /// inactive elements are omitted. Order follows registration order.
    pub fn library(&self, extensions: &Extensions) -> Vec<ElementJson> {
        let mut library = Vec::with_capacity(self.elements.len());

        for tag in self.elements.keys() {
            let mut element = match self.create(tag) {
                Ok(element) => element,
                Err(_) => continue,
            };

            element.declare(extensions);
            element.prepare(extensions);

            if !element.active(extensions) {
                tracing::debug!(%tag, "inactive element omitted from library");
                continue;
            }

            library.push(element.to_json(extensions));
        }

        library
    }
}
