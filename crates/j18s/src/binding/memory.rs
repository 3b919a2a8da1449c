//! In-memory host for bound entities.
//!
//! Useful for tests and for headless rendering where no UI toolkit exists.

use std::collections::BTreeMap;

use crate::binding::{BoundEntity, Document, TRANSLATE_MARKER};
use crate::interpreter::BindingError;

/// An element with text content, a class list and string metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    content: String,
    class_name: String,
    attributes: BTreeMap<String, String>,
    args_cache: Option<Vec<String>>,
    locked: bool,
}

impl MemoryElement {
    /// Create an element with the given content and no classes.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the space-separated class list.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set a metadata attribute directly, bypassing the lock.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Displayed content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Space-separated class list.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// A stored attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All stored attributes, sorted by key.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Make metadata writes fail from now on.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Drop the native argument cache so the next read parses the stored
    /// string.
    pub fn clear_args_cache(&mut self) {
        self.args_cache = None;
    }
}

impl BoundEntity for MemoryElement {
    fn raw_content(&self) -> String {
        self.content.clone()
    }

    fn apply_result(&mut self, resolved: &str) {
        resolved.clone_into(&mut self.content);
    }

    fn metadata(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set_metadata(&mut self, key: &str, value: &str) -> Result<(), BindingError> {
        if self.locked {
            return Err(BindingError::Rejected {
                key: key.to_string(),
                reason: "element is read-only".to_string(),
            });
        }
        self.attributes.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn is_marked(&self) -> bool {
        self.class_name.split_whitespace().any(|class| class == TRANSLATE_MARKER)
    }

    fn mark(&mut self) {
        if self.is_marked() {
            return;
        }
        if !self.class_name.trim().is_empty() {
            self.class_name.push(' ');
        }
        self.class_name.push_str(TRANSLATE_MARKER);
    }

    fn cached_args(&self) -> Option<Vec<String>> {
        self.args_cache.clone()
    }

    fn cache_args(&mut self, args: &[String]) {
        self.args_cache = Some(args.to_vec());
    }
}

/// An ordered collection of [`MemoryElement`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
    structured: bool,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// A document whose elements expose a structured metadata store.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            structured: true,
        }
    }

    /// A document whose elements only expose flat string attributes.
    pub fn flat() -> Self {
        Self {
            elements: Vec::new(),
            structured: false,
        }
    }

    /// Append an element, returning its index.
    pub fn push(&mut self, element: MemoryElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&MemoryElement> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MemoryElement> {
        self.elements.get_mut(index)
    }

    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }
}

impl Document for MemoryDocument {
    type Entity = MemoryElement;

    fn supports_structured_metadata(&self) -> bool {
        self.structured
    }

    fn marked_entities(&mut self) -> Vec<&mut MemoryElement> {
        self.elements
            .iter_mut()
            .filter(|element| element.is_marked())
            .collect()
    }
}
