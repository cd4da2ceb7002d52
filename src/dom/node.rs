//! Node types: NodeId, NodeData.

use std::collections::BTreeMap;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single DOM node.
///
/// Widget controllers express all visual state through `classes` (the
/// `active`/`error` markers the page styling keys off) and read declarative
/// configuration from `attributes` (`autoplay`, `interval`, `width`, ...).
/// `text` holds display content such as a lightbox counter or a field error
/// message.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Element type name (e.g. "Section", "Button", "Img").
    pub element_type: String,
    /// Optional unique id (#id selector).
    pub id: Option<String>,
    /// Classes (for .class selectors and active-state marking).
    pub classes: Vec<String>,
    /// Declarative attributes, read once by controllers at mount.
    pub attributes: BTreeMap<String, String>,
    /// Text content, if any.
    pub text: Option<String>,
}

impl NodeData {
    /// Create a new `NodeData` with the given element type and no metadata.
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class: add if absent, remove if present.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Whether a boolean-ish attribute is set to the literal "true".
    pub fn attr_is_true(&self, name: &str) -> bool {
        self.attr(name) == Some("true")
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}
