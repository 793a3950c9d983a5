//! Document attributes as handed to the conversion engine.
//!
//! Values are either text or a boolean flag; the engine treats `true` the same as an attribute
//! set to the empty string, and `false` as an unset attribute. Keys are case-sensitive and the
//! last write to a key wins.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

#[derive(Serialize, PartialEq, Default, Clone, Debug)]
#[serde(transparent)]
pub struct Attributes {
    entries: HashMap<String, AttributeValue>,
}

impl Attributes {
    /// Sets an attribute, replacing any previous value for the same key
    pub fn set_attribute(&mut self, key: &str, value: impl Into<AttributeValue>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Convenience for text-valued attributes
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(AttributeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fluent construction of an [`Attributes`] map, following the naming the engine's own
/// attribute builder uses.
#[derive(Default, Debug)]
pub struct AttributesBuilder {
    attributes: Attributes,
}

impl AttributesBuilder {
    pub fn attributes() -> Self {
        AttributesBuilder::default()
    }

    pub fn show_title(mut self, show: bool) -> Self {
        self.attributes.set_attribute("showtitle", show);
        self
    }

    /// `nofooter` only exists when the footer is suppressed
    pub fn no_footer(mut self, no_footer: bool) -> Self {
        if no_footer {
            self.attributes.set_attribute("nofooter", true);
        } else {
            self.attributes.remove("nofooter");
        }
        self
    }

    pub fn source_highlighter(mut self, highlighter: &str) -> Self {
        self.attributes
            .set_attribute("source-highlighter", highlighter);
        self
    }

    pub fn attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set_attribute(key, value);
        self
    }

    /// A set attribute without a value, e.g. `:env-eclipse:`
    pub fn flag(self, key: &str) -> Self {
        self.attribute(key, "")
    }

    /// In-place variant of [`AttributesBuilder::attribute`] for use inside loops
    pub fn set_attribute(&mut self, key: &str, value: impl Into<AttributeValue>) {
        self.attributes.set_attribute(key, value);
    }

    pub fn set_images_dir(&mut self, images_dir: &str) {
        self.attributes.set_attribute("imagesdir", images_dir);
    }

    pub fn get(self) -> Attributes {
        self.attributes
    }
}
