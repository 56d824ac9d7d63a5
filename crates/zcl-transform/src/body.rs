//! Body boundary
//!
//! A body is the syntactic content of a file or block: attributes and nested
//! blocks. Parsing and decoding live elsewhere; this module only defines the
//! interface transformers consume and produce, plus [`StaticBody`] for
//! synthesizing transformer output in memory.

use crate::diagnostics::{Diagnostics, SourceRange};
use indexmap::IndexMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Syntactic content that can be queried for its attributes and blocks
pub trait Body: Debug + Send + Sync {
    /// Read the body's content, or the diagnostics explaining why it cannot be read
    fn content(&self) -> Result<BodyContent, Diagnostics>;

    /// Range to blame when a required item is absent from this body
    fn missing_item_range(&self) -> SourceRange;
}

/// Immutable shared handle to a body
pub type SharedBody = Arc<dyn Body>;

/// Content of a body, in source order
#[derive(Debug, Clone, Default)]
pub struct BodyContent {
    pub attributes: IndexMap<String, Attribute>,
    pub blocks: Vec<Block>,
}

impl BodyContent {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Blocks of the given type, in source order
    pub fn blocks_of_type<'a>(
        &'a self,
        block_type: &'a str,
    ) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |b| b.block_type == block_type)
    }
}

/// A `name = expr` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Expression source text
    pub expr: String,
    pub range: SourceRange,
}

impl Attribute {
    pub fn new(name: impl Into<String>, expr: impl Into<String>, range: SourceRange) -> Self {
        Self {
            name: name.into(),
            expr: expr.into(),
            range,
        }
    }
}

/// A `type "label" { ... }` item
#[derive(Debug, Clone)]
pub struct Block {
    pub block_type: String,
    pub labels: Vec<String>,
    pub body: SharedBody,
    pub range: SourceRange,
}

impl Block {
    pub fn new(block_type: impl Into<String>, body: SharedBody, range: SourceRange) -> Self {
        Self {
            block_type: block_type.into(),
            labels: Vec::new(),
            body,
            range,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }
}

/// In-memory body that always reads successfully
///
/// Builders consume `self`, so a finished body is never changed in place;
/// transformers produce a new one instead.
#[derive(Debug, Clone, Default)]
pub struct StaticBody {
    content: BodyContent,
    range: SourceRange,
}

impl StaticBody {
    pub fn new(range: SourceRange) -> Self {
        Self {
            content: BodyContent::default(),
            range,
        }
    }

    /// Build a body from existing content, e.g. one read from another body
    pub fn from_content(content: BodyContent, range: SourceRange) -> Self {
        Self { content, range }
    }

    /// Add an attribute; a later attribute with the same name replaces the earlier one
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.content
            .attributes
            .insert(attribute.name.clone(), attribute);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.content.blocks.push(block);
        self
    }

    pub fn into_shared(self) -> SharedBody {
        Arc::new(self)
    }
}

impl Body for StaticBody {
    fn content(&self) -> Result<BodyContent, Diagnostics> {
        Ok(self.content.clone())
    }

    fn missing_item_range(&self) -> SourceRange {
        self.range.clone()
    }
}
