use serde::Serialize;

use crate::handle::ResourceId;

/// One named node of a decoded chunk, for dump tools and UIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredObject {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: StructuredValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StructuredValue {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    String(String),
    Enum { raw: i64, label: String },
    Flags { raw: u64, labels: String },
    /// A handle reference, stored by its stable id.
    Resource(ResourceId),
    /// The id of the object a chunk creates.
    Declared(ResourceId),
    Buffer { size: u64 },
    Struct(Vec<StructuredObject>),
    Array(Vec<StructuredObject>),
}

impl StructuredObject {
    pub fn children(&self) -> &[StructuredObject] {
        match &self.value {
            StructuredValue::Struct(c) | StructuredValue::Array(c) => c,
            _ => &[],
        }
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&StructuredObject> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Depth-first walk over this node and all descendants.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a StructuredObject)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

/// Builds the structured tree alongside a serialiser pass.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    frames: Vec<Vec<StructuredObject>>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self { frames: vec![Vec::new()] }
    }

    pub(crate) fn leaf(&mut self, name: &str, type_name: &str, value: StructuredValue) {
        if let Some(top) = self.frames.last_mut() {
            top.push(StructuredObject {
                name: name.to_string(),
                type_name: type_name.to_string(),
                value,
            });
        }
    }

    pub(crate) fn open(&mut self) {
        self.frames.push(Vec::new());
    }

    pub(crate) fn close(&mut self, name: &str, type_name: &str, array: bool) {
        let children = self.frames.pop().unwrap_or_default();
        let value = if array {
            StructuredValue::Array(children)
        } else {
            StructuredValue::Struct(children)
        };
        if self.frames.is_empty() {
            self.frames.push(Vec::new());
        }
        self.leaf(name, type_name, value);
    }

    /// Completed top-level nodes recorded so far.
    pub(crate) fn take(&mut self) -> Vec<StructuredObject> {
        self.frames.truncate(1);
        self.frames.first_mut().map(std::mem::take).unwrap_or_default()
    }
}
