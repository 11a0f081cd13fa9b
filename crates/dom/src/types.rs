use core_types::Value;
use css::InlineStyle;
use std::fmt;

use crate::events::Listener;

/// Handle to a node owned by a [`crate::Document`].
///
/// Handles are plain indices; they stay valid for the lifetime of the
/// document because nodes are never freed, only detached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct NodeRecord {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Expando properties, in assignment order.
    pub(crate) properties: Vec<(String, Value)>,
    pub(crate) listeners: Vec<(String, Listener)>,
}

impl NodeRecord {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            properties: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub(crate) fn allows_children(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_) | NodeKind::Fragment)
    }
}

pub(crate) enum NodeKind {
    Element(ElementData),
    Text(String),
    Fragment,
}

pub(crate) struct ElementData {
    /// Local name, lowercased in HTML documents.
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) style: InlineStyle,
}

impl ElementData {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            style: InlineStyle::new(),
        }
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn put_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub(crate) fn sync_style_attribute(&mut self) {
        let text = self.style.css_text();
        self.put_attribute("style", text);
    }
}
