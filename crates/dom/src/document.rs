//! Arena-backed document: node creation, tree mutation, attributes,
//! properties and inline style.
//!
//! Invariants:
//! - A node has at most one parent; `parent` and the parent's `children` list
//!   always agree.
//! - Only elements and fragments have children.
//! - Inserting a fragment moves its children and leaves it empty.
//! - Inserting a node that already has a parent detaches it first.
//! - An element's `style` attribute and its inline style block describe the
//!   same declarations once either has been written.

use crate::error::DomError;
use crate::names::{is_valid_attribute_name, is_valid_element_name, reflected_attribute};
use crate::types::{ElementData, NodeId, NodeKind, NodeRecord};
use core_types::{NodeType, Value};
use css::InlineStyle;
use std::fmt;

#[derive(Clone, Debug)]
pub struct DocumentConfig {
    /// HTML document semantics: element and attribute names are ASCII-lowercased
    /// on creation.
    pub lowercase_names: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            lowercase_names: true,
        }
    }
}

pub struct Document {
    config: DocumentConfig,
    nodes: Vec<NodeRecord>,
}

impl Document {
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Number of nodes ever created in this document.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        if !is_valid_element_name(tag) {
            return Err(DomError::InvalidCharacter {
                name: tag.to_string(),
            });
        }
        let name = if self.config.lowercase_names {
            tag.to_ascii_lowercase()
        } else {
            tag.to_string()
        };
        Ok(self.push(NodeKind::Element(ElementData::new(name))))
    }

    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    pub fn create_document_fragment(&mut self) -> NodeId {
        self.push(NodeKind::Fragment)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord::new(kind));
        id
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn node_type(&self, node: NodeId) -> Option<NodeType> {
        let node_type = match self.record(node).ok()?.kind {
            NodeKind::Element(_) => NodeType::Element,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Fragment => NodeType::DocumentFragment,
        };
        Some(node_type)
    }

    /// `nodeName`: the uppercased tag for elements, `#text`, or
    /// `#document-fragment`.
    pub fn node_name(&self, node: NodeId) -> Option<String> {
        let name = match &self.record(node).ok()?.kind {
            NodeKind::Element(el) => el.name.to_ascii_uppercase(),
            NodeKind::Text(_) => "#text".to_string(),
            NodeKind::Fragment => "#document-fragment".to_string(),
        };
        Some(name)
    }

    /// Uppercased tag name of an element.
    pub fn tag_name(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|el| el.name.to_ascii_uppercase())
    }

    /// Tag name as stored (lowercase in HTML documents).
    pub fn local_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.name.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.record(node).ok()?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.record(node).map_or(&[][..], |r| r.children.as_slice())
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    /// Data of a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.record(node).ok()?.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_text(&mut self, node: NodeId, data: impl Into<String>) -> Result<(), DomError> {
        match &mut self.record_mut(node)?.kind {
            NodeKind::Text(text) => {
                *text = data.into();
                Ok(())
            }
            _ => Err(DomError::WrongNodeType {
                node,
                expected: NodeType::Text,
            }),
        }
    }

    /// Concatenated data of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        fn walk(doc: &Document, node: NodeId, out: &mut String) {
            if let Some(text) = doc.text(node) {
                out.push_str(text);
                return;
            }
            for &child in doc.children(node) {
                walk(doc, child, out);
            }
        }
        let mut out = String::new();
        walk(self, node, &mut out);
        out
    }

    /// Inclusive descendant check: a node contains itself.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    // -------------------------------------------------------------------------
    // Tree mutation
    // -------------------------------------------------------------------------

    /// Append `child` as the last child of `parent` and return it.
    ///
    /// A fragment child contributes its children instead of itself. A child
    /// that is already attached elsewhere is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        if !self.record(parent)?.allows_children() {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.record(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if matches!(self.record(child)?.kind, NodeKind::Fragment) {
            let moved = std::mem::take(&mut self.nodes[child.index()].children);
            log::trace!(
                target: "dom.tree",
                "append fragment {child} to {parent} ({} children)",
                moved.len()
            );
            for &grandchild in &moved {
                self.nodes[grandchild.index()].parent = Some(parent);
            }
            self.nodes[parent.index()].children.extend(moved);
            return Ok(child);
        }

        self.detach(child)?;
        log::trace!(target: "dom.tree", "append {child} to {parent}");
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(child)
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.record(parent)?;
        if self.record(child)?.parent != Some(parent) {
            return Err(DomError::NotFound(child));
        }
        self.detach(child)?;
        Ok(child)
    }

    /// Remove `node` from its parent, if it has one.
    pub fn detach(&mut self, node: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.record_mut(node)?.parent.take() else {
            return Ok(());
        };
        log::trace!(target: "dom.tree", "detach {node} from {parent}");
        self.nodes[parent.index()].children.retain(|&c| c != node);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        if !is_valid_attribute_name(name) {
            return Err(DomError::InvalidCharacter {
                name: name.to_string(),
            });
        }
        let name = self.fold_name(name);
        let el = self.element_mut(node)?;
        if name == "style" {
            el.style = InlineStyle::parse(value);
        }
        el.put_attribute(&name, value.to_string());
        Ok(())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        let name = self.fold_name(name);
        self.element(node)?.attribute(&name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        let name = self.fold_name(name);
        let el = self.element_mut(node)?;
        if name == "style" {
            el.style = InlineStyle::new();
        }
        el.attributes.retain(|(k, _)| *k != name);
        Ok(())
    }

    /// Attributes in insertion order; empty for non-elements.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        self.element(node).map_or(&[][..], |el| el.attributes.as_slice())
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Assign a property on `node`.
    ///
    /// Reflected element properties (`id`, `className`, ...) write their
    /// attribute; `textContent` replaces the children. Anything else is stored
    /// as an expando with its value type preserved.
    pub fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<(), DomError> {
        if self.element(node).is_some() {
            if let Some(attr) = reflected_attribute(name) {
                let text = value.to_dom_string();
                self.element_mut(node)?.put_attribute(attr, text);
                return Ok(());
            }
        }
        if name == "textContent" && self.record(node)?.allows_children() {
            return self.replace_text_content(node, &value);
        }

        let record = self.record_mut(node)?;
        match record.properties.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => record.properties.push((name.to_string(), value)),
        }
        Ok(())
    }

    /// Read a property: reflected attributes, a few built-in node properties,
    /// then expandos.
    pub fn get_property(&self, node: NodeId, name: &str) -> Option<Value> {
        if let Some(el) = self.element(node) {
            if let Some(attr) = reflected_attribute(name) {
                return Some(Value::Str(el.attribute(attr).unwrap_or("").to_string()));
            }
            if name == "tagName" {
                return Some(Value::Str(el.name.to_ascii_uppercase()));
            }
        }
        match name {
            "nodeType" => {
                return self
                    .node_type(node)
                    .map(|t| Value::Int(i64::from(t.as_u16())));
            }
            "nodeName" => return self.node_name(node).map(Value::Str),
            "textContent" => return Some(Value::Str(self.text_content(node))),
            _ => {}
        }
        self.record(node)
            .ok()?
            .properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// Expando properties in assignment order.
    pub fn properties(&self, node: NodeId) -> &[(String, Value)] {
        self.record(node).map_or(&[][..], |r| r.properties.as_slice())
    }

    fn replace_text_content(&mut self, node: NodeId, value: &Value) -> Result<(), DomError> {
        let old = std::mem::take(&mut self.record_mut(node)?.children);
        for child in old {
            self.nodes[child.index()].parent = None;
        }
        let text = if value.is_null() {
            String::new()
        } else {
            value.to_dom_string()
        };
        if !text.is_empty() {
            let text_node = self.create_text_node(text);
            self.append_child(node, text_node)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Inline style
    // -------------------------------------------------------------------------

    pub fn style(&self, node: NodeId) -> Option<&InlineStyle> {
        self.element(node).map(|el| &el.style)
    }

    /// Value of one style property in either spelling; `""` when unset.
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<&str> {
        self.style(node).map(|s| s.get_property(name))
    }

    /// Set one style property. `name` may be camel-cased or hyphenated; an
    /// empty value removes the property.
    pub fn set_style_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let el = self.element_mut(node)?;
        if !css::is_property_name(&css::hyphenate_property(name)) {
            log::trace!(target: "dom.tree", "ignore style name {name:?} on {node}");
            return Ok(());
        }
        el.style.set_property(name, value);
        el.sync_style_attribute();
        Ok(())
    }

    pub fn remove_style_property(&mut self, node: NodeId, name: &str) -> Result<String, DomError> {
        let el = self.element_mut(node)?;
        let old = el.style.remove_property(name);
        el.sync_style_attribute();
        Ok(old)
    }

    /// Replace the whole inline style from declaration text.
    pub fn set_css_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let el = self.element_mut(node)?;
        el.style.set_css_text(text);
        el.sync_style_attribute();
        Ok(())
    }

    pub fn css_text(&self, node: NodeId) -> Option<String> {
        self.style(node).map(InlineStyle::css_text)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    pub(crate) fn record(&self, node: NodeId) -> Result<&NodeRecord, DomError> {
        self.nodes.get(node.index()).ok_or(DomError::NotFound(node))
    }

    pub(crate) fn record_mut(&mut self, node: NodeId) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(node.index())
            .ok_or(DomError::NotFound(node))
    }

    pub(crate) fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.record(node).ok()?.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.record_mut(node)?.kind {
            NodeKind::Element(el) => Ok(el),
            _ => Err(DomError::WrongNodeType {
                node,
                expected: NodeType::Element,
            }),
        }
    }

    fn fold_name(&self, name: &str) -> String {
        if self.config.lowercase_names {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("config", &self.config)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
