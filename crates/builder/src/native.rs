//! Document seam.
//!
//! The builder only needs a handful of document operations. They are
//! collected in [`NativeDocument`] so the builder can drive any tree
//! implementation; [`dom::Document`] is the one this workspace ships.
//!
//! Implementations report their own failures through `Error`; the builder
//! returns them to its caller untouched.

use core_types::Value;
use dom::{Document, DomError, Listener, NodeId, NodeType};
use std::fmt;

pub trait NativeDocument {
    type Node: Copy + Eq + fmt::Debug;
    type Listener: Clone;
    type Error;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    fn create_text_node(&mut self, text: &str) -> Self::Node;

    /// Create an empty container whose children are inserted in its place.
    fn create_fragment(&mut self) -> Self::Node;

    fn is_fragment(&self, node: Self::Node) -> bool;

    fn child_nodes(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Append `child` to `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), Self::Error>;

    fn set_property(
        &mut self,
        node: Self::Node,
        name: &str,
        value: &Value,
    ) -> Result<(), Self::Error>;

    fn set_attribute(
        &mut self,
        node: Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Set one inline style property by its camel-cased name.
    fn set_style_property(
        &mut self,
        node: Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Replace the inline style with declaration text.
    fn set_css_text(&mut self, node: Self::Node, text: &str) -> Result<(), Self::Error>;

    fn add_event_listener(
        &mut self,
        node: Self::Node,
        event_type: &str,
        listener: &Self::Listener,
    ) -> Result<(), Self::Error>;

    /// Error for inserting a value that only looked like a node.
    fn not_a_node(&self) -> Self::Error;
}

impl NativeDocument for Document {
    type Node = NodeId;
    type Listener = Listener;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        Document::create_element(self, tag)
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        Document::create_text_node(self, text)
    }

    fn create_fragment(&mut self) -> NodeId {
        self.create_document_fragment()
    }

    fn is_fragment(&self, node: NodeId) -> bool {
        self.node_type(node) == Some(NodeType::DocumentFragment)
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node).to_vec()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        Document::append_child(self, parent, child).map(|_| ())
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: &Value) -> Result<(), DomError> {
        Document::set_property(self, node, name, value.clone())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        Document::set_attribute(self, node, name, value)
    }

    fn set_style_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        Document::set_style_property(self, node, name, value)
    }

    fn set_css_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        Document::set_css_text(self, node, text)
    }

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), DomError> {
        Document::add_event_listener(self, node, event_type, listener.clone())
    }

    fn not_a_node(&self) -> DomError {
        DomError::NotANode
    }
}
