//! Descriptor-to-tree construction.
//!
//! Classification order for a descriptor (first match wins):
//! 1. `Null` builds to nothing.
//! 2. An existing node, or an object descriptor exposing a non-null
//!    `nodeType`, is returned unchanged.
//! 3. An array builds to a fragment holding every non-null entry, in order.
//!    Arrays always produce a fragment, whatever their length.
//! 4. Text builds to a text node with exactly that data.
//! 5. Anything else is an object descriptor and builds to an element.
//!
//! An element is assembled in a fixed order: create, plain properties,
//! attributes, style, events, content, then the initializer. Content is fully
//! built (initializers included) before it is attached, so initializers run
//! bottom-up and each one sees its complete subtree.
//!
//! Nothing is validated here. Errors come from the document and are returned
//! as they are; siblings attached before a failure stay attached.

use crate::descriptor::{Descriptor, ObjectSpec, StyleSpec};
use crate::native::NativeDocument;
use core_types::Value;
use css::camel_case_property;
use dom::Document;
use std::fmt;

#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Tag used when a descriptor names none.
    pub default_tag: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_tag: "div".to_string(),
        }
    }
}

/// Result of building a descriptor.
pub enum Built<'d, D: NativeDocument = Document> {
    Node(D::Node),
    /// Object descriptor that carried a `nodeType` and was passed through
    /// untouched. It is not a node; inserting it anywhere fails.
    PassThrough(&'d ObjectSpec<D>),
}

impl<'d, D: NativeDocument> Built<'d, D> {
    pub fn node(&self) -> Option<D::Node> {
        match self {
            Built::Node(node) => Some(*node),
            Built::PassThrough(_) => None,
        }
    }

    pub fn pass_through(&self) -> Option<&'d ObjectSpec<D>> {
        match self {
            Built::Node(_) => None,
            Built::PassThrough(spec) => Some(spec),
        }
    }
}

impl<D: NativeDocument> Clone for Built<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: NativeDocument> Copy for Built<'_, D> {}

impl<D: NativeDocument> fmt::Debug for Built<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Built::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Built::PassThrough(spec) => f.debug_tuple("PassThrough").field(spec).finish(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: BuilderConfig,
}

impl Builder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build `descriptor` into `doc`.
    ///
    /// Returns `None` for `Null`. The descriptor is only read; the returned
    /// nodes are unattached (apart from existing nodes, which keep their
    /// place) and belong to the caller.
    pub fn build<'d, D: NativeDocument>(
        &self,
        doc: &mut D,
        descriptor: &'d Descriptor<D>,
    ) -> Result<Option<Built<'d, D>>, D::Error> {
        match descriptor {
            Descriptor::Null => Ok(None),
            Descriptor::Node(node) => {
                log::trace!(target: "builder", "pass through existing node {node:?}");
                Ok(Some(Built::Node(*node)))
            }
            Descriptor::Object(spec) if spec.has_node_type() => {
                log::trace!(target: "builder", "pass through descriptor carrying nodeType");
                Ok(Some(Built::PassThrough(spec)))
            }
            Descriptor::Array(items) => self.build_fragment(doc, items).map(|n| Some(Built::Node(n))),
            Descriptor::Text(text) => Ok(Some(Built::Node(doc.create_text_node(text)))),
            Descriptor::Object(spec) => self.build_element(doc, spec).map(|n| Some(Built::Node(n))),
        }
    }

    /// Like [`Builder::build`], but a pass-through value is reported as the
    /// document's not-a-node error instead of being returned.
    pub fn build_node<D: NativeDocument>(
        &self,
        doc: &mut D,
        descriptor: &Descriptor<D>,
    ) -> Result<Option<D::Node>, D::Error> {
        match self.build(doc, descriptor)? {
            None => Ok(None),
            Some(Built::Node(node)) => Ok(Some(node)),
            Some(Built::PassThrough(_)) => Err(doc.not_a_node()),
        }
    }

    fn build_fragment<D: NativeDocument>(
        &self,
        doc: &mut D,
        items: &[Descriptor<D>],
    ) -> Result<D::Node, D::Error> {
        let fragment = doc.create_fragment();
        log::trace!(target: "builder", "fragment {fragment:?} from {} entries", items.len());
        for item in items {
            if let Some(built) = self.build(doc, item)? {
                attach(doc, fragment, built)?;
            }
        }
        Ok(fragment)
    }

    fn build_element<D: NativeDocument>(
        &self,
        doc: &mut D,
        spec: &ObjectSpec<D>,
    ) -> Result<D::Node, D::Error> {
        let tag = match spec.resolved_tag() {
            Some(tag) => tag.to_dom_string(),
            None => self.config.default_tag.clone(),
        };
        let node = doc.create_element(&tag)?;
        log::trace!(target: "builder", "element <{tag}> as {node:?}");

        for (name, value) in spec.own_properties() {
            doc.set_property(node, name, value)?;
        }

        if let Some(attributes) = spec.resolved_attributes() {
            for (name, value) in attributes {
                doc.set_attribute(node, name, &value.to_dom_string())?;
            }
        }

        match spec.resolved_style() {
            Some(StyleSpec::Text(text)) => doc.set_css_text(node, text)?,
            Some(StyleSpec::Map(entries)) => {
                for (name, value) in entries {
                    doc.set_style_property(node, &camel_case_property(name), &style_value(value))?;
                }
            }
            None => {}
        }

        if let Some(events) = spec.resolved_events() {
            for (event_type, listener) in events {
                doc.add_event_listener(node, event_type, listener)?;
            }
        }

        if let Some(content) = spec.resolved_content() {
            if let Some(built) = self.build(doc, content)? {
                attach(doc, node, built)?;
            }
        }

        if let Some(init) = spec.resolved_init() {
            log::trace!(target: "builder", "init {node:?}");
            init(spec, doc, node)?;
        }

        Ok(node)
    }
}

/// Build `descriptor` into `doc` with the default configuration.
pub fn build<'d>(
    doc: &mut Document,
    descriptor: &'d Descriptor,
) -> Result<Option<Built<'d>>, dom::DomError> {
    Builder::default().build(doc, descriptor)
}

// Fragments are flattened: their children are moved into `parent` one by one.
fn attach<D: NativeDocument>(doc: &mut D, parent: D::Node, built: Built<'_, D>) -> Result<(), D::Error> {
    match built {
        Built::Node(node) if doc.is_fragment(node) => {
            for child in doc.child_nodes(node) {
                doc.append_child(parent, child)?;
            }
            Ok(())
        }
        Built::Node(node) => doc.append_child(parent, node),
        Built::PassThrough(_) => Err(doc.not_a_node()),
    }
}

// Null clears a property, like assigning null on a style object.
fn style_value(value: &Value) -> String {
    if value.is_null() {
        String::new()
    } else {
        value.to_dom_string()
    }
}
