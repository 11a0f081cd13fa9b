//! Descriptor model.
//!
//! A [`Descriptor`] is the caller's description of what to build. Object
//! descriptors are records with one optional field per reserved key plus an
//! ordered map of plain properties; synonym keys (`tag`/`tagName`/`nodeName`,
//! `attributes`/`attr`, `style`/`css`, `content`/`childNodes`) are resolved
//! first-match-wins by the `resolved_*` accessors.
//!
//! An object descriptor may have a prototype. Reads of reserved keys fall
//! through to the prototype chain, but only the descriptor's own plain
//! properties are ever copied onto a node.

use crate::native::NativeDocument;
use core_types::Value;
use dom::{Document, NodeId};
use std::fmt;
use std::rc::Rc;

/// Keys with special meaning; never copied as plain properties.
pub const RESERVED_KEYS: [&str; 11] = [
    "tag",
    "tagName",
    "nodeName",
    "attributes",
    "attr",
    "style",
    "css",
    "events",
    "content",
    "childNodes",
    "init",
];

/// Discriminant key that marks a value as an existing node.
pub const NODE_TYPE_KEY: &str = "nodeType";

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Callback run once the element and its whole subtree are assembled.
///
/// Receives the descriptor the element was built from, the document, and the
/// new element.
pub type Initializer<D> = Rc<
    dyn Fn(
        &ObjectSpec<D>,
        &mut D,
        <D as NativeDocument>::Node,
    ) -> Result<(), <D as NativeDocument>::Error>,
>;

pub enum Descriptor<D: NativeDocument = Document> {
    Null,
    /// A node that already exists; returned as is.
    Node(D::Node),
    Text(String),
    Object(ObjectSpec<D>),
    Array(Vec<Descriptor<D>>),
}

impl<D: NativeDocument> Descriptor<D> {
    pub fn array(items: impl IntoIterator<Item = impl Into<Descriptor<D>>>) -> Self {
        Descriptor::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn node(node: D::Node) -> Self {
        Descriptor::Node(node)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Descriptor::Null)
    }

    /// Interpret a plain value as a descriptor: strings become text, lists
    /// become arrays, maps become object descriptors and other scalars become
    /// text of their string form.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Descriptor::Null,
            Value::Str(s) => Descriptor::Text(s),
            Value::List(items) => {
                Descriptor::Array(items.into_iter().map(Descriptor::from_value).collect())
            }
            Value::Map(entries) => {
                let mut spec = ObjectSpec::new();
                for (key, value) in entries {
                    spec.set(&key, value);
                }
                Descriptor::Object(spec)
            }
            scalar @ (Value::Bool(_) | Value::Int(_) | Value::Float(_)) => {
                Descriptor::Text(scalar.to_dom_string())
            }
        }
    }
}

impl<D: NativeDocument> Clone for Descriptor<D> {
    fn clone(&self) -> Self {
        match self {
            Descriptor::Null => Descriptor::Null,
            Descriptor::Node(node) => Descriptor::Node(*node),
            Descriptor::Text(text) => Descriptor::Text(text.clone()),
            Descriptor::Object(spec) => Descriptor::Object(spec.clone()),
            Descriptor::Array(items) => Descriptor::Array(items.clone()),
        }
    }
}

impl<D: NativeDocument> fmt::Debug for Descriptor<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Null => f.write_str("Null"),
            Descriptor::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Descriptor::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Descriptor::Object(spec) => fmt::Debug::fmt(spec, f),
            Descriptor::Array(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl<D: NativeDocument> From<&str> for Descriptor<D> {
    fn from(text: &str) -> Self {
        Descriptor::Text(text.to_string())
    }
}

impl<D: NativeDocument> From<String> for Descriptor<D> {
    fn from(text: String) -> Self {
        Descriptor::Text(text)
    }
}

impl<D: NativeDocument> From<ObjectSpec<D>> for Descriptor<D> {
    fn from(spec: ObjectSpec<D>) -> Self {
        Descriptor::Object(spec)
    }
}

impl<D: NativeDocument> From<Vec<Descriptor<D>>> for Descriptor<D> {
    fn from(items: Vec<Descriptor<D>>) -> Self {
        Descriptor::Array(items)
    }
}

impl<D: NativeDocument, T: Into<Descriptor<D>>> From<Option<T>> for Descriptor<D> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Descriptor::Null, Into::into)
    }
}

impl From<NodeId> for Descriptor<Document> {
    fn from(node: NodeId) -> Self {
        Descriptor::Node(node)
    }
}

/// Value of a `style`/`css` key.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleSpec {
    /// Whole declaration text, assigned verbatim.
    Text(String),
    /// Individual properties, in either camel-cased or hyphenated spelling.
    Map(Vec<(String, Value)>),
}

impl StyleSpec {
    pub fn map<K: Into<String>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        StyleSpec::Map(collect_entries(entries))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Str(text) => Some(StyleSpec::Text(text)),
            Value::Map(entries) => Some(StyleSpec::Map(entries)),
            // Only strings and mappings carry declarations.
            _ => Some(StyleSpec::Map(Vec::new())),
        }
    }
}

impl From<&str> for StyleSpec {
    fn from(text: &str) -> Self {
        StyleSpec::Text(text.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(text: String) -> Self {
        StyleSpec::Text(text)
    }
}

/// Object descriptor for one element.
pub struct ObjectSpec<D: NativeDocument = Document> {
    tag: Option<Value>,
    tag_name: Option<Value>,
    node_name: Option<Value>,
    attributes: Option<Vec<(String, Value)>>,
    attr: Option<Vec<(String, Value)>>,
    style: Option<StyleSpec>,
    css: Option<StyleSpec>,
    events: Option<Vec<(String, D::Listener)>>,
    content: Option<Box<Descriptor<D>>>,
    child_nodes: Option<Box<Descriptor<D>>>,
    init: Option<Initializer<D>>,
    properties: Vec<(String, Value)>,
    prototype: Option<Rc<ObjectSpec<D>>>,
}

impl<D: NativeDocument> ObjectSpec<D> {
    pub fn new() -> Self {
        Self {
            tag: None,
            tag_name: None,
            node_name: None,
            attributes: None,
            attr: None,
            style: None,
            css: None,
            events: None,
            content: None,
            child_nodes: None,
            init: None,
            properties: Vec::new(),
            prototype: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<Value>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn tag_name(mut self, tag: impl Into<Value>) -> Self {
        self.tag_name = Some(tag.into());
        self
    }

    pub fn node_name(mut self, tag: impl Into<Value>) -> Self {
        self.node_name = Some(tag.into());
        self
    }

    pub fn attributes<K: Into<String>, V: Into<Value>>(
        mut self,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.attributes = Some(collect_entries(entries));
        self
    }

    pub fn attr<K: Into<String>, V: Into<Value>>(
        mut self,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.attr = Some(collect_entries(entries));
        self
    }

    pub fn style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn css(mut self, style: impl Into<StyleSpec>) -> Self {
        self.css = Some(style.into());
        self
    }

    /// Add an entry to the `events` mapping.
    pub fn on(mut self, event_type: impl Into<String>, listener: D::Listener) -> Self {
        let events = self.events.get_or_insert_with(Vec::new);
        let event_type = event_type.into();
        match events.iter_mut().find(|(t, _)| *t == event_type) {
            Some((_, existing)) => *existing = listener,
            None => events.push((event_type, listener)),
        }
        self
    }

    pub fn content(mut self, content: impl Into<Descriptor<D>>) -> Self {
        self.content = Some(Box::new(content.into()));
        self
    }

    pub fn child_nodes(mut self, content: impl Into<Descriptor<D>>) -> Self {
        self.child_nodes = Some(Box::new(content.into()));
        self
    }

    pub fn init(
        mut self,
        init: impl Fn(&ObjectSpec<D>, &mut D, D::Node) -> Result<(), D::Error> + 'static,
    ) -> Self {
        self.init = Some(Rc::new(init));
        self
    }

    pub fn init_rc(mut self, init: Initializer<D>) -> Self {
        self.init = Some(init);
        self
    }

    /// Set any key. See [`ObjectSpec::set`].
    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value.into());
        self
    }

    /// Inherit reserved keys (but not plain properties) from `prototype`.
    pub fn prototype(mut self, prototype: Rc<ObjectSpec<D>>) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Set a key by name. Reserved keys are routed to their fields; any other
    /// key becomes (or replaces) a plain property.
    ///
    /// `events` and `init` take callables, which a [`Value`] cannot hold;
    /// values under those keys are dropped.
    pub fn set(&mut self, key: &str, value: Value) {
        match key {
            "tag" => self.tag = Some(value),
            "tagName" => self.tag_name = Some(value),
            "nodeName" => self.node_name = Some(value),
            "attributes" => self.attributes = mapping(value),
            "attr" => self.attr = mapping(value),
            "style" => self.style = StyleSpec::from_value(value),
            "css" => self.css = StyleSpec::from_value(value),
            "content" => self.content = Some(Box::new(Descriptor::from_value(value))),
            "childNodes" => self.child_nodes = Some(Box::new(Descriptor::from_value(value))),
            "events" | "init" => {
                log::debug!(target: "builder", "ignoring non-callable value under {key:?}");
            }
            _ => match self.properties.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) => *existing = value,
                None => self.properties.push((key.to_string(), value)),
            },
        }
    }

    /// Read a value-typed key (tag synonyms or a plain property), falling
    /// through to the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.lookup(|spec| match key {
            "tag" => spec.tag.as_ref(),
            "tagName" => spec.tag_name.as_ref(),
            "nodeName" => spec.node_name.as_ref(),
            _ => spec
                .properties
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
        })
    }

    /// Whether the descriptor exposes a non-null `nodeType`, which makes it
    /// indistinguishable from an existing node.
    pub fn has_node_type(&self) -> bool {
        self.get(NODE_TYPE_KEY).is_some_and(|v| !v.is_null())
    }

    /// Own plain properties, in insertion order. Prototype properties are not
    /// included.
    pub fn own_properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .filter(|(k, _)| !is_reserved(k))
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn resolved_tag(&self) -> Option<&Value> {
        self.lookup(|s| non_null(&s.tag))
            .or_else(|| self.lookup(|s| non_null(&s.tag_name)))
            .or_else(|| self.lookup(|s| non_null(&s.node_name)))
    }

    pub fn resolved_attributes(&self) -> Option<&[(String, Value)]> {
        self.lookup(|s| s.attributes.as_deref())
            .or_else(|| self.lookup(|s| s.attr.as_deref()))
    }

    pub fn resolved_style(&self) -> Option<&StyleSpec> {
        self.lookup(|s| s.style.as_ref())
            .or_else(|| self.lookup(|s| s.css.as_ref()))
    }

    pub fn resolved_events(&self) -> Option<&[(String, D::Listener)]> {
        self.lookup(|s| s.events.as_deref())
    }

    pub fn resolved_content(&self) -> Option<&Descriptor<D>> {
        self.lookup(|s| present(&s.content))
            .or_else(|| self.lookup(|s| present(&s.child_nodes)))
    }

    pub fn resolved_init(&self) -> Option<&Initializer<D>> {
        self.lookup(|s| s.init.as_ref())
    }

    fn lookup<T: ?Sized>(&self, field: impl Fn(&Self) -> Option<&T>) -> Option<&T> {
        let mut current = Some(self);
        while let Some(spec) = current {
            if let Some(found) = field(spec) {
                return Some(found);
            }
            current = spec.prototype.as_deref();
        }
        None
    }
}

impl<D: NativeDocument> Default for ObjectSpec<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: NativeDocument> Clone for ObjectSpec<D> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            tag_name: self.tag_name.clone(),
            node_name: self.node_name.clone(),
            attributes: self.attributes.clone(),
            attr: self.attr.clone(),
            style: self.style.clone(),
            css: self.css.clone(),
            events: self.events.clone(),
            content: self.content.clone(),
            child_nodes: self.child_nodes.clone(),
            init: self.init.clone(),
            properties: self.properties.clone(),
            prototype: self.prototype.clone(),
        }
    }
}

impl<D: NativeDocument> fmt::Debug for ObjectSpec<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Option<Vec<&str>> = self
            .events
            .as_ref()
            .map(|e| e.iter().map(|(t, _)| t.as_str()).collect());
        f.debug_struct("ObjectSpec")
            .field("tag", &self.tag)
            .field("tag_name", &self.tag_name)
            .field("node_name", &self.node_name)
            .field("attributes", &self.attributes)
            .field("attr", &self.attr)
            .field("style", &self.style)
            .field("css", &self.css)
            .field("events", &events)
            .field("content", &self.content)
            .field("child_nodes", &self.child_nodes)
            .field("init", &self.init.is_some())
            .field("properties", &self.properties)
            .field("prototype", &self.prototype)
            .finish()
    }
}

fn non_null(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

fn present<D: NativeDocument>(content: &Option<Box<Descriptor<D>>>) -> Option<&Descriptor<D>> {
    content.as_deref().filter(|d| !d.is_null())
}

fn collect_entries<K: Into<String>, V: Into<Value>>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Vec<(String, Value)> {
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// Non-mapping values contribute no entries.
fn mapping(value: Value) -> Option<Vec<(String, Value)>> {
    match value {
        Value::Null => None,
        Value::Map(entries) => Some(entries),
        _ => Some(Vec::new()),
    }
}
