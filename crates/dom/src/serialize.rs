//! HTML serialization of document subtrees.

use crate::document::Document;
use crate::names::{is_raw_text_element, is_void_element};
use crate::types::{NodeId, NodeKind};
use memchr::memchr3;

impl Document {
    /// Markup of `node` including the node itself. Fragments serialize as
    /// their children; unknown handles serialize as the empty string.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.serialize_node(node, false, &mut out);
        out
    }

    /// Markup of the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        let raw = self.local_name(node).is_some_and(is_raw_text_element);
        for &child in self.children(node) {
            self.serialize_node(child, raw, &mut out);
        }
        out
    }

    fn serialize_node(&self, node: NodeId, raw_text_parent: bool, out: &mut String) {
        let Ok(record) = self.record(node) else {
            return;
        };
        match &record.kind {
            NodeKind::Text(text) => {
                if raw_text_parent {
                    out.push_str(text);
                } else {
                    escape_text(text, out);
                }
            }
            NodeKind::Fragment => {
                for &child in &record.children {
                    self.serialize_node(child, false, out);
                }
            }
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.name);
                for (name, value) in &el.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attribute(value, out);
                    out.push('"');
                }
                out.push('>');
                if is_void_element(&el.name) {
                    return;
                }
                let raw = is_raw_text_element(&el.name);
                for &child in &record.children {
                    self.serialize_node(child, raw, out);
                }
                out.push_str("</");
                out.push_str(&el.name);
                out.push('>');
            }
        }
    }
}

pub fn escape_text(text: &str, out: &mut String) {
    if memchr3(b'&', b'<', b'>', text.as_bytes()).is_none() && !text.contains('\u{a0}') {
        out.push_str(text);
        return;
    }
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

pub fn escape_attribute(value: &str, out: &mut String) {
    if memchr::memchr2(b'&', b'"', value.as_bytes()).is_none() && !value.contains('\u{a0}') {
        out.push_str(value);
        return;
    }
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}
