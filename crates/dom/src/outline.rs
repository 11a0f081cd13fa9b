use crate::document::Document;
use crate::types::NodeId;
use core_types::NodeType;

/// First few inline declarations, for outline annotations.
pub fn first_styles(doc: &Document, node: NodeId) -> String {
    doc.style(node)
        .map(|style| {
            style
                .iter()
                .take(3)
                .map(|d| format!("{}: {};", d.name, d.value))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Indented one-line-per-node sketch of a subtree, capped at `cap` nodes.
pub fn outline(doc: &Document, root: NodeId, cap: usize) -> Vec<String> {
    fn walk(doc: &Document, node: NodeId, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match doc.node_type(node) {
            Some(NodeType::DocumentFragment) => {
                out.push(format!("{indent}#document-fragment"));
            }
            Some(NodeType::Element) => {
                let name = doc.local_name(node).unwrap_or("");
                let id = doc.get_attribute(node, "id").unwrap_or("");
                let class = doc.get_attribute(node, "class").unwrap_or("");
                let styl = first_styles(doc, node);
                let mut line = format!("{indent}<{name}");
                if !id.is_empty() {
                    line.push_str(&format!(r#" id="{id}""#));
                }
                if !class.is_empty() {
                    line.push_str(&format!(r#" class="{class}""#));
                }
                line.push('>');
                if !styl.is_empty() {
                    line.push_str(&format!("  /* {styl} */"));
                }
                out.push(line);
            }
            Some(NodeType::Text) => {
                let t = doc.text(node).unwrap_or("").replace('\n', " ");
                let t = t.trim();
                if !t.is_empty() {
                    let show = match t.char_indices().nth(40) {
                        Some((cut, _)) => format!("{}…", &t[..cut]),
                        None => t.to_string(),
                    };
                    out.push(format!("{indent}\"{show}\""));
                }
                return;
            }
            None => return,
        }
        for &child in doc.children(node) {
            walk(doc, child, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(doc, root, 0, &mut out, &mut left);
    out
}
