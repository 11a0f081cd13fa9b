use super::*;

fn el(doc: &mut Document, tag: &str) -> NodeId {
    doc.create_element(tag).unwrap()
}

#[test]
fn create_element_lowercases_and_reports_names() {
    let mut doc = Document::new();
    let ta = el(&mut doc, "TextArea");
    assert_eq!(doc.local_name(ta), Some("textarea"));
    assert_eq!(doc.tag_name(ta), Some("TEXTAREA".to_string()));
    assert_eq!(doc.node_name(ta), Some("TEXTAREA".to_string()));
    assert_eq!(doc.node_type(ta), Some(NodeType::Element));
}

#[test]
fn create_element_rejects_invalid_names() {
    let mut doc = Document::new();
    assert_eq!(
        doc.create_element("5"),
        Err(DomError::InvalidCharacter {
            name: "5".to_string()
        })
    );
    assert!(doc.create_element("").is_err());
    assert!(doc.create_element("a b").is_err());
    assert_eq!(doc.node_count(), 0);
}

#[test]
fn case_preserving_documents_keep_names() {
    let mut doc = Document::with_config(DocumentConfig {
        lowercase_names: false,
    });
    let node = el(&mut doc, "linearGradient");
    assert_eq!(doc.local_name(node), Some("linearGradient"));
}

#[test]
fn text_nodes_hold_data_verbatim() {
    let mut doc = Document::new();
    let text = doc.create_text_node("<span>test</span>");
    assert_eq!(doc.node_type(text), Some(NodeType::Text));
    assert_eq!(doc.node_name(text), Some("#text".to_string()));
    assert_eq!(doc.text(text), Some("<span>test</span>"));
    doc.set_text(text, "changed").unwrap();
    assert_eq!(doc.text(text), Some("changed"));
}

#[test]
fn append_moves_attached_nodes() {
    let mut doc = Document::new();
    let fixture = el(&mut doc, "div");
    let content = el(&mut doc, "div");
    doc.set_attribute(content, "id", "testContent").unwrap();
    doc.append_child(fixture, content).unwrap();

    let target = el(&mut doc, "div");
    doc.append_child(target, content).unwrap();

    assert_eq!(doc.parent(content), Some(target));
    assert!(doc.children(fixture).is_empty());
    assert!(!doc.contains(fixture, content));
    assert_eq!(doc.outer_html(target), r#"<div><div id="testContent"></div></div>"#);
}

#[test]
fn appending_fragment_splices_children_and_empties_it() {
    let mut doc = Document::new();
    let frag = doc.create_document_fragment();
    let a = el(&mut doc, "h2");
    let b = el(&mut doc, "h2");
    doc.append_child(frag, a).unwrap();
    doc.append_child(frag, b).unwrap();

    let div = el(&mut doc, "div");
    doc.append_child(div, frag).unwrap();

    assert_eq!(doc.children(div), &[a, b]);
    assert_eq!(doc.parent(a), Some(div));
    assert!(doc.children(frag).is_empty());
    assert_eq!(doc.parent(frag), None);
}

#[test]
fn append_rejects_cycles_and_text_parents() {
    let mut doc = Document::new();
    let outer = el(&mut doc, "div");
    let inner = el(&mut doc, "div");
    doc.append_child(outer, inner).unwrap();

    assert_eq!(
        doc.append_child(inner, outer),
        Err(DomError::HierarchyRequest {
            parent: inner,
            child: outer
        })
    );
    assert!(doc.append_child(outer, outer).is_err());

    let text = doc.create_text_node("x");
    let span = el(&mut doc, "span");
    assert!(matches!(
        doc.append_child(text, span),
        Err(DomError::HierarchyRequest { .. })
    ));
}

#[test]
fn remove_child_requires_actual_parent() {
    let mut doc = Document::new();
    let ul = el(&mut doc, "ul");
    let li = el(&mut doc, "li");
    let other = el(&mut doc, "ol");
    doc.append_child(ul, li).unwrap();

    assert_eq!(doc.remove_child(other, li), Err(DomError::NotFound(li)));
    assert_eq!(doc.remove_child(ul, li), Ok(li));
    assert_eq!(doc.parent(li), None);
    assert!(doc.children(ul).is_empty());
}

#[test]
fn attributes_keep_order_and_overwrite_in_place() {
    let mut doc = Document::new();
    let ta = el(&mut doc, "textarea");
    doc.set_attribute(ta, "rows", "10").unwrap();
    doc.set_attribute(ta, "COLS", "60").unwrap();
    doc.set_attribute(ta, "rows", "12").unwrap();

    assert_eq!(doc.get_attribute(ta, "rows"), Some("12"));
    assert_eq!(doc.get_attribute(ta, "cols"), Some("60"));
    assert_eq!(doc.outer_html(ta), r#"<textarea rows="12" cols="60"></textarea>"#);

    doc.remove_attribute(ta, "rows").unwrap();
    assert!(!doc.has_attribute(ta, "rows"));
}

#[test]
fn attribute_errors() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    let text = doc.create_text_node("x");
    assert!(matches!(
        doc.set_attribute(div, "1", "x"),
        Err(DomError::InvalidCharacter { .. })
    ));
    assert_eq!(
        doc.set_attribute(text, "id", "x"),
        Err(DomError::WrongNodeType {
            node: text,
            expected: NodeType::Element
        })
    );
}

#[test]
fn expando_properties_preserve_type() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    doc.set_property(div, "prop1", Value::Int(1)).unwrap();
    doc.set_property(div, "var", Value::from("can even use a reserved word"))
        .unwrap();

    assert_eq!(doc.get_property(div, "prop1"), Some(Value::Int(1)));
    assert_eq!(
        doc.get_property(div, "var"),
        Some(Value::from("can even use a reserved word"))
    );
    assert_eq!(doc.get_property(div, "missing"), None);
    // Expandos do not show up in markup.
    assert_eq!(doc.outer_html(div), "<div></div>");
}

#[test]
fn reflected_properties_write_attributes() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    doc.set_property(div, "id", Value::from("div100")).unwrap();
    doc.set_property(div, "className", Value::from("test")).unwrap();
    assert_eq!(doc.outer_html(div), r#"<div id="div100" class="test"></div>"#);
    assert_eq!(doc.get_property(div, "className"), Some(Value::from("test")));

    let input = el(&mut doc, "input");
    doc.set_property(input, "type", Value::from("textbox")).unwrap();
    doc.set_property(input, "value", Value::from("enter a value")).unwrap();
    assert_eq!(doc.outer_html(input), r#"<input type="textbox">"#);
    assert_eq!(
        doc.get_property(input, "value"),
        Some(Value::from("enter a value"))
    );
}

#[test]
fn builtin_properties_read_node_state() {
    let mut doc = Document::new();
    let p = el(&mut doc, "p");
    let frag = doc.create_document_fragment();
    assert_eq!(doc.get_property(p, "nodeType"), Some(Value::Int(1)));
    assert_eq!(doc.get_property(frag, "nodeType"), Some(Value::Int(11)));
    assert_eq!(doc.get_property(p, "tagName"), Some(Value::from("P")));
}

#[test]
fn text_content_property_replaces_children() {
    let mut doc = Document::new();
    let p = el(&mut doc, "p");
    let b = el(&mut doc, "b");
    doc.append_child(p, b).unwrap();
    doc.set_property(p, "textContent", Value::from("a < b")).unwrap();

    assert_eq!(doc.outer_html(p), "<p>a &lt; b</p>");
    assert_eq!(doc.parent(b), None);
    assert_eq!(doc.get_property(p, "textContent"), Some(Value::from("a < b")));
}

#[test]
fn style_properties_sync_attribute() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    doc.set_style_property(div, "width", "400px").unwrap();
    doc.set_style_property(div, "borderColor", "black").unwrap();
    doc.set_style_property(div, "float", "left").unwrap();

    assert_eq!(doc.style_property(div, "border-color"), Some("black"));
    assert_eq!(doc.style_property(div, "cssFloat"), Some("left"));
    assert_eq!(
        doc.get_attribute(div, "style"),
        Some("width: 400px; border-color: black; float: left;")
    );

    assert_eq!(doc.remove_style_property(div, "width").unwrap(), "400px");
    assert_eq!(doc.style_property(div, "width"), Some(""));
}

#[test]
fn unknown_style_names_leave_the_element_untouched() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    doc.set_style_property(div, "", "red").unwrap();
    doc.set_style_property(div, "Width", "1px").unwrap();
    assert_eq!(doc.get_attribute(div, "style"), None);
    assert_eq!(doc.outer_html(div), "<div></div>");
}

#[test]
fn css_text_and_style_attribute_agree() {
    let mut doc = Document::new();
    let a = el(&mut doc, "div");
    let b = el(&mut doc, "div");
    doc.set_css_text(a, "width: 400px; height: 300px").unwrap();
    doc.set_style_property(b, "width", "400px").unwrap();
    doc.set_style_property(b, "height", "300px").unwrap();
    assert_eq!(doc.outer_html(a), doc.outer_html(b));
    assert_eq!(doc.css_text(a), Some("width: 400px; height: 300px;".to_string()));

    let c = el(&mut doc, "div");
    doc.set_attribute(c, "style", "color: red").unwrap();
    assert_eq!(doc.style_property(c, "color"), Some("red"));
    doc.remove_attribute(c, "style").unwrap();
    assert_eq!(doc.style_property(c, "color"), Some(""));
}

#[test]
fn unknown_handles_are_not_found() {
    let mut doc = Document::new();
    let div = el(&mut doc, "div");
    let ghost = NodeId(99);
    assert_eq!(doc.append_child(div, ghost), Err(DomError::NotFound(ghost)));
    assert_eq!(doc.append_child(ghost, div), Err(DomError::NotFound(ghost)));
    assert_eq!(doc.node_type(ghost), None);
    assert!(doc.children(ghost).is_empty());
    assert_eq!(doc.outer_html(ghost), "");
}
