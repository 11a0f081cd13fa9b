//! Drives the builder against a document that records every call, to pin
//! down the order of native operations.

use builder::{Builder, Descriptor, NativeDocument, ObjectSpec, StyleSpec};
use core_types::Value;

#[derive(Debug, PartialEq)]
enum Kind {
    Element(String),
    Text(String),
    Fragment,
}

#[derive(Default)]
struct Recorder {
    kinds: Vec<Kind>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    calls: Vec<String>,
}

impl Recorder {
    fn push(&mut self, kind: Kind) -> usize {
        self.kinds.push(kind);
        self.parents.push(None);
        self.children.push(Vec::new());
        self.kinds.len() - 1
    }
}

impl NativeDocument for Recorder {
    type Node = usize;
    type Listener = &'static str;
    type Error = String;

    fn create_element(&mut self, tag: &str) -> Result<usize, String> {
        if tag == "boom" {
            return Err(format!("cannot create {tag}"));
        }
        let node = self.push(Kind::Element(tag.to_string()));
        self.calls.push(format!("create {tag} -> {node}"));
        Ok(node)
    }

    fn create_text_node(&mut self, text: &str) -> usize {
        let node = self.push(Kind::Text(text.to_string()));
        self.calls.push(format!("text {text:?} -> {node}"));
        node
    }

    fn create_fragment(&mut self) -> usize {
        let node = self.push(Kind::Fragment);
        self.calls.push(format!("fragment -> {node}"));
        node
    }

    fn is_fragment(&self, node: usize) -> bool {
        self.kinds[node] == Kind::Fragment
    }

    fn child_nodes(&self, node: usize) -> Vec<usize> {
        self.children[node].clone()
    }

    fn append_child(&mut self, parent: usize, child: usize) -> Result<(), String> {
        if let Some(old) = self.parents[child].take() {
            self.children[old].retain(|&c| c != child);
        }
        self.parents[child] = Some(parent);
        self.children[parent].push(child);
        self.calls.push(format!("append {parent} {child}"));
        Ok(())
    }

    fn set_property(&mut self, node: usize, name: &str, value: &Value) -> Result<(), String> {
        self.calls.push(format!("prop {node} {name}={value:?}"));
        Ok(())
    }

    fn set_attribute(&mut self, node: usize, name: &str, value: &str) -> Result<(), String> {
        self.calls.push(format!("attr {node} {name}={value}"));
        Ok(())
    }

    fn set_style_property(&mut self, node: usize, name: &str, value: &str) -> Result<(), String> {
        self.calls.push(format!("style {node} {name}={value}"));
        Ok(())
    }

    fn set_css_text(&mut self, node: usize, text: &str) -> Result<(), String> {
        self.calls.push(format!("css {node} {text}"));
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: usize,
        event_type: &str,
        listener: &&'static str,
    ) -> Result<(), String> {
        self.calls.push(format!("listen {node} {event_type} {listener}"));
        Ok(())
    }

    fn not_a_node(&self) -> String {
        "not a node".to_string()
    }
}

fn spec() -> ObjectSpec<Recorder> {
    ObjectSpec::new()
}

fn run(descriptor: &Descriptor<Recorder>) -> (Recorder, Result<Option<usize>, String>) {
    let mut doc = Recorder::default();
    let result = Builder::default().build_node(&mut doc, descriptor);
    (doc, result)
}

#[test]
fn element_steps_run_in_order() {
    let descriptor = Descriptor::Object(
        spec()
            .tag("p")
            .init(|_, doc: &mut Recorder, node| {
                doc.calls.push(format!("init {node}"));
                Ok(())
            })
            .content("hi")
            .on("click", "onclick")
            .style(StyleSpec::map([("border-color", "red")]))
            .attributes([("title", "t")])
            .prop("id", "x"),
    );

    let (doc, result) = run(&descriptor);

    assert_eq!(result, Ok(Some(0)));
    assert_eq!(
        doc.calls,
        vec![
            "create p -> 0",
            r#"prop 0 id=Str("x")"#,
            "attr 0 title=t",
            "style 0 borderColor=red",
            "listen 0 click onclick",
            r#"text "hi" -> 1"#,
            "append 0 1",
            "init 0",
        ]
    );
}

#[test]
fn array_content_is_built_into_a_fragment_then_moved() {
    let descriptor = Descriptor::Object(spec().tag("ul").content(Descriptor::<Recorder>::Array(vec![
        spec()
            .tag("li")
            .init(|_, doc: &mut Recorder, node| {
                doc.calls.push(format!("init {node}"));
                Ok(())
            })
            .into(),
        Descriptor::Null,
        "x".into(),
    ])));

    let (doc, result) = run(&descriptor);

    assert_eq!(result, Ok(Some(0)));
    assert_eq!(
        doc.calls,
        vec![
            "create ul -> 0",
            "fragment -> 1",
            "create li -> 2",
            "init 2",
            "append 1 2",
            r#"text "x" -> 3"#,
            "append 1 3",
            "append 0 2",
            "append 0 3",
        ]
    );
    assert_eq!(doc.children[0], vec![2, 3]);
    assert_eq!(doc.kinds[3], Kind::Text("x".to_string()));
    assert!(doc.children[1].is_empty());
}

#[test]
fn style_text_is_assigned_whole() {
    let descriptor = Descriptor::Object(spec().css("float: left"));
    let (doc, _) = run(&descriptor);
    assert_eq!(doc.calls[1], "css 0 float: left");
}

#[test]
fn native_errors_propagate_unchanged() {
    let descriptor = Descriptor::Object(spec().content(spec().tag("boom")));
    let (doc, result) = run(&descriptor);
    assert_eq!(result, Err("cannot create boom".to_string()));
    assert_eq!(doc.calls, vec!["create div -> 0"]);
}

#[test]
fn pass_through_reports_not_a_node() {
    let descriptor = Descriptor::Object(spec().prop("nodeType", 1));
    let (doc, result) = run(&descriptor);
    assert_eq!(result, Err("not a node".to_string()));
    assert!(doc.calls.is_empty());
}

#[test]
fn existing_nodes_are_moved_from_their_parent() {
    let mut doc = Recorder::default();
    let old_parent = doc.create_element("section").unwrap();
    let existing = doc.create_element("em").unwrap();
    doc.append_child(old_parent, existing).unwrap();
    doc.calls.clear();

    let descriptor = Descriptor::Object(spec().content(Descriptor::Node(existing)));
    let node = Builder::default().build_node(&mut doc, &descriptor).unwrap();

    assert_eq!(node, Some(2));
    assert_eq!(doc.kinds[2], Kind::Element("div".to_string()));
    assert_eq!(doc.parents[existing], Some(2));
    assert!(doc.children[old_parent].is_empty());
}
