#![no_main]

use builder::{Builder, Descriptor};
use dom::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(descriptor) = Descriptor::<Document>::parse_json(input) else {
        return;
    };
    let mut doc = Document::new();
    let Ok(Some(node)) = Builder::default().build_node(&mut doc, &descriptor) else {
        return;
    };
    // Roots come back unattached.
    assert_eq!(doc.parent(node), None);
    let html = doc.outer_html(node);
    if doc.children(node).is_empty() && doc.text(node).is_none() {
        assert!(html.is_empty() || html.starts_with('<'));
    }
});
