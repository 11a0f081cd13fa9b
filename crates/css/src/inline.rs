//! Inline declaration block, the backing store of an element's `style`.

use crate::names::{hyphenate_property, is_property_name};
use crate::syntax::{Declaration, parse_declarations};

/// Ordered set of declarations keyed by CSS property name.
///
/// Setting a property that already exists updates it in place; new properties
/// are appended. Lookups accept either spelling of a property name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        style.set_css_text(css_text);
        style
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Set a property. An empty value removes it, matching style-object
    /// assignment of `""`. Names that do not spell a property are ignored.
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.set_property_with_priority(name, value, false);
    }

    pub fn set_property_with_priority(&mut self, name: &str, value: &str, important: bool) {
        let name = hyphenate_property(name);
        if !is_property_name(&name) {
            return;
        }
        let value = value.trim();
        if value.is_empty() {
            self.remove_by_css_name(&name);
            return;
        }
        match self.declarations.iter_mut().find(|d| d.name == name) {
            Some(existing) => {
                existing.value = value.to_string();
                existing.important = important;
            }
            None => self.declarations.push(Declaration {
                name,
                value: value.to_string(),
                important,
            }),
        }
    }

    /// Value of a property, or `""` when unset.
    pub fn get_property(&self, name: &str) -> &str {
        let name = hyphenate_property(name);
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map_or("", |d| d.value.as_str())
    }

    pub fn is_important(&self, name: &str) -> bool {
        let name = hyphenate_property(name);
        self.declarations
            .iter()
            .any(|d| d.name == name && d.important)
    }

    /// Remove a property, returning its previous value (or `""`).
    pub fn remove_property(&mut self, name: &str) -> String {
        let name = hyphenate_property(name);
        self.remove_by_css_name(&name).unwrap_or_default()
    }

    /// Replace the whole block with the declarations parsed from `text`.
    /// Later duplicates win, as they would in a stylesheet.
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations.clear();
        for decl in parse_declarations(text) {
            self.set_property_with_priority(&decl.name, &decl.value, decl.important);
        }
    }

    /// Serialize back to declaration text: `width: 400px; height: 300px;`.
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for decl in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&decl.name);
            out.push_str(": ");
            out.push_str(&decl.value);
            if decl.important {
                out.push_str(" !important");
            }
            out.push(';');
        }
        out
    }

    fn remove_by_css_name(&mut self, name: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|d| d.name == name)?;
        Some(self.declarations.remove(pos).value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_spellings_address_one_property() {
        let mut style = InlineStyle::new();
        style.set_property("borderColor", "black");
        assert_eq!(style.get_property("border-color"), "black");
        style.set_property("border-color", "red");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get_property("borderColor"), "red");
    }

    #[test]
    fn float_aliases() {
        let mut style = InlineStyle::new();
        style.set_property("cssFloat", "left");
        assert_eq!(style.get_property("float"), "left");
        assert_eq!(style.css_text(), "float: left;");
    }

    #[test]
    fn empty_value_removes() {
        let mut style = InlineStyle::parse("width: 400px; height: 300px");
        style.set_property("width", "");
        assert_eq!(style.css_text(), "height: 300px;");
        assert_eq!(style.get_property("width"), "");
    }

    #[test]
    fn css_text_round_trip_keeps_order_and_priority() {
        let style = InlineStyle::parse("color: red !important; width: 1px; color: blue");
        // The duplicate updates the first entry in place.
        assert_eq!(style.css_text(), "color: blue; width: 1px;");
        let style = InlineStyle::parse("color: red !important");
        assert!(style.is_important("color"));
        assert_eq!(style.css_text(), "color: red !important;");
    }

    #[test]
    fn non_property_names_are_ignored() {
        let mut style = InlineStyle::new();
        style.set_property("", "red");
        style.set_property("Width", "1px");
        style.set_property("width", "2px");
        assert_eq!(style.css_text(), "width: 2px;");
        assert_eq!(style.get_property("Width"), "");
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut style = InlineStyle::parse("margin-top: 4px");
        assert_eq!(style.remove_property("marginTop"), "4px");
        assert_eq!(style.remove_property("marginTop"), "");
        assert!(style.is_empty());
    }
}
