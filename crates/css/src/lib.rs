pub mod inline;
pub mod names;
pub mod syntax;

// Re-exports so other crates can just use `css::...` nicely.
pub use inline::InlineStyle;
pub use names::{camel_case_property, hyphenate_property, is_property_name};
pub use syntax::{Declaration, parse_declarations};
