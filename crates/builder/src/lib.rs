//! Declarative tree construction.
//!
//! A [`Descriptor`] says what to build: nothing, an existing node, a text
//! node, an element described by an [`ObjectSpec`], or a list of those. The
//! [`Builder`] turns it into nodes of a [`NativeDocument`], attaching content,
//! attributes, style and listeners and running initializers children first.
//!
//! ```
//! use builder::{Descriptor, ObjectSpec, build};
//! use dom::Document;
//!
//! let mut doc = Document::new();
//! let spec: Descriptor = Descriptor::Object(
//!     ObjectSpec::new().tag("h1").content("Mergers & Acquisitions"),
//! );
//! let node = build(&mut doc, &spec).unwrap().and_then(|b| b.node()).unwrap();
//! assert_eq!(doc.outer_html(node), "<h1>Mergers &amp; Acquisitions</h1>");
//! ```

pub mod descriptor;
pub mod native;

mod build;
#[cfg(feature = "json")]
pub mod json;

pub use crate::build::{Builder, BuilderConfig, Built, build};
pub use crate::descriptor::{
    Descriptor, Initializer, NODE_TYPE_KEY, ObjectSpec, RESERVED_KEYS, StyleSpec, is_reserved,
};
pub use crate::native::NativeDocument;

#[cfg(feature = "json")]
pub use crate::json::JsonError;
