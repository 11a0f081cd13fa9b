//! In-memory document tree.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`] handles. The document provides the operations a DOM exposes to
//! script: element, text and fragment creation, insertion with move
//! semantics, attributes, typed properties, inline style, event listeners and
//! HTML serialization.

pub mod events;
pub mod names;
pub mod outline;
pub mod serialize;

mod document;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use crate::document::{Document, DocumentConfig};
pub use crate::error::DomError;
pub use crate::events::{Event, Listener, listener};
pub use crate::outline::outline;
pub use crate::types::NodeId;

pub use core_types::{NodeType, Value};
pub use css::InlineStyle;
