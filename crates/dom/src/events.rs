//! Event listeners and synchronous dispatch.

use crate::document::Document;
use crate::error::DomError;
use crate::types::NodeId;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Event callback. Listeners run synchronously inside
/// [`Document::dispatch_event`] and may mutate the document.
pub type Listener = Rc<dyn Fn(&mut Document, &Event)>;

/// Wrap a closure as a [`Listener`].
pub fn listener(f: impl Fn(&mut Document, &Event) + 'static) -> Listener {
    Rc::new(f)
}

pub struct Event {
    event_type: String,
    bubbles: bool,
    target: Cell<Option<NodeId>>,
    current_target: Cell<Option<NodeId>>,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Event that is delivered to its target only.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            bubbles: false,
            target: Cell::new(None),
            current_target: Cell::new(None),
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    /// Event that is delivered to its target and then to each ancestor.
    pub fn bubbling(event_type: impl Into<String>) -> Self {
        Self {
            bubbles: true,
            ..Self::new(event_type)
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target.get()
    }

    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.event_type)
            .field("bubbles", &self.bubbles)
            .field("target", &self.target.get())
            .finish()
    }
}

impl Document {
    /// Register `listener` for `event_type` on `node`. Registering the same
    /// listener twice for the same type is a no-op.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        listener: Listener,
    ) -> Result<(), DomError> {
        let record = self.record_mut(node)?;
        let duplicate = record
            .listeners
            .iter()
            .any(|(t, l)| t == event_type && Rc::ptr_eq(l, &listener));
        if !duplicate {
            record.listeners.push((event_type.to_string(), listener));
        }
        Ok(())
    }

    pub fn remove_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), DomError> {
        let record = self.record_mut(node)?;
        record
            .listeners
            .retain(|(t, l)| !(t == event_type && Rc::ptr_eq(l, listener)));
        Ok(())
    }

    pub fn listener_count(&self, node: NodeId, event_type: &str) -> usize {
        self.record(node)
            .map(|r| r.listeners.iter().filter(|(t, _)| t == event_type).count())
            .unwrap_or(0)
    }

    /// Deliver `event` to `target` (and its ancestors, if the event bubbles).
    ///
    /// The propagation path and each node's listener list are snapshotted
    /// before any listener runs. Returns `false` if a listener called
    /// `prevent_default`.
    pub fn dispatch_event(&mut self, target: NodeId, event: &Event) -> Result<bool, DomError> {
        self.record(target)?;
        event.target.set(Some(target));
        event.propagation_stopped.set(false);

        let mut path = vec![target];
        if event.bubbles {
            let mut current = self.parent(target);
            while let Some(node) = current {
                path.push(node);
                current = self.parent(node);
            }
        }

        log::trace!(
            target: "dom.events",
            "dispatch {} at {target} (path length {})",
            event.event_type,
            path.len()
        );

        for node in path {
            let listeners: Vec<Listener> = self
                .record(node)?
                .listeners
                .iter()
                .filter(|(t, _)| *t == event.event_type)
                .map(|(_, l)| Rc::clone(l))
                .collect();
            event.current_target.set(Some(node));
            for listener in listeners {
                listener(self, event);
            }
            if event.propagation_stopped.get() {
                break;
            }
        }
        event.current_target.set(None);
        Ok(!event.default_prevented.get())
    }

    /// Dispatch a bubbling `click` event at `node`.
    pub fn click(&mut self, node: NodeId) -> Result<bool, DomError> {
        self.dispatch_event(node, &Event::bubbling("click"))
    }
}
