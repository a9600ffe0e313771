//! Minimal simulated DOM target for dispatching synthesized events.
//!
//! A [`TestElement`] stands in for the element a component under test is
//! mounted on: it records every dispatched event and invokes listeners in
//! registration order, so tests can both fire positioned events at it and
//! observe exactly what fired.

use crate::event::RawEvent;
use crate::modality::{GesturePhase, InputModality};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

type Listener = Arc<dyn Fn(&RawEvent) + Send + Sync>;

struct ElementInner {
    tag: String,
    fired: Mutex<Vec<RawEvent>>,
    listeners: Mutex<Vec<(String, Listener)>>,
}

/// Cloneable handle to a simulated element.
///
/// Clones share the same event log and listener table, mirroring how
/// multiple references to one DOM node observe the same dispatches.
#[derive(Clone)]
pub struct TestElement {
    inner: Arc<ElementInner>,
}

impl fmt::Debug for TestElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestElement")
            .field("tag", &self.inner.tag)
            .field("fired", &self.fired_count())
            .finish()
    }
}

impl TestElement {
    /// Create an element with the given tag name
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ElementInner {
                tag: tag.into(),
                fired: Mutex::new(Vec::new()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Tag name of the element
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    /// Event-creation primitive: build the positioned event for a phase at
    /// this element without dispatching it.
    #[must_use]
    pub fn create_event(
        &self,
        modality: InputModality,
        phase: GesturePhase,
        x: f64,
        y: f64,
    ) -> RawEvent {
        trace!(
            tag = %self.inner.tag,
            event = modality.event_name(phase),
            x,
            y,
            "create positioned event"
        );
        RawEvent::positioned(modality, phase, x, y)
    }

    /// Event-firing primitive: record the event and invoke listeners
    /// registered for its name, in registration order.
    pub fn dispatch(&self, event: RawEvent) {
        debug!(tag = %self.inner.tag, event = %event.name, "dispatch");

        let matching: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .expect("listener table poisoned")
            .iter()
            .filter(|(name, _)| *name == event.name)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        self.inner
            .fired
            .lock()
            .expect("event log poisoned")
            .push(event.clone());

        for listener in matching {
            listener(&event);
        }
    }

    /// Register a listener for an event name
    pub fn listen(
        &self,
        name: impl Into<String>,
        listener: impl Fn(&RawEvent) + Send + Sync + 'static,
    ) {
        self.inner
            .listeners
            .lock()
            .expect("listener table poisoned")
            .push((name.into(), Arc::new(listener)));
    }

    /// All events dispatched at this element, oldest first
    #[must_use]
    pub fn fired_events(&self) -> Vec<RawEvent> {
        self.inner.fired.lock().expect("event log poisoned").clone()
    }

    /// Dispatched events with the given name
    #[must_use]
    pub fn events_named(&self, name: &str) -> Vec<RawEvent> {
        self.fired_events()
            .into_iter()
            .filter(|event| event.name == name)
            .collect()
    }

    /// Number of events dispatched so far
    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.inner.fired.lock().expect("event log poisoned").len()
    }

    /// Clear the event log, keeping listeners registered
    pub fn clear(&self) {
        self.inner.fired.lock().expect("event log poisoned").clear();
    }
}
