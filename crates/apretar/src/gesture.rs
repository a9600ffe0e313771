//! Dispatch-mapping builders bridging registered handlers and simulated
//! DOM firing.
//!
//! Both builders expose a uniform per-phase mapping so test code stays
//! modality-agnostic: [`handlers_map`] resolves the handlers a component
//! under test registered for a modality, [`dom_firing_map`] produces firing
//! callables bound to a target element.

use crate::dom::TestElement;
use crate::event::{EventCreator, RawEvent, SyntheticEvent};
use crate::modality::{GesturePhase, InputModality, PhaseMap};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the synthetic event a gesture phase produced
pub type GestureHandler = Arc<dyn Fn(&SyntheticEvent) + Send + Sync>;

/// No-op handler substituted for phases the component did not register
#[must_use]
pub fn noop_handler() -> GestureHandler {
    Arc::new(|_| {})
}

/// Handlers the component under test registered, keyed by their
/// modality-specific names ("onMouseDown", "onTouchStart", ...).
#[derive(Default, Clone)]
pub struct HandlerSet {
    handlers: HashMap<String, GestureHandler>,
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("HandlerSet").field("names", &names).finish()
    }
}

impl HandlerSet {
    /// Create an empty handler set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its modality-specific name
    #[must_use]
    pub fn on(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&SyntheticEvent) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Handler registered under the given name, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GestureHandler> {
        self.handlers.get(name)
    }

    /// Number of registered handlers
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Resolve the per-phase handlers registered for a modality.
///
/// Missing optional handlers are substituted with a no-op, so the result
/// always carries exactly one callable per phase and never errors.
#[must_use]
pub fn handlers_map(modality: InputModality, handlers: &HandlerSet) -> PhaseMap<GestureHandler> {
    PhaseMap::build(|phase| {
        handlers
            .get(modality.handler_name(phase))
            .cloned()
            .unwrap_or_else(noop_handler)
    })
}

/// Fires positioned events of one (modality, phase) at a bound element.
///
/// Value-object form of the firing closure: invoking [`fire`](Self::fire)
/// builds the positioned event, dispatches it at the element, and returns
/// the dispatched record for assertions.
#[derive(Debug, Clone)]
pub struct EventFirer {
    creator: EventCreator,
}

impl EventFirer {
    /// Bind a firer to a modality, element, and phase
    #[must_use]
    pub fn new(modality: InputModality, element: &TestElement, phase: GesturePhase) -> Self {
        Self {
            creator: EventCreator::new(modality, element, phase),
        }
    }

    /// Dispatch the positioned event for the bound phase at the element
    pub fn fire(&self, x: f64, y: f64) -> RawEvent {
        let event = self.creator.create(x, y);
        self.creator.element().dispatch(event.clone());
        event
    }

    /// Bound phase
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.creator.phase()
    }
}

/// Per-phase firing callables bound to an element for a modality.
///
/// The modality is captured inside each [`EventFirer`], so every entry
/// dispatches the concrete event of the correct type; there is no
/// fallthrough case to reach.
#[must_use]
pub fn dom_firing_map(modality: InputModality, element: &TestElement) -> PhaseMap<EventFirer> {
    PhaseMap::build(|phase| EventFirer::new(modality, element, phase))
}
