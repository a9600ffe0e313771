//! Synthesized input events: mock fixtures and positioned events.
//!
//! Mock events stand in for genuine device input when testing the handler
//! layer in isolation; positioned events are the concrete, modality-correct
//! records a simulated element dispatches. Coordinates are carried in the
//! modality-appropriate shape: flat page coordinates for mouse and pointer,
//! a one-element touch-point list for touch.

use crate::dom::TestElement;
use crate::modality::{GesturePhase, InputModality, PhaseMap};
use serde::{Deserialize, Serialize};

/// A single touch contact point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Horizontal page coordinate
    pub page_x: f64,
    /// Vertical page coordinate
    pub page_y: f64,
}

impl TouchPoint {
    /// The default touch point at the page origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a touch point
    #[must_use]
    pub const fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Placeholder for the native device event a synthetic event wraps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeEvent {
    /// Modality the native event belongs to
    pub modality: InputModality,
    /// Event name carried by the native event
    pub event_name: String,
}

impl NativeEvent {
    /// Default placeholder typed by modality ("mouse", "touch", "pointer")
    #[must_use]
    pub fn placeholder(modality: InputModality) -> Self {
        Self {
            modality,
            event_name: modality.native_name().to_string(),
        }
    }

    /// Placeholder carrying a specific event name
    #[must_use]
    pub fn named(modality: InputModality, event_name: impl Into<String>) -> Self {
        Self {
            modality,
            event_name: event_name.into(),
        }
    }
}

/// Fixture event standing in for a genuine input event.
///
/// Built with modality defaults, then overridden field by field; each
/// `with_*` call replaces its whole field (shallow-merge semantics), so
/// overriding the native placeholder swaps it out entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticEvent {
    /// Native-event placeholder
    pub native_event: NativeEvent,
    /// Flat horizontal page coordinate (mouse/pointer)
    pub page_x: Option<f64>,
    /// Flat vertical page coordinate (mouse/pointer)
    pub page_y: Option<f64>,
    /// Touch contact points (touch)
    pub touches: Vec<TouchPoint>,
}

impl SyntheticEvent {
    /// Mock event with modality defaults.
    ///
    /// Touch defaults to exactly one touch point at the origin; mouse and
    /// pointer start with no touches and no coordinates.
    #[must_use]
    pub fn mock(modality: InputModality) -> Self {
        let touches = match modality {
            InputModality::Touch => vec![TouchPoint::ORIGIN],
            InputModality::Mouse | InputModality::Pointer => Vec::new(),
        };
        Self {
            native_event: NativeEvent::placeholder(modality),
            page_x: None,
            page_y: None,
            touches,
        }
    }

    /// Wrap a dispatched raw event the way the gesture hook wraps the
    /// native event it receives.
    #[must_use]
    pub fn from_raw(raw: &RawEvent) -> Self {
        let mut event = Self::mock(raw.modality)
            .with_native(NativeEvent::named(raw.modality, raw.name.clone()));
        if !raw.touches.is_empty() {
            event = event.with_touches(raw.touches.clone());
        }
        if let (Some(x), Some(y)) = (raw.page_x, raw.page_y) {
            event = event.with_page_position(x, y);
        }
        event
    }

    /// Replace the native-event placeholder wholesale
    #[must_use]
    pub fn with_native(mut self, native: NativeEvent) -> Self {
        self.native_event = native;
        self
    }

    /// Replace the touch list wholesale
    #[must_use]
    pub fn with_touches(mut self, touches: Vec<TouchPoint>) -> Self {
        self.touches = touches;
        self
    }

    /// Set flat page coordinates
    #[must_use]
    pub const fn with_page_position(mut self, x: f64, y: f64) -> Self {
        self.page_x = Some(x);
        self.page_y = Some(y);
        self
    }

    /// Event position regardless of modality shape
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.touches
            .first()
            .map(|touch| (touch.page_x, touch.page_y))
            .or_else(|| self.page_x.zip(self.page_y))
    }
}

/// Concrete, modality-correct event dispatched at a test element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Concrete event name ("mousedown", "touchend", ...)
    pub name: String,
    /// Modality the event belongs to
    pub modality: InputModality,
    /// Gesture phase the event represents
    pub phase: GesturePhase,
    /// Flat horizontal page coordinate (mouse/pointer)
    pub page_x: Option<f64>,
    /// Flat vertical page coordinate (mouse/pointer)
    pub page_y: Option<f64>,
    /// Touch contact points (touch)
    pub touches: Vec<TouchPoint>,
}

impl RawEvent {
    /// Build the modality-correct event for a phase with injected
    /// coordinates.
    ///
    /// Coordinates pass through unvalidated: negative and non-finite
    /// values are the caller's responsibility.
    #[must_use]
    pub fn positioned(modality: InputModality, phase: GesturePhase, x: f64, y: f64) -> Self {
        let name = modality.event_name(phase).to_string();
        match modality {
            InputModality::Touch => Self {
                name,
                modality,
                phase,
                page_x: None,
                page_y: None,
                touches: vec![TouchPoint::new(x, y)],
            },
            InputModality::Mouse | InputModality::Pointer => Self {
                name,
                modality,
                phase,
                page_x: Some(x),
                page_y: Some(y),
                touches: Vec::new(),
            },
        }
    }

    /// Event position regardless of modality shape
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.touches
            .first()
            .map(|touch| (touch.page_x, touch.page_y))
            .or_else(|| self.page_x.zip(self.page_y))
    }
}

/// Build the positioned event for a phase at an element
#[must_use]
pub fn positioned_event(
    modality: InputModality,
    element: &TestElement,
    phase: GesturePhase,
    x: f64,
    y: f64,
) -> RawEvent {
    element.create_event(modality, phase, x, y)
}

/// Creates positioned events for one (modality, element, phase) binding.
///
/// Explicit value object standing in for a closure: the captured state is
/// visible, and `create` may be invoked any number of times without
/// mutating anything.
#[derive(Debug, Clone)]
pub struct EventCreator {
    modality: InputModality,
    element: TestElement,
    phase: GesturePhase,
}

impl EventCreator {
    /// Bind a creator to a modality, element, and phase
    #[must_use]
    pub fn new(modality: InputModality, element: &TestElement, phase: GesturePhase) -> Self {
        Self {
            modality,
            element: element.clone(),
            phase,
        }
    }

    /// Build the positioned event for the bound phase
    #[must_use]
    pub fn create(&self, x: f64, y: f64) -> RawEvent {
        self.element.create_event(self.modality, self.phase, x, y)
    }

    /// Bound modality
    #[must_use]
    pub const fn modality(&self) -> InputModality {
        self.modality
    }

    /// Bound phase
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Bound element
    #[must_use]
    pub const fn element(&self) -> &TestElement {
        &self.element
    }
}

/// Build the per-phase positioned-event creators for a modality at an
/// element: exactly one creator per gesture phase.
#[must_use]
pub fn positioned_event_factory(
    modality: InputModality,
    element: &TestElement,
) -> PhaseMap<EventCreator> {
    PhaseMap::build(|phase| EventCreator::new(modality, element, phase))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ============================================================
    // Mock event tests
    // ============================================================

    #[test]
    fn test_mock_touch_defaults_to_single_origin_point() {
        let event = SyntheticEvent::mock(InputModality::Touch);
        assert_eq!(event.touches, vec![TouchPoint::ORIGIN]);
        assert_eq!(event.native_event.event_name, "touch");
        assert_eq!(event.page_x, None);
        assert_eq!(event.page_y, None);
    }

    #[test]
    fn test_mock_mouse_and_pointer_have_no_touches() {
        for modality in [InputModality::Mouse, InputModality::Pointer] {
            let event = SyntheticEvent::mock(modality);
            assert!(event.touches.is_empty());
            assert_eq!(event.native_event.event_name, modality.native_name());
        }
    }

    #[test]
    fn test_touches_override_replaces_whole_list() {
        let event = SyntheticEvent::mock(InputModality::Touch)
            .with_touches(vec![TouchPoint::new(3.0, 4.0)]);
        assert_eq!(event.touches, vec![TouchPoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_native_override_replaces_whole_placeholder() {
        let event = SyntheticEvent::mock(InputModality::Mouse)
            .with_native(NativeEvent::named(InputModality::Mouse, "mousedown"));
        assert_eq!(event.native_event.event_name, "mousedown");
    }

    #[test]
    fn test_mock_position_prefers_touches() {
        let event = SyntheticEvent::mock(InputModality::Touch)
            .with_touches(vec![TouchPoint::new(7.0, 8.0)]);
        assert_eq!(event.position(), Some((7.0, 8.0)));

        let event = SyntheticEvent::mock(InputModality::Mouse).with_page_position(1.0, 2.0);
        assert_eq!(event.position(), Some((1.0, 2.0)));

        assert_eq!(SyntheticEvent::mock(InputModality::Mouse).position(), None);
    }

    #[test]
    fn test_from_raw_wraps_dispatched_event() {
        let raw = RawEvent::positioned(InputModality::Touch, GesturePhase::Start, 10.0, 20.0);
        let event = SyntheticEvent::from_raw(&raw);
        assert_eq!(event.native_event.event_name, "touchstart");
        assert_eq!(event.touches, vec![TouchPoint::new(10.0, 20.0)]);

        let raw = RawEvent::positioned(InputModality::Pointer, GesturePhase::Stop, 5.0, 6.0);
        let event = SyntheticEvent::from_raw(&raw);
        assert_eq!(event.native_event.event_name, "pointerup");
        assert_eq!(event.position(), Some((5.0, 6.0)));
    }

    // ============================================================
    // Positioned event tests
    // ============================================================

    #[test]
    fn test_positioned_mouse_carries_flat_page_coordinates() {
        let event = RawEvent::positioned(InputModality::Mouse, GesturePhase::Move, 15.0, 25.0);
        assert_eq!(event.name, "mousemove");
        assert_eq!(event.page_x, Some(15.0));
        assert_eq!(event.page_y, Some(25.0));
        assert!(event.touches.is_empty());
    }

    #[test]
    fn test_positioned_touch_carries_single_touch_point() {
        let event = RawEvent::positioned(InputModality::Touch, GesturePhase::Stop, 15.0, 25.0);
        assert_eq!(event.name, "touchend");
        assert_eq!(event.page_x, None);
        assert_eq!(event.page_y, None);
        assert_eq!(event.touches, vec![TouchPoint::new(15.0, 25.0)]);
    }

    #[test]
    fn test_positioned_passes_non_finite_coordinates_through() {
        let event = RawEvent::positioned(InputModality::Pointer, GesturePhase::Start, f64::NAN, f64::INFINITY);
        assert!(event.page_x.unwrap().is_nan());
        assert_eq!(event.page_y, Some(f64::INFINITY));

        let event = RawEvent::positioned(InputModality::Mouse, GesturePhase::Stop, -3.5, -0.0);
        assert_eq!(event.position(), Some((-3.5, -0.0)));
    }

    #[test]
    fn test_raw_event_serde_round_trip() {
        let event = RawEvent::positioned(InputModality::Touch, GesturePhase::Start, 1.0, 2.0);
        let json = serde_json::to_string(&event).unwrap();
        let back: RawEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    // ============================================================
    // Factory tests
    // ============================================================

    #[test]
    fn test_factory_has_one_creator_per_phase() {
        let element = TestElement::new("button");
        let factory = positioned_event_factory(InputModality::Pointer, &element);
        for (phase, creator) in factory.iter() {
            assert_eq!(creator.phase(), phase);
            assert_eq!(creator.modality(), InputModality::Pointer);
            assert_eq!(creator.create(0.0, 0.0).name, InputModality::Pointer.event_name(phase));
        }
    }

    #[test]
    fn test_factory_creators_are_independent() {
        let element = TestElement::new("button");
        let factory = positioned_event_factory(InputModality::Mouse, &element);
        let start = factory.get(GesturePhase::Start);

        let first = start.create(5.0, 10.0);
        let second = start.create(50.0, 100.0);
        assert_eq!(first.position(), Some((5.0, 10.0)));
        assert_eq!(second.position(), Some((50.0, 100.0)));

        // Creating events does not dispatch anything
        assert!(element.fired_events().is_empty());
    }

    #[test]
    fn test_positioned_event_matches_creator_output() {
        let element = TestElement::new("div");
        let event = positioned_event(InputModality::Touch, &element, GesturePhase::Move, 2.0, 3.0);
        let creator = EventCreator::new(InputModality::Touch, &element, GesturePhase::Move);
        assert_eq!(event, creator.create(2.0, 3.0));
    }

    // ============================================================
    // Property tests
    // ============================================================

    proptest! {
        #[test]
        fn prop_coordinates_pass_through_unchanged(
            x in proptest::num::f64::ANY,
            y in proptest::num::f64::ANY,
        ) {
            for modality in InputModality::ALL {
                for phase in GesturePhase::ALL {
                    let event = RawEvent::positioned(modality, phase, x, y);
                    let (px, py) = event.position().unwrap();
                    prop_assert_eq!(px.to_bits(), x.to_bits());
                    prop_assert_eq!(py.to_bits(), y.to_bits());
                }
            }
        }

        #[test]
        fn prop_touch_always_yields_exactly_one_point(x: f64, y: f64) {
            let event = RawEvent::positioned(InputModality::Touch, GesturePhase::Start, x, y);
            prop_assert_eq!(event.touches.len(), 1);
            prop_assert!(event.page_x.is_none() && event.page_y.is_none());
        }
    }
}
