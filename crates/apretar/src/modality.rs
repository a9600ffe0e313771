//! Input modalities, gesture phases, and the event-name registry.
//!
//! Single source of truth for translating an input modality into the
//! concrete event names of a press/move/release sequence, and for the
//! "onTouchStart"-style handler names a component under test registers.

use crate::result::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input-device event family a long-press gesture can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputModality {
    /// Mouse events (mousedown/mousemove/mouseup)
    Mouse,
    /// Touch events (touchstart/touchmove/touchend)
    Touch,
    /// Pointer events (pointerdown/pointermove/pointerup)
    Pointer,
}

/// Phase of a press-hold-release sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GesturePhase {
    /// Press begins
    Start,
    /// Pointer moves while pressed
    Move,
    /// Press released
    Stop,
}

impl GesturePhase {
    /// All phases in press-hold-release order
    pub const ALL: [Self; 3] = [Self::Start, Self::Move, Self::Stop];

    /// Abstract phase name used to key dispatch maps
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Move => "move",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InputModality {
    /// All modalities
    pub const ALL: [Self; 3] = [Self::Mouse, Self::Touch, Self::Pointer];

    /// Bare device name used for native-event placeholders
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Touch => "touch",
            Self::Pointer => "pointer",
        }
    }

    /// Concrete event name for a gesture phase in this modality.
    ///
    /// Total over every (modality, phase) pair; the exhaustive match has
    /// no fallthrough arm, so an unmapped pair cannot exist.
    #[must_use]
    pub const fn event_name(self, phase: GesturePhase) -> &'static str {
        match (self, phase) {
            (Self::Mouse, GesturePhase::Start) => "mousedown",
            (Self::Mouse, GesturePhase::Move) => "mousemove",
            (Self::Mouse, GesturePhase::Stop) => "mouseup",
            (Self::Touch, GesturePhase::Start) => "touchstart",
            (Self::Touch, GesturePhase::Move) => "touchmove",
            (Self::Touch, GesturePhase::Stop) => "touchend",
            (Self::Pointer, GesturePhase::Start) => "pointerdown",
            (Self::Pointer, GesturePhase::Move) => "pointermove",
            (Self::Pointer, GesturePhase::Stop) => "pointerup",
        }
    }

    /// Handler name the component under test registers for a phase
    #[must_use]
    pub const fn handler_name(self, phase: GesturePhase) -> &'static str {
        match (self, phase) {
            (Self::Mouse, GesturePhase::Start) => "onMouseDown",
            (Self::Mouse, GesturePhase::Move) => "onMouseMove",
            (Self::Mouse, GesturePhase::Stop) => "onMouseUp",
            (Self::Touch, GesturePhase::Start) => "onTouchStart",
            (Self::Touch, GesturePhase::Move) => "onTouchMove",
            (Self::Touch, GesturePhase::Stop) => "onTouchEnd",
            (Self::Pointer, GesturePhase::Start) => "onPointerDown",
            (Self::Pointer, GesturePhase::Move) => "onPointerMove",
            (Self::Pointer, GesturePhase::Stop) => "onPointerUp",
        }
    }

    /// Reverse lookup from a registered handler name
    #[must_use]
    pub fn from_handler_name(name: &str) -> Option<(Self, GesturePhase)> {
        for modality in Self::ALL {
            for phase in GesturePhase::ALL {
                if modality.handler_name(phase) == name {
                    return Some((modality, phase));
                }
            }
        }
        None
    }

    /// Reverse lookup from a concrete event name
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<(Self, GesturePhase)> {
        for modality in Self::ALL {
            for phase in GesturePhase::ALL {
                if modality.event_name(phase) == name {
                    return Some((modality, phase));
                }
            }
        }
        None
    }
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Convert a registered handler name to its concrete event name.
///
/// Equivalent to stripping the `on` prefix and lowercasing, but resolved
/// through the registry so unknown names surface as a typed error.
pub fn handler_name_to_event_name(name: &str) -> GestureResult<&'static str> {
    InputModality::from_handler_name(name)
        .map(|(modality, phase)| modality.event_name(phase))
        .ok_or_else(|| GestureError::UnknownHandlerName { name: name.into() })
}

/// Resolve a concrete event name back to its (modality, phase) pair
pub fn parse_event_name(name: &str) -> GestureResult<(InputModality, GesturePhase)> {
    InputModality::from_event_name(name)
        .ok_or_else(|| GestureError::UnknownEventName { name: name.into() })
}

/// Record keyed by exactly the three gesture phases.
///
/// Built once per test; holding one entry per phase is guaranteed by
/// construction, so dispatch maps can never have gaps or extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseMap<T> {
    start: T,
    moved: T,
    stop: T,
}

impl<T> PhaseMap<T> {
    /// Build a map by producing one entry per phase, in phase order
    pub fn build(mut entry: impl FnMut(GesturePhase) -> T) -> Self {
        Self {
            start: entry(GesturePhase::Start),
            moved: entry(GesturePhase::Move),
            stop: entry(GesturePhase::Stop),
        }
    }

    /// Entry for a phase
    #[must_use]
    pub const fn get(&self, phase: GesturePhase) -> &T {
        match phase {
            GesturePhase::Start => &self.start,
            GesturePhase::Move => &self.moved,
            GesturePhase::Stop => &self.stop,
        }
    }

    /// Entries paired with their phases, in press-hold-release order
    pub fn iter(&self) -> impl Iterator<Item = (GesturePhase, &T)> {
        GesturePhase::ALL.into_iter().map(move |phase| (phase, self.get(phase)))
    }

    /// Map every entry, preserving phase keys
    pub fn map<U>(self, mut f: impl FnMut(GesturePhase, T) -> U) -> PhaseMap<U> {
        PhaseMap {
            start: f(GesturePhase::Start, self.start),
            moved: f(GesturePhase::Move, self.moved),
            stop: f(GesturePhase::Stop, self.stop),
        }
    }
}
