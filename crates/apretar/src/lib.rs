//! Apretar: test-support toolkit for long-press gesture detection
//!
//! Apretar (Spanish: "to press") synthesizes mouse, touch, and pointer
//! events so a test can drive a press/move/release sequence against a
//! simulated element and assert the gesture handlers under test fired
//! correctly, without real device input.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     APRETAR Architecture                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌──────────────┐    ┌────────────────┐       │
//! │   │ Modality   │    │ Event        │    │ Dispatch maps  │       │
//! │   │ registry   │───►│ synthesizers │───►│ (per phase:    │       │
//! │   │ (names)    │    │ (fixtures)   │    │  fire/handle)  │       │
//! │   └────────────┘    └──────────────┘    └───────┬────────┘       │
//! │                                                 ▼                │
//! │                                         ┌────────────────┐       │
//! │                                         │ TestElement    │       │
//! │                                         │ (records fired │       │
//! │                                         │  events)       │       │
//! │                                         └────────────────┘       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use apretar::{dom_firing_map, GesturePhase, InputModality, TestElement};
//!
//! let button = TestElement::new("button");
//! let firing = dom_firing_map(InputModality::Pointer, &button);
//!
//! firing.get(GesturePhase::Start).fire(10.0, 20.0);
//! firing.get(GesturePhase::Stop).fire(10.0, 20.0);
//!
//! assert_eq!(button.events_named("pointerdown").len(), 1);
//! assert_eq!(button.events_named("pointerup").len(), 1);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

mod dom;
mod event;
mod gesture;
mod modality;
mod result;

pub use dom::TestElement;
pub use event::{
    positioned_event, positioned_event_factory, EventCreator, NativeEvent, RawEvent,
    SyntheticEvent, TouchPoint,
};
pub use gesture::{
    dom_firing_map, handlers_map, noop_handler, EventFirer, GestureHandler, HandlerSet,
};
pub use modality::{
    handler_name_to_event_name, parse_event_name, GesturePhase, InputModality, PhaseMap,
};
pub use result::{GestureError, GestureResult};
