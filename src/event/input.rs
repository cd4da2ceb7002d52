//! Input event types, decoupled from any host platform.
//!
//! Defines [`UiEvent`], the vocabulary of page interaction the controllers
//! understand. Events carry the target [`NodeId`] they landed on (where one
//! exists); the page routes them to controllers along the bubble path.

use crate::dom::node::NodeId;
use crate::geometry::Point;
use crate::timer::TimerId;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, named after the DOM `key` values the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

// ---------------------------------------------------------------------------
// UiEvent
// ---------------------------------------------------------------------------

/// A single page interaction.
///
/// All controller state changes happen inside the handling of one of these;
/// no two events for the same page overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Primary activation of an element (button, dot, item, backdrop).
    Click { target: NodeId },
    /// Pointer entered an element's bounds.
    PointerEnter { target: NodeId },
    /// Pointer left an element's bounds.
    PointerLeave { target: NodeId },
    /// A touch contact began.
    TouchStart { target: NodeId, at: Point },
    /// A touch contact ended.
    TouchEnd { target: NodeId, at: Point },
    /// A key was pressed. Not targeted; offered to every controller.
    KeyPress { key: Key },
    /// A form field's value changed.
    Input { target: NodeId },
    /// A form field lost focus.
    Blur { target: NodeId },
    /// A form was submitted.
    Submit { target: NodeId },
    /// An element scrolled into the viewport for the first time.
    Visible { target: NodeId },
    /// A repeating timer fired. Routed by handle ownership.
    Tick { timer: TimerId },
}

impl UiEvent {
    /// The node this event landed on, if it is a targeted event.
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            UiEvent::Click { target }
            | UiEvent::PointerEnter { target }
            | UiEvent::PointerLeave { target }
            | UiEvent::TouchStart { target, .. }
            | UiEvent::TouchEnd { target, .. }
            | UiEvent::Input { target }
            | UiEvent::Blur { target }
            | UiEvent::Submit { target }
            | UiEvent::Visible { target } => Some(target),
            UiEvent::KeyPress { .. } | UiEvent::Tick { .. } => None,
        }
    }
}
