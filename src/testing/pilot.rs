//! Pilot: programmatic interaction with a headless page.
//!
//! The `Pilot` wraps a [`Page`](crate::page::Page) and provides a high-level
//! API for simulating user input (taps, hovers, swipes, key presses, form
//! interaction), advancing virtual time, and locating nodes by selector.
//!
//! # Examples
//!
//! ```ignore
//! use vitrine::testing::Pilot;
//!
//! let mut pilot = Pilot::new(dom);
//! let next = pilot.find(".carousel-next").unwrap().unwrap();
//! pilot.tap(next);
//! ```

use std::time::Duration;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::input::{Key, UiEvent};
use crate::event::message::Envelope;
use crate::geometry::Point;
use crate::page::Page;
use crate::selector::SelectorError;

/// Reference touch origin for synthesized swipes, in device pixels.
const SWIPE_ORIGIN: Point = Point { x: 200.0, y: 200.0 };

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
pub struct Pilot {
    page: Page,
}

impl Pilot {
    /// Mount a page over `dom` and wrap it for driving.
    pub fn new(dom: Dom) -> Self {
        Self {
            page: Page::mount(dom),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a click on `target`.
    pub fn tap(&mut self, target: NodeId) {
        self.page.dispatch(UiEvent::Click { target });
    }

    /// Simulate the pointer entering `target`.
    pub fn hover(&mut self, target: NodeId) {
        self.page.dispatch(UiEvent::PointerEnter { target });
    }

    /// Simulate the pointer leaving `target`.
    pub fn unhover(&mut self, target: NodeId) {
        self.page.dispatch(UiEvent::PointerLeave { target });
    }

    /// Simulate a touch gesture on `target` with the given start-minus-end
    /// displacement: positive `dx` is a leftward swipe.
    pub fn swipe(&mut self, target: NodeId, dx: f32, dy: f32) {
        self.page.dispatch(UiEvent::TouchStart {
            target,
            at: SWIPE_ORIGIN,
        });
        self.page.dispatch(UiEvent::TouchEnd {
            target,
            at: Point::new(SWIPE_ORIGIN.x - dx, SWIPE_ORIGIN.y - dy),
        });
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) {
        self.page.dispatch(UiEvent::KeyPress { key });
    }

    /// Set a field's value and fire the input event, as typing does.
    pub fn type_value(&mut self, field: NodeId, value: &str) {
        if let Some(data) = self.page.dom_mut().get_mut(field) {
            data.set_attr("value", value);
        }
        self.page.dispatch(UiEvent::Input { target: field });
    }

    /// Simulate a field losing focus.
    pub fn blur(&mut self, field: NodeId) {
        self.page.dispatch(UiEvent::Blur { target: field });
    }

    /// Simulate a form submission.
    pub fn submit(&mut self, form: NodeId) {
        self.page.dispatch(UiEvent::Submit { target: form });
    }

    /// Simulate an element scrolling into view.
    pub fn scroll_into_view(&mut self, target: NodeId) {
        self.page.dispatch(UiEvent::Visible { target });
    }

    /// Advance virtual time, firing any due timers.
    pub fn advance(&mut self, delta: Duration) {
        self.page.advance(delta);
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Find the first node matching `selector`.
    pub fn find(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        self.page.dom().query_selector(selector)
    }

    /// Find all nodes matching `selector`.
    pub fn find_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.page.dom().query_selector_all(selector)
    }

    /// Drain every pending widget announcement.
    pub fn messages(&mut self) -> Vec<Envelope> {
        self.page.drain_messages()
    }

    /// Borrow the underlying page immutably.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Borrow the underlying page mutably.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }
}

// ===========================================================================
// Tests
// ===========================================================================
