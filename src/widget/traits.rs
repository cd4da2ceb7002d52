//! Controller trait: the seam between the page and each widget.
//!
//! A controller owns the behavior of one mounted container. It captures its
//! element handles once at mount and afterwards only reacts to [`UiEvent`]s
//! the page routes to it, mutating the DOM and its own state through the
//! borrowed [`Context`]. The trait is object-safe; `as_any` allows tests and
//! page code to downcast to the concrete widget.

use std::any::Any;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::handler::EventDispatcher;
use crate::event::input::UiEvent;
use crate::timer::TimerWheel;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// The injected capabilities a controller works through: the element tree,
/// the timer service, and the announcement queue.
///
/// Controllers never own these. The page lends them out for the duration of
/// one mount, event, or teardown call, which keeps every controller testable
/// without a rendering surface or a real clock.
pub struct Context<'a> {
    pub dom: &'a mut Dom,
    pub timers: &'a mut TimerWheel,
    pub messages: &'a mut EventDispatcher,
}

impl<'a> Context<'a> {
    /// Bundle borrowed capabilities into a context.
    pub fn new(
        dom: &'a mut Dom,
        timers: &'a mut TimerWheel,
        messages: &'a mut EventDispatcher,
    ) -> Self {
        Self {
            dom,
            timers,
            messages,
        }
    }
}

// ---------------------------------------------------------------------------
// Controller trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widget controllers.
pub trait Controller {
    /// The widget kind name (e.g. "Carousel", "Tabs").
    fn widget_type(&self) -> &str;

    /// The container node this controller was mounted on.
    fn container(&self) -> NodeId;

    /// React to an event the page routed here.
    ///
    /// Returns `true` when the event was consumed; the page stops offering a
    /// targeted event to further controllers once one claims it.
    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool;

    /// Release owned resources: cancel timers, drop overlay subtrees.
    ///
    /// Called once when the page tears down; the controller is detached from
    /// event routing afterwards.
    fn teardown(&mut self, ctx: &mut Context<'_>);

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
