//! Page: discovery-and-construction, event routing, timer driving.
//!
//! `Page::mount` scans the DOM for widget container hooks and constructs one
//! controller per match, the way the site boots every component at load. At
//! runtime the page routes each [`UiEvent`] to its owning controller: targeted
//! events walk the bubble path from the target to the root looking for a
//! controller container, untargeted ones (keys, ticks) are offered around.
//! Timers are driven either synchronously from virtual time ([`Page::advance`])
//! or from real time via the async [`Page::run`] loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::handler::EventDispatcher;
use crate::event::input::UiEvent;
use crate::event::message::Envelope;
use crate::timer::TimerWheel;
use crate::widget::lifecycle::LifecycleTracker;
use crate::widget::traits::{Context, Controller};
use crate::widgets::{
    accordion, carousel, form, gallery, progress, tabs, Accordion, Carousel, FormValidator,
    Gallery, ProgressBar, Tabs,
};

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One mounted page: the element tree, the timer wheel, the announcement
/// queue, and every discovered controller.
pub struct Page {
    dom: Dom,
    timers: TimerWheel,
    dispatcher: EventDispatcher,
    controllers: Vec<Box<dyn Controller>>,
    lifecycle: LifecycleTracker,
}

impl Page {
    /// Mount a page over `dom`, constructing a controller for every container
    /// matching a widget hook class.
    ///
    /// Discovery order follows the site bootstrap: accordions, tab strips,
    /// progress bars, galleries, carousels, forms. Within one kind,
    /// containers mount in arena order.
    pub fn mount(dom: Dom) -> Self {
        let mut page = Self {
            dom,
            timers: TimerWheel::new(),
            dispatcher: EventDispatcher::new(),
            controllers: Vec::new(),
            lifecycle: LifecycleTracker::new(),
        };

        for container in page.dom.query_by_class(accordion::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(Accordion::mount(ctx, c)));
        }
        for container in page.dom.query_by_class(tabs::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(Tabs::mount(ctx, c)));
        }
        for container in page.dom.query_by_class(progress::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(ProgressBar::mount(ctx, c)));
        }
        for container in page.dom.query_by_class(gallery::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(Gallery::mount(ctx, c)));
        }
        for container in page.dom.query_by_class(carousel::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(Carousel::mount(ctx, c)));
        }
        for container in page.dom.query_by_class(form::CONTAINER_CLASS) {
            page.mount_with(container, |ctx, c| Box::new(FormValidator::mount(ctx, c)));
        }

        tracing::debug!(controllers = page.controllers.len(), "page mounted");
        page
    }

    fn mount_with(
        &mut self,
        container: NodeId,
        build: impl FnOnce(&mut Context<'_>, NodeId) -> Box<dyn Controller>,
    ) {
        let mut ctx = Context::new(&mut self.dom, &mut self.timers, &mut self.dispatcher);
        let controller = build(&mut ctx, container);
        self.lifecycle.on_mount(container);
        self.controllers.push(controller);
    }

    // ── Event routing ────────────────────────────────────────────────

    /// Route one event to its owning controller.
    ///
    /// Targeted events walk the bubble path; the first controller whose
    /// container lies on it gets the event, and the walk continues outward
    /// while controllers decline. Events nobody on the path claims are then
    /// offered to every controller in mount order, which is how overlay
    /// controls hanging outside any container find their owner. Untargeted
    /// events (keys, ticks) skip straight to the offer-around.
    pub fn dispatch(&mut self, event: UiEvent) {
        let mut controllers = std::mem::take(&mut self.controllers);

        let mut handled = false;
        if let Some(target) = event.target() {
            for node in EventDispatcher::bubble_path(&self.dom, target) {
                if let Some(controller) = controllers
                    .iter_mut()
                    .find(|controller| controller.container() == node)
                {
                    let mut ctx =
                        Context::new(&mut self.dom, &mut self.timers, &mut self.dispatcher);
                    if controller.handle_event(&event, &mut ctx) {
                        handled = true;
                        break;
                    }
                }
            }
        }
        if !handled {
            for controller in controllers.iter_mut() {
                let mut ctx = Context::new(&mut self.dom, &mut self.timers, &mut self.dispatcher);
                if controller.handle_event(&event, &mut ctx) {
                    break;
                }
            }
        }

        self.controllers = controllers;
    }

    /// Advance virtual time, dispatching a tick for every timer that fired.
    pub fn advance(&mut self, delta: Duration) {
        for timer in self.timers.advance(delta) {
            self.dispatch(UiEvent::Tick { timer });
        }
    }

    /// Tear down every controller: timers cancelled, overlays removed,
    /// routing cleared.
    pub fn teardown(&mut self) {
        let mut controllers = std::mem::take(&mut self.controllers);
        for controller in controllers.iter_mut() {
            let mut ctx = Context::new(&mut self.dom, &mut self.timers, &mut self.dispatcher);
            controller.teardown(&mut ctx);
            self.lifecycle.on_unmount(controller.container());
        }
    }

    // ── Async driver ─────────────────────────────────────────────────

    /// Drive the page from real time: dispatch events arriving on `events`
    /// and fire wheel deadlines as wall-clock time reaches them.
    ///
    /// Returns when the event channel closes. Elapsed real time is folded
    /// into the wheel before every dispatch, so event handling and ticks stay
    /// serialized on one task.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        let mut last = Instant::now();
        loop {
            let wait = self
                .timers
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(self.timers.now()));

            tokio::select! {
                received = events.recv() => {
                    let now = Instant::now();
                    self.advance(now - last);
                    last = now;
                    match received {
                        Some(event) => self.dispatch(event),
                        None => break,
                    }
                }
                _ = async {
                    match wait {
                        Some(wait) => sleep(wait).await,
                        None => std::future::pending().await,
                    }
                } => {
                    let now = Instant::now();
                    self.advance(now - last);
                    last = now;
                }
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The element tree.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Mutable access to the element tree.
    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// The timer wheel.
    pub fn timers(&self) -> &TimerWheel {
        &self.timers
    }

    /// The mount lifecycle tracker.
    pub fn lifecycle_mut(&mut self) -> &mut LifecycleTracker {
        &mut self.lifecycle
    }

    /// Number of mounted controllers.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Drain every pending widget announcement.
    pub fn drain_messages(&mut self) -> Vec<Envelope> {
        self.dispatcher.drain()
    }

    /// Borrow the controller mounted on `container`, downcast to its concrete
    /// type.
    pub fn controller<T: Controller + 'static>(&self, container: NodeId) -> Option<&T> {
        self.controllers
            .iter()
            .find(|controller| controller.container() == container)
            .and_then(|controller| controller.as_any().downcast_ref::<T>())
    }

    /// Mutably borrow the controller mounted on `container`, downcast to its
    /// concrete type.
    pub fn controller_mut<T: Controller + 'static>(&mut self, container: NodeId) -> Option<&mut T> {
        self.controllers
            .iter_mut()
            .find(|controller| controller.container() == container)
            .and_then(|controller| controller.as_any_mut().downcast_mut::<T>())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
