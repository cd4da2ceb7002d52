//! Carousel controller: auto-play, touch-swipe, indicator synchronization.
//!
//! The carousel owns a fixed slide collection, a current-index cursor, an
//! optional auto-advance timer, and a swipe detector. `show_slide` is the
//! single authoritative state transition — navigation buttons, dots, swipes,
//! and timer ticks all funnel through it, so the one-active-slide invariant
//! holds on every path.

use std::any::Any;
use std::time::Duration;

use crate::dom::node::{NodeData, NodeId};
use crate::event::gesture::{Swipe, SwipeDetector};
use crate::event::input::UiEvent;
use crate::event::message::{Envelope, SlideChanged};
use crate::timer::{TimerId, TimerWheel};
use crate::widget::traits::{Context, Controller};

use super::ACTIVE_CLASS;

/// Class hook that marks a container as a carousel.
pub const CONTAINER_CLASS: &str = "carousel";
/// Class marking a slide child of the container.
pub const SLIDE_CLASS: &str = "carousel-slide";

/// Auto-advance interval used when the `interval` attribute is absent or
/// malformed.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Controller for one mounted carousel container.
///
/// All element handles are captured at mount; nothing is re-queried. With
/// zero slides the controller is inert: no controls exist, no timer runs,
/// and every navigation call is a no-op.
pub struct Carousel {
    container: NodeId,
    slides: Vec<NodeId>,
    dots: Vec<NodeId>,
    prev_btn: Option<NodeId>,
    next_btn: Option<NodeId>,
    current: usize,
    /// Autoplay configuration flag, read once at mount.
    auto_play: bool,
    interval: Duration,
    /// Present iff auto-advance is currently active.
    timer: Option<TimerId>,
    swipe: SwipeDetector,
}

impl Carousel {
    /// Mount a carousel on `container`.
    ///
    /// Enumerates direct children carrying [`SLIDE_CLASS`]. When slides
    /// exist, prev/next buttons and one dot per slide are created under the
    /// container, slide 0 is activated, and auto-advance starts if the
    /// container's `autoplay` attribute is `"true"` (interval from the
    /// `interval` attribute, in milliseconds).
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let slides = ctx.dom.children_with_class(container, SLIDE_CLASS);

        let (auto_play, interval) = match ctx.dom.get(container) {
            Some(data) => (
                data.attr_is_true("autoplay"),
                data.attr("interval")
                    .and_then(|raw| raw.parse::<u64>().ok())
                    .filter(|&ms| ms > 0)
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_INTERVAL),
            ),
            None => (false, DEFAULT_INTERVAL),
        };

        let mut carousel = Self {
            container,
            slides,
            dots: Vec::new(),
            prev_btn: None,
            next_btn: None,
            current: 0,
            auto_play,
            interval,
            timer: None,
            swipe: SwipeDetector::new(),
        };

        if carousel.slides.is_empty() {
            tracing::debug!(?container, "carousel mounted inert: no slides");
            return carousel;
        }

        carousel.create_controls(ctx);
        carousel.show_slide(0, ctx);
        if carousel.auto_play {
            carousel.start_auto_play(ctx.timers);
        }
        tracing::debug!(
            ?container,
            slides = carousel.slides.len(),
            auto_play = carousel.auto_play,
            "carousel mounted"
        );
        carousel
    }

    fn create_controls(&mut self, ctx: &mut Context<'_>) {
        self.prev_btn = Some(ctx.dom.insert_child(
            self.container,
            NodeData::new("Button").with_class("carousel-prev").with_text("\u{2039}"),
        ));
        self.next_btn = Some(ctx.dom.insert_child(
            self.container,
            NodeData::new("Button").with_class("carousel-next").with_text("\u{203a}"),
        ));

        let dots_box = ctx
            .dom
            .insert_child(self.container, NodeData::new("Div").with_class("carousel-dots"));
        self.dots = self
            .slides
            .iter()
            .map(|_| {
                ctx.dom
                    .insert_child(dots_box, NodeData::new("Button").with_class("carousel-dot"))
            })
            .collect();
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Activate `slides[index]` and its aligned dot, deactivating all others.
    ///
    /// Out-of-range indices are a guarded no-op; wraparound belongs to
    /// next/prev exclusively.
    pub fn show_slide(&mut self, index: usize, ctx: &mut Context<'_>) {
        if index >= self.slides.len() {
            return;
        }

        for &slide in &self.slides {
            if let Some(data) = ctx.dom.get_mut(slide) {
                data.remove_class(ACTIVE_CLASS);
            }
        }
        for &dot in &self.dots {
            if let Some(data) = ctx.dom.get_mut(dot) {
                data.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(data) = ctx.dom.get_mut(self.slides[index]) {
            data.add_class(ACTIVE_CLASS);
        }
        if let Some(data) = ctx.dom.get_mut(self.dots[index]) {
            data.add_class(ACTIVE_CLASS);
        }

        self.current = index;
        ctx.messages
            .push(Envelope::new(SlideChanged { index }, self.container));
    }

    /// Advance to the next slide, wrapping circularly.
    pub fn next_slide(&mut self, ctx: &mut Context<'_>) {
        if self.slides.is_empty() {
            return;
        }
        let next = (self.current + 1) % self.slides.len();
        self.show_slide(next, ctx);
    }

    /// Go back to the previous slide, wrapping circularly.
    pub fn prev_slide(&mut self, ctx: &mut Context<'_>) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len();
        let prev = (self.current + len - 1) % len;
        self.show_slide(prev, ctx);
    }

    // ── Auto-advance ─────────────────────────────────────────────────

    /// Start the auto-advance timer.
    ///
    /// Idempotent: a second call while a timer is active keeps the existing
    /// cadence and schedules nothing.
    pub fn start_auto_play(&mut self, timers: &mut TimerWheel) {
        if self.timer.is_some() || self.slides.is_empty() {
            return;
        }
        self.timer = Some(timers.schedule_repeating(self.interval));
        tracing::debug!(container = ?self.container, interval = ?self.interval, "auto-play started");
    }

    /// Cancel the auto-advance timer. No-op if none is running.
    pub fn stop_auto_play(&mut self, timers: &mut TimerWheel) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
            tracing::debug!(container = ?self.container, "auto-play stopped");
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Index of the active slide, or `None` for an inert (zero-slide)
    /// carousel.
    pub fn current_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.current)
    }

    /// Number of slides captured at mount.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Whether the auto-advance timer is currently running.
    pub fn is_auto_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// The configured auto-advance interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The dot handles, index-aligned with the slides.
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    /// Whether `target` is the container or lies inside it.
    fn owns_target(&self, ctx: &Context<'_>, target: NodeId) -> bool {
        target == self.container || ctx.dom.ancestors(target).contains(&self.container)
    }
}

impl Controller for Carousel {
    fn widget_type(&self) -> &str {
        "Carousel"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Click { target } => {
                if self.prev_btn == Some(target) {
                    self.prev_slide(ctx);
                } else if self.next_btn == Some(target) {
                    self.next_slide(ctx);
                } else if let Some(index) = self.dots.iter().position(|&dot| dot == target) {
                    self.show_slide(index, ctx);
                } else {
                    return false;
                }
                true
            }
            UiEvent::PointerEnter { target } if target == self.container => {
                self.stop_auto_play(ctx.timers);
                true
            }
            UiEvent::PointerLeave { target } if target == self.container => {
                // Hover pause is never sticky: leaving resumes, but only when
                // the configuration flag allows auto-play at all.
                if self.auto_play {
                    self.start_auto_play(ctx.timers);
                }
                true
            }
            UiEvent::TouchStart { target, at } if self.owns_target(ctx, target) => {
                self.swipe.begin(at);
                true
            }
            UiEvent::TouchEnd { target, at } if self.owns_target(ctx, target) => {
                match self.swipe.end(at) {
                    Some(Swipe::Left) => self.next_slide(ctx),
                    Some(Swipe::Right) => self.prev_slide(ctx),
                    None => {}
                }
                true
            }
            UiEvent::Tick { timer } if self.timer == Some(timer) => {
                self.next_slide(ctx);
                true
            }
            _ => false,
        }
    }

    fn teardown(&mut self, ctx: &mut Context<'_>) {
        self.stop_auto_play(ctx.timers);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::tree::Dom;
    use crate::event::handler::EventDispatcher;
    use crate::geometry::Point;

    struct Fixture {
        dom: Dom,
        timers: TimerWheel,
        messages: EventDispatcher,
        container: NodeId,
        slides: Vec<NodeId>,
    }

    impl Fixture {
        fn new(slide_count: usize, attrs: &[(&str, &str)]) -> Self {
            let mut dom = Dom::new();
            let root = dom.insert(NodeData::new("Body"));
            let mut data = NodeData::new("Section").with_class(CONTAINER_CLASS);
            for (name, value) in attrs {
                data = data.with_attr(*name, *value);
            }
            let container = dom.insert_child(root, data);
            let slides = (0..slide_count)
                .map(|_| dom.insert_child(container, NodeData::new("Div").with_class(SLIDE_CLASS)))
                .collect();
            Self {
                dom,
                timers: TimerWheel::new(),
                messages: EventDispatcher::new(),
                container,
                slides,
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context::new(&mut self.dom, &mut self.timers, &mut self.messages)
        }

        fn mount(&mut self) -> Carousel {
            let container = self.container;
            let mut ctx = self.ctx();
            Carousel::mount(&mut ctx, container)
        }

        /// Indices of slides currently carrying the active class.
        fn active_slides(&self) -> Vec<usize> {
            self.slides
                .iter()
                .enumerate()
                .filter(|(_, &slide)| self.dom.get(slide).unwrap().has_class(ACTIVE_CLASS))
                .map(|(i, _)| i)
                .collect()
        }

        /// Indices of dots currently carrying the active class.
        fn active_dots(&self, carousel: &Carousel) -> Vec<usize> {
            carousel
                .dots()
                .iter()
                .enumerate()
                .filter(|(_, &dot)| self.dom.get(dot).unwrap().has_class(ACTIVE_CLASS))
                .map(|(i, _)| i)
                .collect()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn mount_activates_slide_zero() {
        let mut fx = Fixture::new(3, &[]);
        let carousel = fx.mount();
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(fx.active_slides(), vec![0]);
        assert_eq!(fx.active_dots(&carousel), vec![0]);
    }

    #[test]
    fn mount_creates_one_dot_per_slide() {
        let mut fx = Fixture::new(4, &[]);
        let carousel = fx.mount();
        assert_eq!(carousel.dots().len(), 4);
        assert_eq!(fx.dom.query_by_class("carousel-dot").len(), 4);
        assert_eq!(fx.dom.query_by_class("carousel-prev").len(), 1);
        assert_eq!(fx.dom.query_by_class("carousel-next").len(), 1);
    }

    #[test]
    fn mount_without_autoplay_starts_no_timer() {
        let mut fx = Fixture::new(3, &[]);
        let carousel = fx.mount();
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.is_empty());
    }

    #[test]
    fn mount_with_autoplay_starts_timer() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let carousel = fx.mount();
        assert!(carousel.is_auto_playing());
        assert_eq!(fx.timers.len(), 1);
        assert_eq!(carousel.interval(), DEFAULT_INTERVAL);
    }

    #[test]
    fn mount_reads_interval_attribute() {
        let mut fx = Fixture::new(2, &[("autoplay", "true"), ("interval", "3000")]);
        let carousel = fx.mount();
        assert_eq!(carousel.interval(), ms(3000));
        assert_eq!(fx.timers.next_deadline(), Some(ms(3000)));
    }

    #[test]
    fn malformed_interval_falls_back_to_default() {
        for bad in ["fast", "", "-200", "0"] {
            let mut fx = Fixture::new(2, &[("autoplay", "true"), ("interval", bad)]);
            let carousel = fx.mount();
            assert_eq!(carousel.interval(), DEFAULT_INTERVAL, "interval {bad:?}");
        }
    }

    #[test]
    fn autoplay_flag_must_be_literal_true() {
        let mut fx = Fixture::new(2, &[("autoplay", "yes")]);
        let carousel = fx.mount();
        assert!(!carousel.is_auto_playing());
    }

    // ── Zero slides ──────────────────────────────────────────────────

    #[test]
    fn zero_slides_mounts_inert() {
        let mut fx = Fixture::new(0, &[("autoplay", "true")]);
        let carousel = fx.mount();
        assert_eq!(carousel.current_index(), None);
        assert_eq!(carousel.slide_count(), 0);
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.is_empty());
        // No controls were created.
        assert!(fx.dom.query_by_class("carousel-dot").is_empty());
        assert!(fx.dom.query_by_class("carousel-prev").is_empty());
        assert!(fx.dom.query_by_class("carousel-dots").is_empty());
    }

    #[test]
    fn zero_slides_navigation_is_noop() {
        let mut fx = Fixture::new(0, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.next_slide(&mut ctx);
        carousel.prev_slide(&mut ctx);
        carousel.show_slide(0, &mut ctx);
        assert_eq!(carousel.current_index(), None);
    }

    // ── show_slide ───────────────────────────────────────────────────

    #[test]
    fn show_slide_moves_active_marker() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.show_slide(2, &mut ctx);
        assert_eq!(carousel.current_index(), Some(2));
        assert_eq!(fx.active_slides(), vec![2]);
        assert_eq!(fx.active_dots(&carousel), vec![2]);
    }

    #[test]
    fn exactly_one_active_after_any_show_slide() {
        let mut fx = Fixture::new(4, &[]);
        let mut carousel = fx.mount();
        for index in [3, 1, 1, 0, 2] {
            let mut ctx = fx.ctx();
            carousel.show_slide(index, &mut ctx);
            assert_eq!(fx.active_slides().len(), 1);
            assert_eq!(fx.active_dots(&carousel).len(), 1);
            assert_eq!(fx.active_slides(), fx.active_dots(&carousel));
        }
    }

    #[test]
    fn show_slide_out_of_range_is_noop() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.show_slide(1, &mut ctx);
        carousel.show_slide(3, &mut ctx);
        carousel.show_slide(usize::MAX, &mut ctx);
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(fx.active_slides(), vec![1]);
    }

    #[test]
    fn show_slide_announces_change() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        fx.messages.drain(); // drop the mount-time announcement
        let mut ctx = fx.ctx();
        carousel.show_slide(2, &mut ctx);
        let messages = fx.messages.drain();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].downcast_ref::<SlideChanged>().unwrap().index,
            2
        );
        assert_eq!(messages[0].source, fx.container);
    }

    // ── next/prev wraparound ─────────────────────────────────────────

    #[test]
    fn next_wraps_at_end() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.next_slide(&mut ctx);
        carousel.next_slide(&mut ctx);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.next_slide(&mut ctx);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn prev_wraps_at_start() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.prev_slide(&mut ctx);
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        for step in 0..50 {
            if step % 3 == 0 {
                carousel.prev_slide(&mut ctx);
            } else {
                carousel.next_slide(&mut ctx);
            }
            assert!(carousel.current_index().unwrap() < 3);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut fx = Fixture::new(4, &[]);
        let mut carousel = fx.mount();
        for start in 0..4 {
            let mut ctx = fx.ctx();
            carousel.show_slide(start, &mut ctx);
            carousel.next_slide(&mut ctx);
            carousel.prev_slide(&mut ctx);
            assert_eq!(carousel.current_index(), Some(start));
            carousel.prev_slide(&mut ctx);
            carousel.next_slide(&mut ctx);
            assert_eq!(carousel.current_index(), Some(start));
        }
    }

    #[test]
    fn single_slide_wraps_to_itself() {
        let mut fx = Fixture::new(1, &[]);
        let mut carousel = fx.mount();
        let mut ctx = fx.ctx();
        carousel.next_slide(&mut ctx);
        assert_eq!(carousel.current_index(), Some(0));
        carousel.prev_slide(&mut ctx);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(fx.active_slides(), vec![0]);
    }

    // ── Auto-advance ─────────────────────────────────────────────────

    #[test]
    fn ticks_advance_by_k_mod_n() {
        let mut fx = Fixture::new(3, &[("autoplay", "true"), ("interval", "1000")]);
        let mut carousel = fx.mount();
        for fired in fx.timers.advance(ms(4000)) {
            let mut ctx = Context::new(&mut fx.dom, &mut fx.timers, &mut fx.messages);
            carousel.handle_event(&UiEvent::Tick { timer: fired }, &mut ctx);
        }
        // 4 ticks on 3 slides: 0 -> 1 -> 2 -> 0 -> 1.
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn stop_auto_play_prevents_advancement() {
        let mut fx = Fixture::new(3, &[("autoplay", "true"), ("interval", "1000")]);
        let mut carousel = fx.mount();
        carousel.stop_auto_play(&mut fx.timers);
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.advance(ms(60_000)).is_empty());
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn stop_auto_play_twice_is_noop() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let mut carousel = fx.mount();
        carousel.stop_auto_play(&mut fx.timers);
        carousel.stop_auto_play(&mut fx.timers);
        assert!(fx.timers.is_empty());
    }

    #[test]
    fn double_start_does_not_leak_a_second_timer() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let mut carousel = fx.mount();
        carousel.start_auto_play(&mut fx.timers);
        carousel.start_auto_play(&mut fx.timers);
        assert_eq!(fx.timers.len(), 1);
    }

    #[test]
    fn foreign_tick_is_ignored() {
        let mut fx = Fixture::new(3, &[("autoplay", "true"), ("interval", "1000")]);
        let mut carousel = fx.mount();
        let foreign = fx.timers.schedule_repeating(ms(500));
        let mut ctx = fx.ctx();
        assert!(!carousel.handle_event(&UiEvent::Tick { timer: foreign }, &mut ctx));
        assert_eq!(carousel.current_index(), Some(0));
    }

    // ── Hover pause/resume ───────────────────────────────────────────

    #[test]
    fn pointer_enter_stops_timer() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let mut carousel = fx.mount();
        let container = fx.container;
        let mut ctx = fx.ctx();
        assert!(carousel.handle_event(&UiEvent::PointerEnter { target: container }, &mut ctx));
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.is_empty());
    }

    #[test]
    fn pointer_leave_resumes_when_autoplay_configured() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let mut carousel = fx.mount();
        let container = fx.container;
        let mut ctx = fx.ctx();
        carousel.handle_event(&UiEvent::PointerEnter { target: container }, &mut ctx);
        carousel.handle_event(&UiEvent::PointerLeave { target: container }, &mut ctx);
        assert!(carousel.is_auto_playing());
        assert_eq!(fx.timers.len(), 1);
    }

    #[test]
    fn pointer_leave_without_autoplay_flag_stays_stopped() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let container = fx.container;
        let mut ctx = fx.ctx();
        carousel.handle_event(&UiEvent::PointerEnter { target: container }, &mut ctx);
        carousel.handle_event(&UiEvent::PointerLeave { target: container }, &mut ctx);
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.is_empty());
    }

    // ── Gestures ─────────────────────────────────────────────────────

    fn swipe(fx: &mut Fixture, carousel: &mut Carousel, dx: f32, dy: f32) {
        let container = fx.container;
        let mut ctx = fx.ctx();
        // deltaX is start minus end, so the end point is start - delta.
        carousel.handle_event(
            &UiEvent::TouchStart {
                target: container,
                at: Point::new(200.0, 200.0),
            },
            &mut ctx,
        );
        carousel.handle_event(
            &UiEvent::TouchEnd {
                target: container,
                at: Point::new(200.0 - dx, 200.0 - dy),
            },
            &mut ctx,
        );
    }

    #[test]
    fn left_swipe_advances() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        swipe(&mut fx, &mut carousel, 80.0, 0.0);
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn right_swipe_goes_back() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        swipe(&mut fx, &mut carousel, -80.0, 0.0);
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn short_swipe_does_not_navigate() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        swipe(&mut fx, &mut carousel, 30.0, 0.0);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn vertical_dominant_swipe_does_not_navigate() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        swipe(&mut fx, &mut carousel, 80.0, 90.0);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn swipe_navigates_exactly_once() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        fx.messages.drain();
        swipe(&mut fx, &mut carousel, 80.0, 0.0);
        assert_eq!(fx.messages.drain().len(), 1);
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn next_and_prev_buttons_navigate() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let next = carousel.next_btn.unwrap();
        let prev = carousel.prev_btn.unwrap();
        let mut ctx = fx.ctx();
        assert!(carousel.handle_event(&UiEvent::Click { target: next }, &mut ctx));
        assert_eq!(carousel.current_index(), Some(1));
        assert!(carousel.handle_event(&UiEvent::Click { target: prev }, &mut ctx));
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn dot_click_jumps_directly() {
        let mut fx = Fixture::new(4, &[]);
        let mut carousel = fx.mount();
        let dot = carousel.dots()[3];
        let mut ctx = fx.ctx();
        assert!(carousel.handle_event(&UiEvent::Click { target: dot }, &mut ctx));
        assert_eq!(carousel.current_index(), Some(3));
    }

    #[test]
    fn unrelated_click_is_not_claimed() {
        let mut fx = Fixture::new(3, &[]);
        let mut carousel = fx.mount();
        let slide = fx.slides[1];
        let mut ctx = fx.ctx();
        assert!(!carousel.handle_event(&UiEvent::Click { target: slide }, &mut ctx));
        assert_eq!(carousel.current_index(), Some(0));
    }

    // ── Teardown ─────────────────────────────────────────────────────

    #[test]
    fn teardown_cancels_timer() {
        let mut fx = Fixture::new(3, &[("autoplay", "true")]);
        let mut carousel = fx.mount();
        assert_eq!(fx.timers.len(), 1);
        let mut ctx = fx.ctx();
        carousel.teardown(&mut ctx);
        assert!(!carousel.is_auto_playing());
        assert!(fx.timers.is_empty());
    }

    #[test]
    fn two_carousels_own_independent_timers() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Body"));
        let mut timers = TimerWheel::new();
        let mut messages = EventDispatcher::new();

        let mut mounted = Vec::new();
        for _ in 0..2 {
            let container = dom.insert_child(
                root,
                NodeData::new("Section")
                    .with_class(CONTAINER_CLASS)
                    .with_attr("autoplay", "true")
                    .with_attr("interval", "1000"),
            );
            for _ in 0..3 {
                dom.insert_child(container, NodeData::new("Div").with_class(SLIDE_CLASS));
            }
            let mut ctx = Context::new(&mut dom, &mut timers, &mut messages);
            mounted.push(Carousel::mount(&mut ctx, container));
        }

        // Stopping the first leaves the second running.
        mounted[0].stop_auto_play(&mut timers);
        assert_eq!(timers.len(), 1);
        assert!(mounted[1].is_auto_playing());

        let fired = timers.advance(ms(1000));
        for timer in fired {
            let mut ctx = Context::new(&mut dom, &mut timers, &mut messages);
            for carousel in &mut mounted {
                carousel.handle_event(&UiEvent::Tick { timer }, &mut ctx);
            }
        }
        assert_eq!(mounted[0].current_index(), Some(0));
        assert_eq!(mounted[1].current_index(), Some(1));
    }
}
