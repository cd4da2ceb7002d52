//! # vitrine
//!
//! A headless, testable page-widget engine: the interactive components of a
//! marketing site — carousel, tabs, accordion, gallery lightbox, progress
//! bars, form validation — re-expressed as controllers over injected
//! capabilities instead of listeners over a live document.
//!
//! Widgets never touch a platform DOM or a platform clock. They work through
//! an element arena ([`dom`]), a deterministic timer wheel ([`timer`]), and
//! an announcement queue ([`event`]), which makes every behavior — auto-play
//! cadence, swipe thresholds, one-active-slide invariants — drivable and
//! assertable from plain tests.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed element arena with class/attribute mutation
//!   and queries
//! - **[`selector`]** — Tokenizer + parser for the page-hook selector language
//! - **[`event`]** — Input events, swipe classification, announcement
//!   envelopes, bubble paths
//! - **[`timer`]** — Repeating-timer wheel, the injected time capability
//! - **[`widget`]** — The `Controller` trait and mount lifecycle tracking
//! - **[`widgets`]** — Built-in controllers: Carousel, Tabs, Accordion,
//!   Progress, Gallery, Form
//! - **[`page`]** — Discovery-and-construction, event routing, the async
//!   real-time driver
//! - **[`geometry`]** — Point/Delta primitives for gesture math
//! - **[`testing`]** — Headless pilot and DOM outline snapshots

// Foundation
pub mod geometry;

// Core systems
pub mod dom;
pub mod selector;
pub mod timer;

// Events
pub mod event;

// Widget system
pub mod widget;
pub mod widgets;

// Page
pub mod page;

// Test support
pub mod testing;
