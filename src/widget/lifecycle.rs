//! Mount lifecycle: which containers currently have a live controller.
//!
//! The `LifecycleTracker` records the containers controllers are mounted on
//! and accumulates `Mount`/`Unmount` events that the page (or a test) can
//! drain and inspect.

use std::collections::HashSet;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during the controller lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A controller was mounted on a container.
    Mount { container: NodeId },
    /// A controller was torn down and detached.
    Unmount { container: NodeId },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks mounted containers and accumulates lifecycle events.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    /// Containers that currently have a live controller.
    mounted: HashSet<NodeId>,
    /// Pending lifecycle events, in order of occurrence.
    pending: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// Create a new, empty lifecycle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a controller was mounted on `container`.
    ///
    /// If the container was already mounted, this is a no-op (no duplicate
    /// event).
    pub fn on_mount(&mut self, container: NodeId) {
        if self.mounted.insert(container) {
            self.pending.push(LifecycleEvent::Mount { container });
        }
    }

    /// Record that the controller on `container` was torn down.
    ///
    /// If the container was not mounted, this is a no-op.
    pub fn on_unmount(&mut self, container: NodeId) {
        if self.mounted.remove(&container) {
            self.pending.push(LifecycleEvent::Unmount { container });
        }
    }

    /// Check whether a container currently has a controller.
    pub fn is_mounted(&self, container: NodeId) -> bool {
        self.mounted.contains(&container)
    }

    /// The number of currently mounted containers.
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Drain and return all pending lifecycle events.
    pub fn pending_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Whether there are any pending events.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Clear all state (mounted containers and pending events).
    pub fn clear(&mut self) {
        self.mounted.clear();
        self.pending.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
