//! Tabs controller: index-aligned button/content pairs.

use std::any::Any;

use crate::dom::node::NodeId;
use crate::event::input::UiEvent;
use crate::event::message::{Envelope, TabChanged};
use crate::widget::traits::{Context, Controller};

use super::ACTIVE_CLASS;

/// Class hook that marks a container as a tab strip.
pub const CONTAINER_CLASS: &str = "tabs";
/// Class marking a tab button child.
pub const BUTTON_CLASS: &str = "tab-button";
/// Class marking a tab content child.
pub const CONTENT_CLASS: &str = "tab-content";

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Controller for one mounted tab strip.
///
/// Buttons and contents are enumerated once at mount and paired by position.
/// Tab 0 activates at mount when any buttons exist.
pub struct Tabs {
    container: NodeId,
    buttons: Vec<NodeId>,
    contents: Vec<NodeId>,
    current: Option<usize>,
}

impl Tabs {
    /// Mount a tab strip on `container`.
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let buttons = ctx.dom.children_with_class(container, BUTTON_CLASS);
        let contents = ctx.dom.children_with_class(container, CONTENT_CLASS);

        let mut tabs = Self {
            container,
            buttons,
            contents,
            current: None,
        };
        if !tabs.buttons.is_empty() {
            tabs.switch_tab(0, ctx);
        }
        tabs
    }

    /// Activate the button/content pair at `index`, deactivating all others.
    ///
    /// Out-of-range indices are a guarded no-op. A content list shorter than
    /// the button list leaves the orphaned buttons switchable with nothing to
    /// reveal, matching incomplete markup.
    pub fn switch_tab(&mut self, index: usize, ctx: &mut Context<'_>) {
        if index >= self.buttons.len() {
            return;
        }

        for &node in self.buttons.iter().chain(&self.contents) {
            if let Some(data) = ctx.dom.get_mut(node) {
                data.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(data) = ctx.dom.get_mut(self.buttons[index]) {
            data.add_class(ACTIVE_CLASS);
        }
        if let Some(&content) = self.contents.get(index) {
            if let Some(data) = ctx.dom.get_mut(content) {
                data.add_class(ACTIVE_CLASS);
            }
        }

        self.current = Some(index);
        ctx.messages
            .push(Envelope::new(TabChanged { index }, self.container));
    }

    /// Index of the active tab, or `None` when no buttons exist.
    pub fn current_tab(&self) -> Option<usize> {
        self.current
    }

    /// Number of tab buttons captured at mount.
    pub fn tab_count(&self) -> usize {
        self.buttons.len()
    }
}

impl Controller for Tabs {
    fn widget_type(&self) -> &str {
        "Tabs"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Click { target } => {
                match self.buttons.iter().position(|&button| button == target) {
                    Some(index) => {
                        self.switch_tab(index, ctx);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn teardown(&mut self, _ctx: &mut Context<'_>) {}

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
