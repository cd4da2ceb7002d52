//! Progress bar controller: fill-on-reveal and direct percentage updates.

use std::any::Any;

use crate::dom::node::NodeId;
use crate::event::input::UiEvent;
use crate::widget::traits::{Context, Controller};

/// Class hook that marks a container as a progress widget.
pub const CONTAINER_CLASS: &str = "progress";
/// Class marking the fill bar inside the container.
pub const BAR_CLASS: &str = "progress-bar";

/// Attribute on the bar naming the target width, e.g. `"80%"`.
pub const TARGET_ATTR: &str = "width";
/// Attribute the controller writes the live fill width to.
pub const FILL_ATTR: &str = "style-width";

/// Fill used when the bar declares no target.
const FULL_WIDTH: &str = "100%";

// ---------------------------------------------------------------------------
// ProgressBar
// ---------------------------------------------------------------------------

/// Controller for one mounted progress widget.
///
/// The bar fills to its declared target the first time the container scrolls
/// into view; later visibility events are ignored. `set_progress` writes a
/// percentage directly at any time.
pub struct ProgressBar {
    container: NodeId,
    bar: Option<NodeId>,
    revealed: bool,
}

impl ProgressBar {
    /// Mount a progress widget on `container`.
    ///
    /// Without a [`BAR_CLASS`] child the controller is inert.
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let bar = ctx
            .dom
            .children_with_class(container, BAR_CLASS)
            .first()
            .copied();
        Self {
            container,
            bar,
            revealed: false,
        }
    }

    /// Fill the bar to its declared target width. Only the first call has an
    /// effect.
    pub fn reveal(&mut self, ctx: &mut Context<'_>) {
        if self.revealed {
            return;
        }
        let Some(bar) = self.bar else { return };
        if let Some(data) = ctx.dom.get_mut(bar) {
            let target = data
                .attr(TARGET_ATTR)
                .unwrap_or(FULL_WIDTH)
                .to_owned();
            data.set_attr(FILL_ATTR, target);
        }
        self.revealed = true;
    }

    /// Set the fill width to `percentage` percent, clamped to 0–100.
    pub fn set_progress(&mut self, percentage: f32, ctx: &mut Context<'_>) {
        let Some(bar) = self.bar else { return };
        let clamped = percentage.clamp(0.0, 100.0);
        if let Some(data) = ctx.dom.get_mut(bar) {
            data.set_attr(FILL_ATTR, format!("{clamped}%"));
        }
    }

    /// Whether the bar has already filled to its target.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Controller for ProgressBar {
    fn widget_type(&self) -> &str {
        "Progress"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Visible { target } if target == self.container => {
                self.reveal(ctx);
                true
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
