//! Accordion controller: one open item at a time.

use std::any::Any;

use crate::dom::node::NodeId;
use crate::event::input::UiEvent;
use crate::event::message::{Envelope, PanelToggled};
use crate::widget::traits::{Context, Controller};

use super::ACTIVE_CLASS;

/// Class hook that marks a container as an accordion.
pub const CONTAINER_CLASS: &str = "accordion";
/// Class marking an item child.
pub const ITEM_CLASS: &str = "accordion-item";
/// Class marking the clickable header inside an item.
pub const HEADER_CLASS: &str = "accordion-header";

// ---------------------------------------------------------------------------
// Accordion
// ---------------------------------------------------------------------------

/// Header-to-item binding captured at mount.
struct ItemBinding {
    header: NodeId,
    item: NodeId,
}

/// Controller for one mounted accordion.
///
/// Clicking a closed item's header opens it and closes everything else;
/// clicking the open item's header closes it. Zero open items is legal.
pub struct Accordion {
    container: NodeId,
    bindings: Vec<ItemBinding>,
    open: Option<usize>,
}

impl Accordion {
    /// Mount an accordion on `container`.
    ///
    /// Items are the direct children carrying [`ITEM_CLASS`]; each item's
    /// first child carrying [`HEADER_CLASS`] becomes its toggle. Items
    /// without a header are skipped — nothing could ever toggle them.
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let bindings = ctx
            .dom
            .children_with_class(container, ITEM_CLASS)
            .into_iter()
            .filter_map(|item| {
                ctx.dom
                    .children_with_class(item, HEADER_CLASS)
                    .first()
                    .map(|&header| ItemBinding { header, item })
            })
            .collect();

        Self {
            container,
            bindings,
            open: None,
        }
    }

    /// Toggle the item at `index`: open it (closing all others) if closed,
    /// close it if open. Out-of-range indices are a guarded no-op.
    pub fn toggle(&mut self, index: usize, ctx: &mut Context<'_>) {
        if index >= self.bindings.len() {
            return;
        }

        let was_open = self.open == Some(index);
        self.close_all(ctx);

        if !was_open {
            if let Some(data) = ctx.dom.get_mut(self.bindings[index].item) {
                data.add_class(ACTIVE_CLASS);
            }
            self.open = Some(index);
        }

        ctx.messages
            .push(Envelope::new(PanelToggled { open: self.open }, self.container));
    }

    /// Close every item.
    pub fn close_all(&mut self, ctx: &mut Context<'_>) {
        for binding in &self.bindings {
            if let Some(data) = ctx.dom.get_mut(binding.item) {
                data.remove_class(ACTIVE_CLASS);
            }
        }
        self.open = None;
    }

    /// Index of the open item, if any.
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Number of toggleable items captured at mount.
    pub fn item_count(&self) -> usize {
        self.bindings.len()
    }
}

impl Controller for Accordion {
    fn widget_type(&self) -> &str {
        "Accordion"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Click { target } => {
                match self
                    .bindings
                    .iter()
                    .position(|binding| binding.header == target)
                {
                    Some(index) => {
                        self.toggle(index, ctx);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;
    use crate::event::handler::EventDispatcher;
    use crate::timer::TimerWheel;

    struct Fixture {
        dom: Dom,
        timers: TimerWheel,
        messages: EventDispatcher,
        container: NodeId,
        items: Vec<NodeId>,
        headers: Vec<NodeId>,
    }

    impl Fixture {
        fn new(item_count: usize) -> Self {
            let mut dom = Dom::new();
            let root = dom.insert(NodeData::new("Body"));
            let container = dom.insert_child(root, NodeData::new("Div").with_class(CONTAINER_CLASS));
            let mut items = Vec::new();
            let mut headers = Vec::new();
            for _ in 0..item_count {
                let item = dom.insert_child(container, NodeData::new("Div").with_class(ITEM_CLASS));
                let header = dom.insert_child(item, NodeData::new("Button").with_class(HEADER_CLASS));
                items.push(item);
                headers.push(header);
            }
            Self {
                dom,
                timers: TimerWheel::new(),
                messages: EventDispatcher::new(),
                container,
                items,
                headers,
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context::new(&mut self.dom, &mut self.timers, &mut self.messages)
        }

        fn mount(&mut self) -> Accordion {
            let container = self.container;
            let mut ctx = self.ctx();
            Accordion::mount(&mut ctx, container)
        }

        fn open_items(&self) -> Vec<usize> {
            self.items
                .iter()
                .enumerate()
                .filter(|(_, &item)| self.dom.get(item).unwrap().has_class(ACTIVE_CLASS))
                .map(|(i, _)| i)
                .collect()
        }
    }

    #[test]
    fn mount_starts_closed() {
        let mut fx = Fixture::new(3);
        let accordion = fx.mount();
        assert_eq!(accordion.open_item(), None);
        assert!(fx.open_items().is_empty());
        assert_eq!(accordion.item_count(), 3);
    }

    #[test]
    fn toggle_opens_one_item() {
        let mut fx = Fixture::new(3);
        let mut accordion = fx.mount();
        let mut ctx = fx.ctx();
        accordion.toggle(1, &mut ctx);
        assert_eq!(accordion.open_item(), Some(1));
        assert_eq!(fx.open_items(), vec![1]);
    }

    #[test]
    fn opening_another_closes_the_first() {
        let mut fx = Fixture::new(3);
        let mut accordion = fx.mount();
        let mut ctx = fx.ctx();
        accordion.toggle(0, &mut ctx);
        accordion.toggle(2, &mut ctx);
        assert_eq!(accordion.open_item(), Some(2));
        assert_eq!(fx.open_items(), vec![2]);
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut fx = Fixture::new(3);
        let mut accordion = fx.mount();
        let mut ctx = fx.ctx();
        accordion.toggle(1, &mut ctx);
        accordion.toggle(1, &mut ctx);
        assert_eq!(accordion.open_item(), None);
        assert!(fx.open_items().is_empty());
    }

    #[test]
    fn at_most_one_open_under_any_sequence() {
        let mut fx = Fixture::new(4);
        let mut accordion = fx.mount();
        for index in [0, 1, 1, 3, 2, 2, 0] {
            let mut ctx = fx.ctx();
            accordion.toggle(index, &mut ctx);
            assert!(fx.open_items().len() <= 1);
        }
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut fx = Fixture::new(2);
        let mut accordion = fx.mount();
        let mut ctx = fx.ctx();
        accordion.toggle(5, &mut ctx);
        assert_eq!(accordion.open_item(), None);
        assert!(fx.messages.is_empty());
    }

    #[test]
    fn header_click_toggles() {
        let mut fx = Fixture::new(3);
        let mut accordion = fx.mount();
        let header = fx.headers[2];
        let mut ctx = fx.ctx();
        assert!(accordion.handle_event(&UiEvent::Click { target: header }, &mut ctx));
        assert_eq!(accordion.open_item(), Some(2));
    }

    #[test]
    fn item_click_is_not_claimed() {
        let mut fx = Fixture::new(3);
        let mut accordion = fx.mount();
        let item = fx.items[0];
        let mut ctx = fx.ctx();
        assert!(!accordion.handle_event(&UiEvent::Click { target: item }, &mut ctx));
    }

    #[test]
    fn headerless_item_is_skipped() {
        let mut fx = Fixture::new(2);
        // A third item without a header.
        let bare = fx
            .dom
            .insert_child(fx.container, NodeData::new("Div").with_class(ITEM_CLASS));
        let accordion = fx.mount();
        assert_eq!(accordion.item_count(), 2);
        assert!(!fx.dom.get(bare).unwrap().has_class(ACTIVE_CLASS));
    }

    #[test]
    fn toggle_announces_open_state() {
        let mut fx = Fixture::new(2);
        let mut accordion = fx.mount();
        let mut ctx = fx.ctx();
        accordion.toggle(1, &mut ctx);
        accordion.toggle(1, &mut ctx);
        let messages = fx.messages.drain();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].downcast_ref::<PanelToggled>().unwrap().open,
            Some(1)
        );
        assert_eq!(messages[1].downcast_ref::<PanelToggled>().unwrap().open, None);
    }
}
