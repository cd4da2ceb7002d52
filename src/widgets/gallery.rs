//! Gallery controller: thumbnail grid with a modal lightbox.
//!
//! Clicking an item opens an overlay seeded from a snapshot of the gallery's
//! images; prev/next wrap circularly with the same modular arithmetic as the
//! carousel; Escape/ArrowLeft/ArrowRight mirror the on-screen controls;
//! clicking the backdrop dismisses. Closing removes the entire overlay
//! subtree.

use std::any::Any;

use crate::dom::node::{NodeData, NodeId};
use crate::event::input::{Key, UiEvent};
use crate::event::message::{Envelope, LightboxClosed, LightboxOpened};
use crate::widget::traits::{Context, Controller};

/// Class hook that marks a container as a gallery.
pub const CONTAINER_CLASS: &str = "gallery";
/// Class marking a clickable gallery item.
pub const ITEM_CLASS: &str = "gallery-item";

// ---------------------------------------------------------------------------
// Lightbox internals
// ---------------------------------------------------------------------------

/// An image captured from a gallery item when the lightbox opens.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageRef {
    src: String,
    alt: String,
}

/// Handles into the open overlay subtree.
struct Lightbox {
    root: NodeId,
    image: NodeId,
    counter: NodeId,
    close_btn: NodeId,
    prev_btn: NodeId,
    next_btn: NodeId,
    images: Vec<ImageRef>,
    index: usize,
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Controller for one mounted gallery.
pub struct Gallery {
    container: NodeId,
    items: Vec<NodeId>,
    lightbox: Option<Lightbox>,
}

impl Gallery {
    /// Mount a gallery on `container`.
    ///
    /// Items are the direct children carrying [`ITEM_CLASS`]; with none the
    /// controller is inert.
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let items = ctx.dom.children_with_class(container, ITEM_CLASS);
        Self {
            container,
            items,
            lightbox: None,
        }
    }

    /// Open the lightbox on the image belonging to item `start_index`.
    ///
    /// No-op when already open or `start_index` is out of range. The image
    /// list is snapshotted from the items' `Img` children at this moment.
    pub fn open(&mut self, start_index: usize, ctx: &mut Context<'_>) {
        if self.lightbox.is_some() || start_index >= self.items.len() {
            return;
        }

        let images: Vec<ImageRef> = self
            .items
            .iter()
            .map(|&item| {
                let img = ctx
                    .dom
                    .children(item)
                    .iter()
                    .copied()
                    .find(|&child| {
                        ctx.dom
                            .get(child)
                            .is_some_and(|data| data.element_type == "Img")
                    });
                match img.and_then(|img| ctx.dom.get(img)) {
                    Some(data) => ImageRef {
                        src: data.attr("src").unwrap_or_default().to_owned(),
                        alt: data.attr("alt").unwrap_or_default().to_owned(),
                    },
                    None => ImageRef {
                        src: String::new(),
                        alt: String::new(),
                    },
                }
            })
            .collect();

        // The overlay hangs off the document root, outside the gallery.
        let overlay_parent = ctx.dom.root().unwrap_or(self.container);
        let root = ctx
            .dom
            .insert_child(overlay_parent, NodeData::new("Div").with_class("lightbox"));
        let content = ctx
            .dom
            .insert_child(root, NodeData::new("Div").with_class("lightbox-content"));
        let close_btn = ctx.dom.insert_child(
            content,
            NodeData::new("Button").with_class("lightbox-close").with_text("\u{d7}"),
        );
        let prev_btn = ctx.dom.insert_child(
            content,
            NodeData::new("Button").with_class("lightbox-prev").with_text("\u{2039}"),
        );
        let image = ctx.dom.insert_child(
            content,
            NodeData::new("Img")
                .with_class("lightbox-image")
                .with_attr("src", images[start_index].src.clone())
                .with_attr("alt", images[start_index].alt.clone()),
        );
        let next_btn = ctx.dom.insert_child(
            content,
            NodeData::new("Button").with_class("lightbox-next").with_text("\u{203a}"),
        );
        let counter = ctx.dom.insert_child(
            content,
            NodeData::new("Div")
                .with_class("lightbox-counter")
                .with_text(format!("{} / {}", start_index + 1, images.len())),
        );

        self.lightbox = Some(Lightbox {
            root,
            image,
            counter,
            close_btn,
            prev_btn,
            next_btn,
            images,
            index: start_index,
        });
        tracing::debug!(container = ?self.container, index = start_index, "lightbox opened");
        ctx.messages
            .push(Envelope::new(LightboxOpened { index: start_index }, self.container));
    }

    /// Dismiss the lightbox, removing its overlay subtree. No-op when closed.
    pub fn close(&mut self, ctx: &mut Context<'_>) {
        if let Some(lightbox) = self.lightbox.take() {
            ctx.dom.remove(lightbox.root);
            tracing::debug!(container = ?self.container, "lightbox closed");
            ctx.messages
                .push(Envelope::new(LightboxClosed, self.container));
        }
    }

    /// Show the next image, wrapping circularly. No-op when closed.
    pub fn next_image(&mut self, ctx: &mut Context<'_>) {
        if let Some(lightbox) = &mut self.lightbox {
            lightbox.index = (lightbox.index + 1) % lightbox.images.len();
            Self::update_overlay(lightbox, ctx);
        }
    }

    /// Show the previous image, wrapping circularly. No-op when closed.
    pub fn prev_image(&mut self, ctx: &mut Context<'_>) {
        if let Some(lightbox) = &mut self.lightbox {
            let len = lightbox.images.len();
            lightbox.index = (lightbox.index + len - 1) % len;
            Self::update_overlay(lightbox, ctx);
        }
    }

    fn update_overlay(lightbox: &mut Lightbox, ctx: &mut Context<'_>) {
        let current = &lightbox.images[lightbox.index];
        if let Some(data) = ctx.dom.get_mut(lightbox.image) {
            data.set_attr("src", current.src.clone());
            data.set_attr("alt", current.alt.clone());
        }
        if let Some(data) = ctx.dom.get_mut(lightbox.counter) {
            data.set_text(format!("{} / {}", lightbox.index + 1, lightbox.images.len()));
        }
    }

    /// Whether the lightbox is currently open.
    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Index of the displayed image, when open.
    pub fn current_image(&self) -> Option<usize> {
        self.lightbox.as_ref().map(|lightbox| lightbox.index)
    }

    /// Number of items captured at mount.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Controller for Gallery {
    fn widget_type(&self) -> &str {
        "Gallery"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Click { target } => {
                if let Some(index) = self.items.iter().position(|&item| item == target) {
                    self.open(index, ctx);
                    return true;
                }
                let Some(lightbox) = &self.lightbox else {
                    return false;
                };
                let (root, close_btn, prev_btn, next_btn) = (
                    lightbox.root,
                    lightbox.close_btn,
                    lightbox.prev_btn,
                    lightbox.next_btn,
                );
                if target == close_btn || target == root {
                    self.close(ctx);
                } else if target == prev_btn {
                    self.prev_image(ctx);
                } else if target == next_btn {
                    self.next_image(ctx);
                } else {
                    return false;
                }
                true
            }
            UiEvent::KeyPress { key } => {
                if self.lightbox.is_none() {
                    return false;
                }
                match key {
                    Key::Escape => self.close(ctx),
                    Key::ArrowLeft => self.prev_image(ctx),
                    Key::ArrowRight => self.next_image(ctx),
                }
                true
            }
            _ => false,
        }
    }

    fn teardown(&mut self, ctx: &mut Context<'_>) {
        self.close(ctx);
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
