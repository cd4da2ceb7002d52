//! Message trait, envelope, and the widget announcement messages.
//!
//! Controllers announce state changes by pushing messages onto the page's
//! dispatcher. The [`Message`] trait is object-safe and supports downcasting
//! via `Any`, so page code (and tests) can inspect announcements without the
//! controllers knowing who listens.

use std::any::Any;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// Message trait
// ---------------------------------------------------------------------------

/// Object-safe message trait.
///
/// All messages must implement `as_any` for downcasting and `message_name`
/// for debug/logging purposes.
pub trait Message: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable name for this message type.
    fn message_name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Wraps a boxed message with the container node that announced it.
pub struct Envelope {
    /// The message payload.
    pub message: Box<dyn Message>,
    /// The widget container this announcement came from.
    pub source: NodeId,
}

impl Envelope {
    /// Create a new envelope.
    pub fn new(message: impl Message, source: NodeId) -> Self {
        Self {
            message: Box::new(message),
            source,
        }
    }

    /// Attempt to downcast the message to a concrete type.
    pub fn downcast_ref<T: Message + 'static>(&self) -> Option<&T> {
        self.message.as_any().downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("message_name", &self.message.message_name())
            .field("source", &self.source)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Widget announcements
// ---------------------------------------------------------------------------

/// A carousel moved to a new slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChanged {
    /// Index of the now-active slide.
    pub index: usize,
}

impl Message for SlideChanged {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "SlideChanged"
    }
}

/// A tab strip switched to a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChanged {
    /// Index of the now-active tab.
    pub index: usize,
}

impl Message for TabChanged {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "TabChanged"
    }
}

/// An accordion's open item changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggled {
    /// Index of the open item, or `None` when everything is closed.
    pub open: Option<usize>,
}

impl Message for PanelToggled {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "PanelToggled"
    }
}

/// A gallery lightbox opened on the given image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxOpened {
    /// Index of the image the lightbox opened on.
    pub index: usize,
}

impl Message for LightboxOpened {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "LightboxOpened"
    }
}

/// A gallery lightbox was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxClosed;

impl Message for LightboxClosed {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "LightboxClosed"
    }
}

/// A form was submitted and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSubmitted {
    /// Whether every rule held.
    pub valid: bool,
}

impl Message for FormSubmitted {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "FormSubmitted"
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_id(sm: &mut SlotMap<NodeId, ()>) -> NodeId {
        sm.insert(())
    }

    #[test]
    fn message_names() {
        assert_eq!(SlideChanged { index: 1 }.message_name(), "SlideChanged");
        assert_eq!(TabChanged { index: 0 }.message_name(), "TabChanged");
        assert_eq!(PanelToggled { open: None }.message_name(), "PanelToggled");
        assert_eq!(LightboxOpened { index: 2 }.message_name(), "LightboxOpened");
        assert_eq!(LightboxClosed.message_name(), "LightboxClosed");
        assert_eq!(FormSubmitted { valid: true }.message_name(), "FormSubmitted");
    }

    #[test]
    fn envelope_records_source() {
        let mut sm = SlotMap::with_key();
        let source = make_id(&mut sm);
        let env = Envelope::new(SlideChanged { index: 3 }, source);
        assert_eq!(env.source, source);
    }

    #[test]
    fn envelope_downcast_ref_success() {
        let mut sm = SlotMap::with_key();
        let source = make_id(&mut sm);
        let env = Envelope::new(SlideChanged { index: 3 }, source);
        let msg = env.downcast_ref::<SlideChanged>();
        assert_eq!(msg, Some(&SlideChanged { index: 3 }));
    }

    #[test]
    fn envelope_downcast_ref_wrong_type() {
        let mut sm = SlotMap::with_key();
        let source = make_id(&mut sm);
        let env = Envelope::new(LightboxClosed, source);
        assert!(env.downcast_ref::<SlideChanged>().is_none());
    }

    #[test]
    fn envelope_debug_format() {
        let mut sm = SlotMap::with_key();
        let source = make_id(&mut sm);
        let env = Envelope::new(FormSubmitted { valid: false }, source);
        let dbg = format!("{:?}", env);
        assert!(dbg.contains("FormSubmitted"));
        assert!(dbg.contains("Envelope"));
    }
}
