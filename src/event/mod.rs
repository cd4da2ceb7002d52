//! Event system: input events, swipe classification, messages, dispatch.

pub mod gesture;
pub mod handler;
pub mod input;
pub mod message;

pub use gesture::{Swipe, SwipeDetector, SWIPE_DISTANCE};
pub use handler::EventDispatcher;
pub use input::{Key, UiEvent};
pub use message::{
    Envelope, FormSubmitted, LightboxClosed, LightboxOpened, Message, PanelToggled, SlideChanged,
    TabChanged,
};
