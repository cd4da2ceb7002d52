//! Built-in widget controllers: Carousel, Tabs, Accordion, Progress,
//! Gallery, Form.

pub mod accordion;
pub mod carousel;
pub mod form;
pub mod gallery;
pub mod progress;
pub mod tabs;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use form::{FormValidator, Rule};
pub use gallery::Gallery;
pub use progress::ProgressBar;
pub use tabs::Tabs;

/// Class that marks the active element of a widget (slide, dot, tab, item).
pub const ACTIVE_CLASS: &str = "active";
