//! Selector engine: tokenizer and parser for page hook selectors.
//!
//! Widgets are wired to markup through selector hooks (`.carousel`,
//! `Button.carousel-dot`, `#callback-form`). This module implements the tiny
//! language those hooks need: type names, `.class`, `#id`, compounds of the
//! three, and comma-separated lists. No combinators; page hooks never nest.

pub mod tokenizer;
pub mod parser;

pub use parser::{Selector, SelectorError, SelectorList};
pub use tokenizer::{tokenize, Token};
