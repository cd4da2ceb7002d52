//! Selector parser: compound selectors and comma lists.

use crate::dom::node::NodeData;

use super::tokenizer::{tokenize, Token};

// ---------------------------------------------------------------------------
// SelectorError
// ---------------------------------------------------------------------------

/// Errors from selector parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The input contained characters no token matches.
    #[error("unrecognized input {0:?} in selector")]
    InvalidToken(String),

    /// The selector (or one list entry) was empty.
    #[error("empty selector")]
    Empty,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {0:?} in selector")]
    UnexpectedToken(String),
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// One compound selector: an optional element type plus any number of class
/// and id constraints, all of which must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Required element type, or `None` for any (`*` or no type written).
    pub element_type: Option<String>,
    /// Required id, if any.
    pub id: Option<String>,
    /// Required classes; the node must carry all of them.
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse a single compound selector, rejecting comma lists.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let list = SelectorList::parse(input)?;
        match <[Selector; 1]>::try_from(list.0) {
            Ok([selector]) => Ok(selector),
            Err(_) => Err(SelectorError::UnexpectedToken(",".to_string())),
        }
    }

    /// Whether this selector matches the given node data.
    pub fn matches(&self, data: &NodeData) -> bool {
        if let Some(ty) = &self.element_type {
            if data.element_type != *ty {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if data.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| data.has_class(class))
    }

    fn is_vacant(&self) -> bool {
        self.element_type.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SelectorList
// ---------------------------------------------------------------------------

/// A comma-separated list of selectors; matches when any entry matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(pub Vec<Selector>);

impl SelectorList {
    /// Parse a selector list, e.g. `".carousel, Section.gallery"`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let tokens = tokenize(input)?;
        let mut selectors = Vec::new();
        let mut current = Selector::default();
        let mut saw_star = false;

        for (token, text) in tokens {
            match token {
                Token::Type => {
                    // A type is only legal at the head of a compound.
                    if !current.is_vacant() || saw_star {
                        return Err(SelectorError::UnexpectedToken(text));
                    }
                    current.element_type = Some(text);
                }
                Token::Star => {
                    if !current.is_vacant() || saw_star {
                        return Err(SelectorError::UnexpectedToken(text));
                    }
                    saw_star = true;
                }
                Token::Class => {
                    current.classes.push(text[1..].to_string());
                }
                Token::Id => {
                    // At most one id per compound.
                    if current.id.is_some() {
                        return Err(SelectorError::UnexpectedToken(text));
                    }
                    current.id = Some(text[1..].to_string());
                }
                Token::Comma => {
                    if current.is_vacant() && !saw_star {
                        return Err(SelectorError::Empty);
                    }
                    selectors.push(std::mem::take(&mut current));
                    saw_star = false;
                }
            }
        }

        if current.is_vacant() && !saw_star {
            return Err(SelectorError::Empty);
        }
        selectors.push(current);
        Ok(Self(selectors))
    }

    /// Whether any selector in the list matches the given node data.
    pub fn matches(&self, data: &NodeData) -> bool {
        self.0.iter().any(|selector| selector.matches(data))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
