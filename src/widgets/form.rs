//! Form validation controller: named rules, field errors, submit gating.
//!
//! Rules pair a predicate with a message and are keyed by field name. A
//! failing field gains the `error` class and an adjacent `field-error` node
//! carrying the message; editing the field clears it. Submission validates
//! every rule and announces the outcome — what happens to a valid submission
//! afterwards (the network call) is not this controller's business.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use crate::dom::node::{NodeData, NodeId};
use crate::event::input::UiEvent;
use crate::event::message::{Envelope, FormSubmitted};
use crate::widget::traits::{Context, Controller};

/// Class hook that marks a container as a validated form.
pub const CONTAINER_CLASS: &str = "form";
/// Class added to a field whose rule failed.
pub const ERROR_CLASS: &str = "error";
/// Class of the node carrying a failed rule's message.
pub const ERROR_NODE_CLASS: &str = "field-error";

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A validation rule: a predicate over the field's value plus the message
/// shown when it fails.
pub struct Rule {
    predicate: Box<dyn Fn(&str) -> bool>,
    message: String,
}

impl Rule {
    /// Create a rule from a message and a predicate.
    pub fn new(message: impl Into<String>, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// A rule requiring a non-blank value.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(message, |value| !value.trim().is_empty())
    }

    /// A rule requiring at least `min` characters.
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::new(message, move |value| value.chars().count() >= min)
    }
}

// ---------------------------------------------------------------------------
// FormValidator
// ---------------------------------------------------------------------------

/// Controller for one mounted form.
///
/// Fields are every descendant carrying a `name` attribute, captured once at
/// mount; their current value is read from the `value` attribute on each
/// validation.
pub struct FormValidator {
    container: NodeId,
    /// Field name -> field node, first occurrence wins.
    fields: BTreeMap<String, NodeId>,
    rules: BTreeMap<String, Rule>,
    /// Field node -> its mounted error node.
    errors: HashMap<NodeId, NodeId>,
}

impl FormValidator {
    /// Mount a validator on `container`, capturing every named descendant as
    /// a field.
    pub fn mount(ctx: &mut Context<'_>, container: NodeId) -> Self {
        let mut fields = BTreeMap::new();
        for node in ctx.dom.walk_depth_first(container) {
            if node == container {
                continue;
            }
            if let Some(name) = ctx.dom.get(node).and_then(|data| data.attr("name")) {
                fields.entry(name.to_owned()).or_insert(node);
            }
        }
        Self {
            container,
            fields,
            rules: BTreeMap::new(),
            errors: HashMap::new(),
        }
    }

    /// Attach a rule to the named field, replacing any previous rule.
    pub fn add_rule(&mut self, field_name: impl Into<String>, rule: Rule) {
        self.rules.insert(field_name.into(), rule);
    }

    /// Validate every rule. Fields with failing rules gain errors, passing
    /// ones are cleared. Returns whether everything held.
    pub fn validate_form(&mut self, ctx: &mut Context<'_>) -> bool {
        let mut valid = true;
        let checks: Vec<(String, NodeId)> = self
            .rules
            .keys()
            .filter_map(|name| self.fields.get(name).map(|&field| (name.clone(), field)))
            .collect();
        for (name, field) in checks {
            if !self.check_field(&name, field, ctx) {
                valid = false;
            }
        }
        tracing::debug!(container = ?self.container, valid, "form validated");
        valid
    }

    /// Validate the single field at `field`. Fields without a rule pass.
    pub fn validate_field(&mut self, field: NodeId, ctx: &mut Context<'_>) -> bool {
        let Some(name) = self.field_name(field) else {
            return true;
        };
        if !self.rules.contains_key(&name) {
            return true;
        }
        self.check_field(&name, field, ctx)
    }

    fn check_field(&mut self, name: &str, field: NodeId, ctx: &mut Context<'_>) -> bool {
        let value = ctx
            .dom
            .get(field)
            .and_then(|data| data.attr("value"))
            .unwrap_or_default()
            .to_owned();
        let rule = &self.rules[name];
        if (rule.predicate)(&value) {
            self.clear_error(field, ctx);
            true
        } else {
            let message = rule.message.clone();
            self.show_error(field, &message, ctx);
            false
        }
    }

    /// Mark `field` as failed and mount a message node next to it.
    pub fn show_error(&mut self, field: NodeId, message: &str, ctx: &mut Context<'_>) {
        self.clear_error(field, ctx);
        let Some(parent) = ctx.dom.parent(field) else {
            return;
        };
        if let Some(data) = ctx.dom.get_mut(field) {
            data.add_class(ERROR_CLASS);
        }
        let error_node = ctx.dom.insert_child(
            parent,
            NodeData::new("Div")
                .with_class(ERROR_NODE_CLASS)
                .with_text(message),
        );
        self.errors.insert(field, error_node);
    }

    /// Clear any error on `field`. No-op when none is shown.
    pub fn clear_error(&mut self, field: NodeId, ctx: &mut Context<'_>) {
        if let Some(data) = ctx.dom.get_mut(field) {
            data.remove_class(ERROR_CLASS);
        }
        if let Some(error_node) = self.errors.remove(&field) {
            ctx.dom.remove(error_node);
        }
    }

    /// The captured field node for `name`, if any.
    pub fn field(&self, name: &str) -> Option<NodeId> {
        self.fields.get(name).copied()
    }

    /// Number of fields captured at mount.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_name(&self, field: NodeId) -> Option<String> {
        self.fields
            .iter()
            .find(|(_, &node)| node == field)
            .map(|(name, _)| name.clone())
    }
}

impl Controller for FormValidator {
    fn widget_type(&self) -> &str {
        "Form"
    }

    fn container(&self) -> NodeId {
        self.container
    }

    fn handle_event(&mut self, event: &UiEvent, ctx: &mut Context<'_>) -> bool {
        match *event {
            UiEvent::Blur { target } => {
                if self.field_name(target).is_none() {
                    return false;
                }
                self.validate_field(target, ctx);
                true
            }
            UiEvent::Input { target } => {
                if self.field_name(target).is_none() {
                    return false;
                }
                self.clear_error(target, ctx);
                true
            }
            UiEvent::Submit { target } if target == self.container => {
                let valid = self.validate_form(ctx);
                ctx.messages
                    .push(Envelope::new(FormSubmitted { valid }, self.container));
                true
            }
            _ => false,
        }
    }

    fn teardown(&mut self, ctx: &mut Context<'_>) {
        let fields: Vec<NodeId> = self.errors.keys().copied().collect();
        for field in fields {
            self.clear_error(field, ctx);
        }
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
