//! Glue between the pure rules and whatever displays the fields.
//!
//! The rules never touch the UI: a [`TextSource`] hands them the current
//! value as a plain string and a [`MessageSink`] receives the message to
//! render (empty when the value is valid). Any widget toolkit can implement
//! the two traits; the in-memory types here are enough for tests and the
//! demo binary.

use std::collections::BTreeSet;

use log::debug;

use crate::utils::input_validation::ValidationResult;

/// Anything a field value can be read from.
pub trait TextSource {
    fn text(&self) -> String;
}

/// Anything a validation message can be written to.
pub trait MessageSink {
    fn set_message(&mut self, message: &str);
}

/// Wires one field to one rule: reads the value, applies the rule, writes
/// the message. Re-run on every change of the underlying field.
pub struct FieldBinding<S, K> {
    name: &'static str,
    source: S,
    sink: K,
    rule: fn(&str) -> ValidationResult,
}

impl<S: TextSource, K: MessageSink> FieldBinding<S, K> {
    pub fn new(name: &'static str, source: S, sink: K, rule: fn(&str) -> ValidationResult) -> Self {
        Self {
            name,
            source,
            sink,
            rule,
        }
    }

    /// Validates the current value and updates the message slot.
    /// A valid value clears the slot with an empty string.
    pub fn refresh(&mut self) -> ValidationResult {
        let value = self.source.text();
        let result = (self.rule)(&value);

        debug!(
            "field '{}' validated: {}",
            self.name,
            if result.is_valid() { "ok" } else { result.message() }
        );

        self.sink.set_message(result.message());
        result
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

/// In-memory field content, the simplest possible [`TextSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer(String);

impl FieldBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }
}

impl TextSource for FieldBuffer {
    fn text(&self) -> String {
        self.0.clone()
    }
}

/// In-memory error display region, the simplest possible [`MessageSink`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot(String);

impl MessageSlot {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl MessageSink for MessageSlot {
    fn set_message(&mut self, message: &str) {
        self.0 = message.to_owned();
    }
}

/// The set of class names attached to one element, with the toggle
/// semantics of `classList.toggle`: returns whether the class is present
/// after the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(name.to_owned());
            true
        }
    }
}
