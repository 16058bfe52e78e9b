//! Field-keyed validation accumulator.
//!
//! Value objects and entities never fail during construction. They record
//! problems into a [`ValidationSink`] and always return an instance; the
//! aggregate root inspects the sink afterwards and turns a non-empty sink
//! into a [`DomainError`](super::DomainError).
//!
//! # Example
//!
//! ```
//! use resume_manager::domain::foundation::{Notification, ValidationSink};
//! use resume_manager::domain::resume::CompanyName;
//!
//! let mut sink = Notification::new();
//! let _name = CompanyName::create(&mut sink, "");
//! assert!(sink.has_errors());
//! assert_eq!(sink.messages_for("companyName").len(), 1);
//! ```

use std::collections::BTreeMap;

/// Append-only sink of `(field, message)` pairs.
///
/// Implementations must never panic and must never drop an entry once
/// written. A sink is scoped to one validation attempt and is not meant to
/// be shared across threads.
pub trait ValidationSink {
    /// Records a message against a field key.
    fn add_error(&mut self, field: &str, message: &str);

    /// Returns true if at least one entry has been recorded.
    fn has_errors(&self) -> bool;

    /// Returns a snapshot of the recorded messages grouped by field key.
    ///
    /// Messages under one key keep their insertion order.
    fn errors_by_field(&self) -> BTreeMap<String, Vec<String>>;
}

/// Map-backed [`ValidationSink`].
///
/// Used both for single value-object construction and for assembling a
/// whole aggregate tree; [`Notification::merge`] combines the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: BTreeMap<String, Vec<String>>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every entry of `other` into this notification.
    pub fn merge(&mut self, other: &dyn ValidationSink) {
        for (field, messages) in other.errors_by_field() {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    /// Total number of recorded messages across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages recorded for one field, empty if none.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Borrowed read-only view of the recorded entries.
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

impl ValidationSink for Notification {
    fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    fn errors_by_field(&self) -> BTreeMap<String, Vec<String>> {
        self.errors.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared text rules
// ─────────────────────────────────────────────────────────────────────────────

/// Message for a missing required value.
pub fn required_message(label: &str) -> String {
    format!("{}は必須です。", label)
}

/// Message for a value longer than `max_chars` characters.
pub fn too_long_message(label: &str, max_chars: usize) -> String {
    format!("{}は{}文字以内で入力してください。", label, max_chars)
}

/// Returns true if the string is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Records `required` when blank, otherwise `too long` when the value has
/// more than `max_chars` characters.
pub fn require_text(
    sink: &mut dyn ValidationSink,
    field: &str,
    label: &str,
    value: &str,
    max_chars: usize,
) {
    if is_blank(value) {
        sink.add_error(field, &required_message(label));
        return;
    }
    check_max_length(sink, field, label, value, max_chars);
}

/// Records `too long` when the value has more than `max_chars` characters.
///
/// Blank values pass; use for optional text.
pub fn check_max_length(
    sink: &mut dyn ValidationSink,
    field: &str,
    label: &str,
    value: &str,
    max_chars: usize,
) {
    if value.chars().count() > max_chars {
        sink.add_error(field, &too_long_message(label, max_chars));
    }
}
