//! Resume name value object.
//!
//! The name doubles as the export file name, so characters that are illegal
//! in common file systems are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{is_blank, required_message, ValidationSink};

const FIELD: &str = "resumeName";
const LABEL: &str = "職務経歴書名";

/// Characters that may not appear anywhere in a resume name.
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

pub const FORBIDDEN_CHARACTERS_MESSAGE: &str =
    "職務経歴書名に使用できない文字が含まれています。（\\ / : * ? \" < > |）";
pub const DOT_RULE_MESSAGE: &str =
    "職務経歴書名の先頭と末尾にピリオド（.）は使用できません。";

/// Display name of a resume, unique per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeName(String);

impl ResumeName {
    /// Validates and wraps a resume name.
    ///
    /// The forbidden-character rule and the leading/trailing dot rule are
    /// checked independently; both may fire for the same value.
    pub fn create(sink: &mut dyn ValidationSink, value: &str) -> Self {
        if is_blank(value) {
            sink.add_error(FIELD, &required_message(LABEL));
        } else {
            if value.chars().any(|c| FORBIDDEN_CHARACTERS.contains(&c)) {
                sink.add_error(FIELD, FORBIDDEN_CHARACTERS_MESSAGE);
            }
            if value.starts_with('.') || value.ends_with('.') {
                sink.add_error(FIELD, DOT_RULE_MESSAGE);
            }
        }
        Self(value.to_string())
    }

    /// Wraps a previously validated value without checking it.
    pub fn reconstruct(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
