//! Company name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{require_text, ValidationSink};

/// Maximum number of characters in a company name.
pub const MAX_COMPANY_NAME_LENGTH: usize = 50;

const FIELD: &str = "companyName";
const LABEL: &str = "会社名";

/// Name of an employer, shared by careers and the projects that refer to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Validates and wraps a company name.
    ///
    /// Always returns an instance; failures are recorded under `companyName`.
    pub fn create(sink: &mut dyn ValidationSink, value: &str) -> Self {
        require_text(sink, FIELD, LABEL, value, MAX_COMPANY_NAME_LENGTH);
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

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{required_message, too_long_message, Notification};

    #[test]
    fn accepts_regular_name() {
        let mut sink = Notification::new();
        let name = CompanyName::create(&mut sink, "株式会社ABC");
        assert!(!sink.has_errors());
        assert_eq!(name.as_str(), "株式会社ABC");
    }

    #[test]
    fn blank_name_is_required() {
        let mut sink = Notification::new();
        CompanyName::create(&mut sink, "  ");
        assert_eq!(sink.messages_for("companyName"), [required_message("会社名")]);
    }

    #[test]
    fn fifty_characters_is_allowed() {
        let mut sink = Notification::new();
        CompanyName::create(&mut sink, &"a".repeat(50));
        assert!(!sink.has_errors());
    }

    #[test]
    fn fifty_one_characters_records_exactly_one_error() {
        let mut sink = Notification::new();
        let name = CompanyName::create(&mut sink, &"a".repeat(51));

        assert_eq!(sink.error_count(), 1);
        assert_eq!(
            sink.messages_for("companyName"),
            [too_long_message("会社名", 50)]
        );
        assert_eq!(name.as_str().len(), 51);
    }

    #[test]
    fn reconstruct_skips_validation() {
        let name = CompanyName::reconstruct("");
        assert_eq!(name.as_str(), "");
    }
}
