//! Full name value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{is_blank, required_message, too_long_message, ValidationSink};

/// Maximum number of characters in each name part.
pub const MAX_NAME_PART_LENGTH: usize = 10;

/// Alphanumerics (half and full width), hiragana, katakana and kanji.
static NAME_CHARACTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9Ａ-Ｚａ-ｚ０-９\p{Hiragana}\p{Katakana}\p{Han}ー々]+$")
        .expect("name character pattern is valid")
});

fn charset_message(label: &str) -> String {
    format!("{}は英数字・ひらがな・カタカナ・漢字で入力してください。", label)
}

/// Family and given name of the resume owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    last_name: String,
    first_name: String,
}

impl FullName {
    /// Validates both name parts independently.
    ///
    /// A failure on one part never suppresses the checks on the other.
    pub fn create(sink: &mut dyn ValidationSink, last_name: &str, first_name: &str) -> Self {
        validate_part(sink, "lastName", "姓", last_name);
        validate_part(sink, "firstName", "名", first_name);
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
        }
    }

    /// Wraps previously validated values without checking them.
    pub fn reconstruct(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.last_name, self.first_name)
    }
}

fn validate_part(sink: &mut dyn ValidationSink, field: &str, label: &str, value: &str) {
    if is_blank(value) {
        sink.add_error(field, &required_message(label));
        return;
    }
    if value.chars().count() > MAX_NAME_PART_LENGTH {
        sink.add_error(field, &too_long_message(label, MAX_NAME_PART_LENGTH));
    }
    if !NAME_CHARACTERS.is_match(value) {
        sink.add_error(field, &charset_message(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Notification;

    #[test]
    fn japanese_and_latin_names_pass() {
        for (last, first) in [("山田", "太郎"), ("やまだ", "タロウ"), ("Yamada", "Taro2")] {
            let mut sink = Notification::new();
            FullName::create(&mut sink, last, first);
            assert!(!sink.has_errors(), "{} {} should be valid", last, first);
        }
    }

    #[test]
    fn both_blank_parts_are_reported() {
        let mut sink = Notification::new();
        FullName::create(&mut sink, "", " ");

        assert_eq!(sink.messages_for("lastName"), [required_message("姓")]);
        assert_eq!(sink.messages_for("firstName"), [required_message("名")]);
    }

    #[test]
    fn error_on_one_part_does_not_hide_the_other() {
        let mut sink = Notification::new();
        FullName::create(&mut sink, "山田!", "あいうえおかきくけこさ");

        assert_eq!(sink.messages_for("lastName"), [charset_message("姓")]);
        assert_eq!(
            sink.messages_for("firstName"),
            [too_long_message("名", MAX_NAME_PART_LENGTH)]
        );
    }

    #[test]
    fn long_name_with_symbols_reports_both_rules() {
        let mut sink = Notification::new();
        FullName::create(&mut sink, "abcdefghij-k", "太郎");
        assert_eq!(sink.messages_for("lastName").len(), 2);
        assert!(sink.messages_for("firstName").is_empty());
    }

    #[test]
    fn spaces_are_not_allowed_inside_a_part() {
        let mut sink = Notification::new();
        FullName::create(&mut sink, "山 田", "太郎");
        assert_eq!(sink.messages_for("lastName"), [charset_message("姓")]);
    }

    #[test]
    fn display_joins_parts() {
        let name = FullName::reconstruct("山田", "太郎");
        assert_eq!(name.to_string(), "山田 太郎");
    }
}
