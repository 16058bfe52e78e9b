//! Certification entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    require_text, required_message, CertificationId, ValidationSink, YearMonth,
};

pub const MAX_CERTIFICATION_NAME_LENGTH: usize = 50;

/// A qualification and the month it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    id: CertificationId,
    name: String,
    date: Option<YearMonth>,
}

fn validate_name(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "name", "資格名", value, MAX_CERTIFICATION_NAME_LENGTH);
}

fn validate_date(sink: &mut dyn ValidationSink, value: Option<YearMonth>) {
    if value.is_none() {
        sink.add_error("date", &required_message("取得年月"));
    }
}

impl Certification {
    pub fn create(sink: &mut dyn ValidationSink, name: &str, date: Option<YearMonth>) -> Self {
        validate_name(sink, name);
        validate_date(sink, date);
        Self {
            id: CertificationId::new(),
            name: name.to_string(),
            date,
        }
    }

    pub fn reconstruct(id: CertificationId, name: String, date: Option<YearMonth>) -> Self {
        Self { id, name, date }
    }

    pub fn id(&self) -> &CertificationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Month obtained; only `None` on an instance that failed validation.
    pub fn date(&self) -> Option<YearMonth> {
        self.date
    }

    pub fn change_name(&self, sink: &mut dyn ValidationSink, name: &str) -> Self {
        validate_name(sink, name);
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn change_date(&self, sink: &mut dyn ValidationSink, date: Option<YearMonth>) -> Self {
        validate_date(sink, date);
        Self {
            date,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Notification;

    #[test]
    fn valid_certification_records_nothing() {
        let mut sink = Notification::new();
        let cert = Certification::create(&mut sink, "基本情報技術者", YearMonth::new(2019, 4).ok());
        assert!(!sink.has_errors());
        assert_eq!(cert.name(), "基本情報技術者");
    }

    #[test]
    fn missing_name_and_date_are_both_reported() {
        let mut sink = Notification::new();
        Certification::create(&mut sink, "", None);
        assert_eq!(sink.messages_for("name"), [required_message("資格名")]);
        assert_eq!(sink.messages_for("date"), [required_message("取得年月")]);
    }

    #[test]
    fn change_date_keeps_identity() {
        let mut sink = Notification::new();
        let cert = Certification::create(&mut sink, "AWS SAA", YearMonth::new(2020, 1).ok());

        let changed = cert.change_date(&mut sink, YearMonth::new(2021, 2).ok());

        assert!(!sink.has_errors());
        assert_eq!(changed.id(), cert.id());
        assert_eq!(changed.date(), YearMonth::new(2021, 2).ok());
    }

    #[test]
    fn change_name_to_overlong_value_is_reported() {
        let mut sink = Notification::new();
        let cert = Certification::create(&mut sink, "AWS SAA", YearMonth::new(2020, 1).ok());
        cert.change_name(&mut sink, &"x".repeat(51));
        assert_eq!(sink.error_count(), 1);
    }
}
