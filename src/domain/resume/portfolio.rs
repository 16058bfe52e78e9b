//! Portfolio entity.

use serde::{Deserialize, Serialize};

use super::Link;
use crate::domain::foundation::{check_max_length, require_text, PortfolioId, ValidationSink};

pub const MAX_PORTFOLIO_NAME_LENGTH: usize = 50;
pub const MAX_PORTFOLIO_TEXT_LENGTH: usize = 1000;

/// A published piece of personal work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    id: PortfolioId,
    name: String,
    overview: String,
    tech_stack: String,
    link: Link,
}

fn validate_name(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "name", "ポートフォリオ名", value, MAX_PORTFOLIO_NAME_LENGTH);
}

fn validate_overview(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "overview", "概要", value, MAX_PORTFOLIO_TEXT_LENGTH);
}

fn validate_tech_stack(sink: &mut dyn ValidationSink, value: &str) {
    check_max_length(sink, "techStack", "技術スタック", value, MAX_PORTFOLIO_TEXT_LENGTH);
}

impl Portfolio {
    pub fn create(
        sink: &mut dyn ValidationSink,
        name: &str,
        overview: &str,
        tech_stack: &str,
        link: &str,
    ) -> Self {
        validate_name(sink, name);
        validate_overview(sink, overview);
        validate_tech_stack(sink, tech_stack);
        Self {
            id: PortfolioId::new(),
            name: name.to_string(),
            overview: overview.to_string(),
            tech_stack: tech_stack.to_string(),
            link: Link::create(sink, link),
        }
    }

    pub fn reconstruct(
        id: PortfolioId,
        name: String,
        overview: String,
        tech_stack: String,
        link: Link,
    ) -> Self {
        Self {
            id,
            name,
            overview,
            tech_stack,
            link,
        }
    }

    pub fn id(&self) -> &PortfolioId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    /// Free-text technology summary, possibly empty.
    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn change_name(&self, sink: &mut dyn ValidationSink, name: &str) -> Self {
        validate_name(sink, name);
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn change_overview(&self, sink: &mut dyn ValidationSink, overview: &str) -> Self {
        validate_overview(sink, overview);
        Self {
            overview: overview.to_string(),
            ..self.clone()
        }
    }

    pub fn change_tech_stack(&self, sink: &mut dyn ValidationSink, tech_stack: &str) -> Self {
        validate_tech_stack(sink, tech_stack);
        Self {
            tech_stack: tech_stack.to_string(),
            ..self.clone()
        }
    }

    pub fn change_link(&self, sink: &mut dyn ValidationSink, link: &str) -> Self {
        Self {
            link: Link::create(sink, link),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{too_long_message, Notification};

    fn sample(sink: &mut Notification) -> Portfolio {
        Portfolio::create(
            sink,
            "家計簿アプリ",
            "個人開発の家計簿",
            "Rust, React",
            "https://example.com/kakeibo",
        )
    }

    #[test]
    fn valid_portfolio_records_nothing() {
        let mut sink = Notification::new();
        let portfolio = sample(&mut sink);
        assert!(!sink.has_errors());
        assert_eq!(portfolio.link().as_str(), "https://example.com/kakeibo");
    }

    #[test]
    fn tech_stack_is_optional() {
        let mut sink = Notification::new();
        Portfolio::create(&mut sink, "名前", "概要", "", "https://example.com");
        assert!(!sink.has_errors());
    }

    #[test]
    fn tech_stack_is_limited_to_one_thousand() {
        let mut sink = Notification::new();
        Portfolio::create(&mut sink, "名前", "概要", &"t".repeat(1001), "https://example.com");
        assert_eq!(
            sink.messages_for("techStack"),
            [too_long_message("技術スタック", 1000)]
        );
    }

    #[test]
    fn all_invalid_fields_are_reported_together() {
        let mut sink = Notification::new();
        Portfolio::create(&mut sink, "", "", "", "http://example.com");
        assert_eq!(sink.messages_for("name").len(), 1);
        assert_eq!(sink.messages_for("overview").len(), 1);
        assert_eq!(sink.messages_for("link").len(), 1);
        assert_eq!(sink.error_count(), 3);
    }

    #[test]
    fn change_link_revalidates_scheme() {
        let mut sink = Notification::new();
        let portfolio = sample(&mut sink);

        let changed = portfolio.change_link(&mut sink, "ftp://example.com");

        assert_eq!(sink.messages_for("link").len(), 1);
        assert_eq!(changed.id(), portfolio.id());
        assert_eq!(changed.name(), portfolio.name());
    }

    #[test]
    fn changes_compose_left_to_right() {
        let mut sink = Notification::new();
        let portfolio = sample(&mut sink)
            .change_name(&mut sink, "新しい名前")
            .change_overview(&mut sink, "新しい概要")
            .change_tech_stack(&mut sink, "Go");

        assert!(!sink.has_errors());
        assert_eq!(portfolio.name(), "新しい名前");
        assert_eq!(portfolio.overview(), "新しい概要");
        assert_eq!(portfolio.tech_stack(), "Go");
    }
}
