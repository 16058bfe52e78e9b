//! Self-promotion entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, SelfPromotionId, ValidationSink};

pub const MAX_SELF_PROMOTION_TITLE_LENGTH: usize = 50;
pub const MAX_SELF_PROMOTION_CONTENT_LENGTH: usize = 1000;

/// A titled paragraph of self-promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPromotion {
    id: SelfPromotionId,
    title: String,
    content: String,
}

fn validate_title(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "title", "タイトル", value, MAX_SELF_PROMOTION_TITLE_LENGTH);
}

fn validate_content(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "content", "内容", value, MAX_SELF_PROMOTION_CONTENT_LENGTH);
}

impl SelfPromotion {
    pub fn create(sink: &mut dyn ValidationSink, title: &str, content: &str) -> Self {
        validate_title(sink, title);
        validate_content(sink, content);
        Self {
            id: SelfPromotionId::new(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    pub fn reconstruct(id: SelfPromotionId, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    pub fn id(&self) -> &SelfPromotionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn change_title(&self, sink: &mut dyn ValidationSink, title: &str) -> Self {
        validate_title(sink, title);
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }

    pub fn change_content(&self, sink: &mut dyn ValidationSink, content: &str) -> Self {
        validate_content(sink, content);
        Self {
            content: content.to_string(),
            ..self.clone()
        }
    }
}
