//! Profile link entity covering both social links and SNS platforms.
//!
//! The two kinds share one shape and one rule set; [`ProfileLinkKind`]
//! records which resume collection an entry belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Link;
use crate::domain::foundation::{require_text, ProfileLinkId, ValidationSink};

pub const MAX_PROFILE_LINK_NAME_LENGTH: usize = 50;

/// Which collection of the resume a profile link lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileLinkKind {
    SocialLink,
    SnsPlatform,
}

impl fmt::Display for ProfileLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SocialLink => write!(f, "social link"),
            Self::SnsPlatform => write!(f, "SNS platform"),
        }
    }
}

/// A named HTTPS link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    id: ProfileLinkId,
    kind: ProfileLinkKind,
    name: String,
    link: Link,
}

fn validate_name(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "name", "名前", value, MAX_PROFILE_LINK_NAME_LENGTH);
}

impl ProfileLink {
    pub fn create(
        sink: &mut dyn ValidationSink,
        kind: ProfileLinkKind,
        name: &str,
        link: &str,
    ) -> Self {
        validate_name(sink, name);
        Self {
            id: ProfileLinkId::new(),
            kind,
            name: name.to_string(),
            link: Link::create(sink, link),
        }
    }

    /// Shorthand for a [`ProfileLinkKind::SocialLink`] entry.
    pub fn social_link(sink: &mut dyn ValidationSink, name: &str, link: &str) -> Self {
        Self::create(sink, ProfileLinkKind::SocialLink, name, link)
    }

    /// Shorthand for a [`ProfileLinkKind::SnsPlatform`] entry.
    pub fn sns_platform(sink: &mut dyn ValidationSink, name: &str, link: &str) -> Self {
        Self::create(sink, ProfileLinkKind::SnsPlatform, name, link)
    }

    pub fn reconstruct(id: ProfileLinkId, kind: ProfileLinkKind, name: String, link: Link) -> Self {
        Self {
            id,
            kind,
            name,
            link,
        }
    }

    pub fn id(&self) -> &ProfileLinkId {
        &self.id
    }

    pub fn kind(&self) -> ProfileLinkKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
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

    pub fn change_link(&self, sink: &mut dyn ValidationSink, link: &str) -> Self {
        Self {
            link: Link::create(sink, link),
            ..self.clone()
        }
    }
}
