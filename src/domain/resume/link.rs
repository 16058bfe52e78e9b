//! HTTPS link value object.

use http::Uri;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{is_blank, required_message, ValidationSink};

const FIELD: &str = "link";
pub const INVALID_URL_MESSAGE: &str = "URLの形式が正しくありません。";

/// An absolute `https://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Link(String);

impl Link {
    /// Validates and wraps a URL.
    ///
    /// Blank input is reported as required; anything that is not an
    /// absolute URL with the `https` scheme and a host is reported as an
    /// invalid URL.
    pub fn create(sink: &mut dyn ValidationSink, value: &str) -> Self {
        if is_blank(value) {
            sink.add_error(FIELD, &required_message("URL"));
        } else if !is_https_url(value) {
            sink.add_error(FIELD, INVALID_URL_MESSAGE);
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

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_https_url(value: &str) -> bool {
    let Ok(uri) = value.parse::<Uri>() else {
        return false;
    };
    let has_host = uri.host().is_some_and(|host| !host.is_empty());
    uri.scheme_str() == Some("https") && has_host
}
