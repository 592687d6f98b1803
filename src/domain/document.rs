// SPDX-License-Identifier: MPL-2.0
//! Document handle and metadata.

use std::fmt;
use std::sync::Arc;

/// Handle of the document shown by the viewer (usually a URL).
///
/// Cheap to clone: render requests carry a copy each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentUrl(Arc<str>);

impl DocumentUrl {
    /// Trims the input and rejects blank handles.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Arc::from(trimmed)))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the rendering engine reports once a document is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// Raw page count. Zero is a load failure, not an empty viewer.
    pub total_pages: u32,
}

impl DocumentMetadata {
    #[must_use]
    pub fn new(total_pages: u32) -> Self {
        Self { total_pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_blank() {
        let url = DocumentUrl::parse("  https://files.example/doc.pdf \n").unwrap();
        assert_eq!(url.as_str(), "https://files.example/doc.pdf");
        assert!(DocumentUrl::parse("   ").is_none());
    }
}
