use regex::Regex;

use crate::media::MediaDescriptor;
use crate::Result;

/// Regex filter over media source URLs.
///
/// The pattern is searched for anywhere in the URL, not matched against the
/// whole of it. A filter built without a pattern accepts everything.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    pattern: Option<Regex>,
}

impl ResourceFilter {
    /// Compile a filter from an optional pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MediaError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(Self { pattern })
    }

    /// Whether a pattern is configured.
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Whether the descriptor's source matches. A missing source is matched as "".
    pub fn accepts(&self, media: &MediaDescriptor) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(media.source_or_empty()),
            None => true,
        }
    }

    /// Keep accepted descriptors, preserving order.
    pub fn apply(&self, media: Vec<MediaDescriptor>) -> Vec<MediaDescriptor> {
        if !self.is_active() {
            return media;
        }

        let before = media.len();
        let kept: Vec<MediaDescriptor> = media.into_iter().filter(|m| self.accepts(m)).collect();
        tracing::debug!(before, after = kept.len(), "applied resource filter");
        kept
    }
}
