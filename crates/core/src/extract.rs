//! Extraction pipeline: locate media of the enabled kinds, then filter.

use crate::filter::ResourceFilter;
use crate::locate::{locate_images, locate_videos};
use crate::media::MediaDescriptor;
use crate::parse::Document;
use crate::Result;

/// Configuration for media extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// List `<img>` elements.
    pub include_images: bool,
    /// List `<video>` elements.
    pub include_videos: bool,
    /// Only keep media whose URL matches this regex.
    pub pattern: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { include_images: true, include_videos: true, pattern: None }
    }
}

/// Media found in a page, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMedia {
    pub images: Vec<MediaDescriptor>,
    pub videos: Vec<MediaDescriptor>,
}

impl ExtractedMedia {
    /// Images then videos, the order they are reported in.
    pub fn into_vec(self) -> Vec<MediaDescriptor> {
        let mut all = self.images;
        all.extend(self.videos);
        all
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract media from a parsed document.
///
/// The filter pattern is compiled before anything is located, so an invalid
/// pattern fails the whole extraction.
///
/// ```rust
/// use mediascan_core::{Document, ExtractConfig, extract_media};
///
/// let doc = Document::parse(r#"<img src="a.png"><!-- <img src="b.jpg"> --><video src="c.mp4"></video>"#);
/// let config = ExtractConfig { pattern: Some(r"\.(png|mp4)$".to_string()), ..Default::default() };
///
/// let media = extract_media(&doc, &config).unwrap();
/// assert_eq!(media.images.len(), 1);
/// assert_eq!(media.videos.len(), 1);
/// ```
pub fn extract_media(doc: &Document, config: &ExtractConfig) -> Result<ExtractedMedia> {
    let filter = ResourceFilter::new(config.pattern.as_deref())?;
    extract_media_with_filter(doc, config, &filter)
}

/// Same as [`extract_media`] with an already compiled filter; `config.pattern` is ignored.
pub fn extract_media_with_filter(
    doc: &Document, config: &ExtractConfig, filter: &ResourceFilter,
) -> Result<ExtractedMedia> {
    let images = if config.include_images { filter.apply(locate_images(doc)?) } else { Vec::new() };
    let videos = if config.include_videos { filter.apply(locate_videos(doc)?) } else { Vec::new() };

    Ok(ExtractedMedia { images, videos })
}
