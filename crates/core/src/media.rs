//! Media descriptors and resource records.
//!
//! A [`MediaDescriptor`] is what the locator finds in a page. Once written to
//! the line format and read back by the report stage it becomes a
//! [`ResourceRecord`], which additionally carries the resolved absolute URL.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Alt text used by the report when a record line carries no alt segment.
pub const DEFAULT_ALT: &str = "Client Image";

/// Kind of media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// `<img>` elements.
    Image,
    /// `<video>` elements.
    Video,
}

impl MediaKind {
    /// Tag name matched in the HTML tree.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Video => "video",
        }
    }

    /// Token used for this kind in the line format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            _ => Err(format!("Invalid media kind: {}. Valid options: IMAGE, VIDEO", s)),
        }
    }
}

/// One media element discovered in a page.
///
/// `source` is `None` when the element has no usable URL attribute and `alt`
/// is `None` when it has no alt attribute. An attribute that is present but
/// empty is kept as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub source: Option<String>,
    pub alt: Option<String>,
}

impl MediaDescriptor {
    pub fn new(kind: MediaKind, source: Option<String>, alt: Option<String>) -> Self {
        Self { kind, source, alt }
    }

    /// The source URL, or an empty string when there is none.
    pub fn source_or_empty(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }
}

/// Record line encoding: `<KIND> <url> ["<alt>"]`.
impl fmt::Display for MediaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, single_line(self.source_or_empty()))?;
        if let Some(alt) = &self.alt {
            write!(f, " \"{}\"", single_line(alt))?;
        }
        Ok(())
    }
}

/// Line breaks inside attribute values would split a record across lines.
fn single_line(value: &str) -> Cow<'_, str> {
    if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// A resource decoded from a record line, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Kind token exactly as it appeared in the line.
    pub kind: String,
    /// URL as written by the extractor.
    pub relative_url: String,
    /// `relative_url` resolved against the report's base path.
    pub absolute_url: String,
    pub alt: String,
}

impl ResourceRecord {
    /// Parsed kind, if the token is one of the known kinds.
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.kind.parse().ok()
    }
}

/// A decoded report: the analyzed page plus its resources in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    pub base_url: String,
    pub records: Vec<ResourceRecord>,
}

impl ReportDocument {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
