//! HTML parsing and DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the tree with CSS selectors. Besides the live tree, a
//! document exposes its comment nodes, whose text can be parsed again as an
//! independent fragment.
//!
//! # Example
//!
//! ```rust
//! use mediascan_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <img src="live.png">
//!             <!-- <img src="hidden.png"> -->
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(doc.select("img").unwrap().len(), 1);
//!
//! let fragments = doc.comment_fragments();
//! assert_eq!(fragments[0].select("img").unwrap()[0].attr("src"), Some("hidden.png"));
//! ```

use scraper::{Html, Selector};

use crate::{MediaError, Result};

/// Represents a parsed HTML document or fragment.
///
/// A Document owns its tree. Fragments produced from comment text are new
/// documents with no link back to the tree they were found in.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a complete HTML document.
    ///
    /// Parsing is lenient: malformed markup is repaired the way a browser
    /// would, so this never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses a standalone HTML fragment, such as the body of a comment.
    pub fn parse_fragment(html: &str) -> Self {
        Self { html: Html::parse_fragment(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Text of every comment node, in document order.
    ///
    /// This includes comments outside the `<html>` element, e.g. between the
    /// doctype and the root.
    pub fn comments(&self) -> Vec<&str> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_comment().map(|comment| &**comment))
            .collect()
    }

    /// Each comment of this document parsed as its own fragment.
    pub fn comment_fragments(&self) -> Vec<Document> {
        self.comments().into_iter().map(Document::parse_fragment).collect()
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| MediaError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use mediascan_core::parse::Document;
///
/// let html = r#"<video><source src="v.mp4"></video>"#;
/// let doc = Document::parse(html);
/// let video = &doc.select("video").unwrap()[0];
///
/// assert_eq!(video.attr("src"), None);
/// assert_eq!(video.select_first("source").unwrap().unwrap().attr("src"), Some("v.mp4"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present and `Some("")` if it is
    /// present without a value.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Concatenated text of all descendant text nodes.
    ///
    /// For `<noscript>` this is the unparsed markup it contains, since the
    /// parser treats its content as raw text.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// First descendant matching the selector, in document order.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).next().map(|el| Element { element: el }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <!-- before root -->
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <img src="one.png" alt="One">
            <!-- <img src="two.png"> -->
            <div>
                <img src="three.png">
                <!-- <p>nothing</p> -->
            </div>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML);
        let images = doc.select("img").unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].attr("src"), Some("one.png"));
        assert_eq!(images[0].attr("alt"), Some("One"));
        assert_eq!(images[1].attr("alt"), None);
        assert_eq!(images[1].tag_name(), "img");
    }

    #[test]
    fn test_comments_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML);
        let comments: Vec<String> = doc.comments().iter().map(|c| c.trim().to_string()).collect();

        assert_eq!(
            comments,
            vec!["before root", r#"<img src="two.png">"#, "<p>nothing</p>"]
        );
    }

    #[test]
    fn test_comment_fragments_are_independent() {
        let doc = Document::parse(SAMPLE_HTML);
        let fragments = doc.comment_fragments();

        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].select("img").unwrap().is_empty());
        assert_eq!(fragments[1].select("img").unwrap()[0].attr("src"), Some("two.png"));
        assert!(fragments[2].comments().is_empty());
    }

    #[test]
    fn test_empty_attribute_is_present() {
        let doc = Document::parse(r#"<img src="" alt>"#);
        let img = &doc.select("img").unwrap()[0];
        assert_eq!(img.attr("src"), Some(""));
        assert_eq!(img.attr("alt"), Some(""));
    }

    #[test]
    fn test_noscript_content_is_raw_text() {
        let doc = Document::parse(r#"<body><noscript><img src="n.png"></noscript></body>"#);
        let noscript = &doc.select("noscript").unwrap()[0];

        assert!(doc.select("img").unwrap().is_empty());
        assert_eq!(noscript.text(), r#"<img src="n.png">"#);
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(MediaError::HtmlParseError(_))));
    }
}
