//! Media discovery over the live tree and comment-embedded markup.
//!
//! Each kind is located in two passes: first every matching element of the
//! live document, then every matching element inside each comment once the
//! comment text has been parsed as its own fragment. Comments found inside
//! those fragments are not scanned again.
//!
//! `<noscript>` content is raw text to the parser. Each one is parsed as a
//! fragment in place, so its media are listed in document order alongside
//! the elements around it.

use crate::media::{MediaDescriptor, MediaKind};
use crate::parse::{Document, Element};
use crate::Result;

/// Locate every element of `kind` in `doc`, live elements first, then those
/// embedded in comments.
pub fn locate(doc: &Document, kind: MediaKind) -> Result<Vec<MediaDescriptor>> {
    let mut found = scan(doc, kind)?;
    let live = found.len();

    for fragment in doc.comment_fragments() {
        found.extend(scan(&fragment, kind)?);
    }

    tracing::debug!(
        kind = kind.as_str(),
        live,
        commented = found.len() - live,
        "located media"
    );

    Ok(found)
}

/// Locate `<img>` elements.
pub fn locate_images(doc: &Document) -> Result<Vec<MediaDescriptor>> {
    locate(doc, MediaKind::Image)
}

/// Locate `<video>` elements.
pub fn locate_videos(doc: &Document) -> Result<Vec<MediaDescriptor>> {
    locate(doc, MediaKind::Video)
}

/// Single pass over one tree. Shared by live and comment scanning so both
/// match elements identically.
fn scan(doc: &Document, kind: MediaKind) -> Result<Vec<MediaDescriptor>> {
    let mut found = Vec::new();

    for element in doc.select(&format!("{}, noscript", kind.tag_name()))? {
        if element.tag_name() == "noscript" {
            found.extend(scan(&Document::parse_fragment(&element.text()), kind)?);
        } else {
            found.push(describe(&element, kind)?);
        }
    }

    Ok(found)
}

fn describe(element: &Element<'_>, kind: MediaKind) -> Result<MediaDescriptor> {
    let source = match kind {
        MediaKind::Image => element.attr("src").map(str::to_string),
        MediaKind::Video => video_source(element)?,
    };
    // Alt comes from the element itself for both kinds; <source> children are not consulted.
    let alt = element.attr("alt").map(str::to_string);

    Ok(MediaDescriptor::new(kind, source, alt))
}

/// Own `src`, else the first `<source>` descendant's `src`.
fn video_source(video: &Element<'_>) -> Result<Option<String>> {
    if let Some(src) = video.attr("src") {
        return Ok(Some(src.to_string()));
    }

    Ok(video
        .select_first("source")?
        .and_then(|source| source.attr("src"))
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image(src: &str, alt: Option<&str>) -> MediaDescriptor {
        MediaDescriptor::new(MediaKind::Image, Some(src.to_string()), alt.map(str::to_string))
    }

    #[test]
    fn test_live_image() {
        let doc = Document::parse(r#"<img src="a.png" alt="Cat">"#);
        assert_eq!(locate_images(&doc).unwrap(), vec![image("a.png", Some("Cat"))]);
    }

    #[test]
    fn test_commented_image() {
        let doc = Document::parse(r#"<!-- <img src="b.png"> -->"#);
        let images = locate_images(&doc).unwrap();

        assert_eq!(images, vec![image("b.png", None)]);
        assert_eq!(images[0].to_string(), "IMAGE b.png");
    }

    #[test]
    fn test_live_before_commented() {
        let html = r#"
            <html><body>
                <!-- <img src="c1.png"><img src="c2.png"> -->
                <img src="l1.png">
                <!-- <img src="c3.png"> -->
                <p><img src="l2.png" alt="two"></p>
            </body></html>
        "#;
        let doc = Document::parse(html);
        let sources: Vec<String> = locate_images(&doc)
            .unwrap()
            .into_iter()
            .map(|m| m.source.unwrap_or_default())
            .collect();

        assert_eq!(sources, vec!["l1.png", "l2.png", "c1.png", "c2.png", "c3.png"]);
    }

    #[test]
    fn test_comment_scan_matches_live_scan() {
        let markup = r#"<div><img src="x.png" alt="X"><video><source src="y.mp4"></video><img></div>"#;
        let live = Document::parse(markup);
        let hidden = Document::parse(&format!("<!--{}-->", markup));

        for kind in [MediaKind::Image, MediaKind::Video] {
            assert_eq!(locate(&live, kind).unwrap(), locate(&hidden, kind).unwrap());
        }
    }

    #[rstest]
    #[case(r#"<video src="own.mp4"><source src="child.mp4"></video>"#, Some("own.mp4"))]
    #[case(r#"<video><source src="v.mp4"><source src="w.webm"></video>"#, Some("v.mp4"))]
    #[case(r#"<video><div><source src="deep.mp4"></div></video>"#, Some("deep.mp4"))]
    #[case(r#"<video src=""><source src="child.mp4"></video>"#, Some(""))]
    #[case(r#"<video><source type="video/mp4"></video>"#, None)]
    #[case(r#"<video controls></video>"#, None)]
    fn test_video_source(#[case] html: &str, #[case] expected: Option<&str>) {
        let doc = Document::parse(html);
        let videos = locate_videos(&doc).unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].source.as_deref(), expected);
    }

    #[test]
    fn test_video_without_source_serializes_empty_url() {
        let doc = Document::parse("<video></video>");
        let videos = locate_videos(&doc).unwrap();
        assert_eq!(videos[0].to_string(), "VIDEO ");
    }

    #[test]
    fn test_video_alt_has_no_source_fallback() {
        let doc = Document::parse(r#"<video><source src="v.mp4" alt="child alt"></video>"#);
        let videos = locate_videos(&doc).unwrap();
        assert_eq!(videos[0].alt, None);

        let doc = Document::parse(r#"<video alt="own alt"><source src="v.mp4"></video>"#);
        let videos = locate_videos(&doc).unwrap();
        assert_eq!(videos[0].alt.as_deref(), Some("own alt"));
    }

    #[test]
    fn test_image_without_src() {
        let doc = Document::parse(r#"<img alt="no source">"#);
        let images = locate_images(&doc).unwrap();
        assert_eq!(images[0].source, None);
        assert_eq!(images[0].to_string(), r#"IMAGE  "no source""#);
    }

    #[test]
    fn test_kinds_are_separate() {
        let doc = Document::parse(r#"<img src="a.png"><video src="b.mp4"></video>"#);
        assert_eq!(locate_images(&doc).unwrap().len(), 1);
        assert_eq!(locate_videos(&doc).unwrap().len(), 1);
    }

    #[test]
    fn test_noscript_image() {
        let doc = Document::parse(r#"<body><noscript><img src="n.png" alt="N"></noscript></body>"#);
        assert_eq!(locate_images(&doc).unwrap(), vec![image("n.png", Some("N"))]);
    }

    #[test]
    fn test_noscript_keeps_document_order() {
        let html = r#"
            <body>
                <!-- <img src="c.png"> -->
                <img src="a.png">
                <noscript><img src="b.png"><video src="v.mp4"></video></noscript>
                <img src="d.png">
            </body>
        "#;
        let doc = Document::parse(html);
        let sources: Vec<String> = locate_images(&doc)
            .unwrap()
            .into_iter()
            .map(|m| m.source.unwrap_or_default())
            .collect();

        assert_eq!(sources, vec!["a.png", "b.png", "d.png", "c.png"]);
        assert_eq!(locate_videos(&doc).unwrap()[0].source.as_deref(), Some("v.mp4"));
    }

    #[test]
    fn test_noscript_inside_comment() {
        let doc = Document::parse(r#"<!-- <noscript><img src="deep.png"></noscript> -->"#);
        assert_eq!(locate_images(&doc).unwrap(), vec![image("deep.png", None)]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert!(locate_images(&doc).unwrap().is_empty());
        assert!(locate_videos(&doc).unwrap().is_empty());
    }
}
