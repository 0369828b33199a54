//! The line protocol between the extractor and the report generator.
//!
//! A report is a header line followed by one record line per resource:
//!
//! ```text
//! PATH http://x.test/p
//! IMAGE a.png "Cat"
//! VIDEO clip.mp4
//! ```
//!
//! Decoding is best effort. Lines that do not carry at least a kind and a URL
//! are dropped rather than reported as errors.

use std::io::{BufRead, Write};

use crate::media::{DEFAULT_ALT, MediaDescriptor, ReportDocument, ResourceRecord};
use crate::resolve::resolve_url;
use crate::Result;

/// Prefix of the header line carrying the analyzed page URL.
pub const HEADER_PREFIX: &str = "PATH ";

/// Header line for a report about `url`.
pub fn header_line(url: &str) -> String {
    format!("{}{}", HEADER_PREFIX, url.trim())
}

/// Record line for one descriptor.
pub fn encode_record(media: &MediaDescriptor) -> String {
    media.to_string()
}

/// Write a complete report: header first, then records in the given order.
pub fn write_report<W: Write>(writer: &mut W, url: &str, media: &[MediaDescriptor]) -> Result<()> {
    writeln!(writer, "{}", header_line(url))?;
    for item in media {
        writeln!(writer, "{}", item)?;
    }
    writer.flush()?;
    Ok(())
}

/// Base path from a header line, or `None` if the line is not a header.
pub fn decode_header(line: &str) -> Option<&str> {
    line.trim_end().strip_prefix(HEADER_PREFIX)
}

/// Decode a record line, resolving its URL against `base`.
///
/// The line is split on single spaces into at most three parts, so an alt
/// segment containing spaces stays whole. Its double quotes are removed. When
/// the alt segment is absent the record gets [`DEFAULT_ALT`]; an empty quoted
/// alt stays empty.
pub fn decode_record(line: &str, base: &str) -> Option<ResourceRecord> {
    let mut parts = line.trim_end().splitn(3, ' ');

    let kind = parts.next()?;
    let Some(url) = parts.next() else {
        tracing::trace!(line, "dropping record line without url");
        return None;
    };
    let alt = match parts.next() {
        Some(rest) => rest.replace('"', ""),
        None => DEFAULT_ALT.to_string(),
    };

    Some(ResourceRecord {
        kind: kind.to_string(),
        relative_url: url.to_string(),
        absolute_url: resolve_url(base, url),
        alt,
    })
}

/// Decode a whole report held in memory.
pub fn parse_report(input: &str) -> ReportDocument {
    decode_lines(input.lines())
}

/// Decode a report from a reader until end of input.
pub fn read_report<R: BufRead>(reader: R) -> Result<ReportDocument> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(decode_lines(lines.iter().map(String::as_str)))
}

fn decode_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> ReportDocument {
    let mut lines = lines.into_iter().peekable();

    let base_url = match lines.peek().and_then(|first| decode_header(first)) {
        Some(path) => {
            let path = path.to_string();
            lines.next();
            path
        }
        None => String::new(),
    };

    let records = lines.filter_map(|line| decode_record(line, &base_url)).collect();

    ReportDocument { base_url, records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn test_write_report() {
        let media = vec![
            MediaDescriptor::new(MediaKind::Image, Some("a.png".into()), Some("Cat".into())),
            MediaDescriptor::new(MediaKind::Video, None, None),
        ];
        let mut out = Vec::new();
        write_report(&mut out, " http://x.test/p \n", &media).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "PATH http://x.test/p\nIMAGE a.png \"Cat\"\nVIDEO \n");
    }

    #[test]
    fn test_multi_word_alt_survives() {
        let media = MediaDescriptor::new(MediaKind::Image, Some("a.png".into()), Some("A  black cat ".into()));
        let record = decode_record(&encode_record(&media), "").unwrap();

        assert_eq!(record.kind, "IMAGE");
        assert_eq!(record.relative_url, "a.png");
        assert_eq!(record.alt, "A  black cat ");
    }

    #[test]
    fn test_absent_and_empty_alt_differ() {
        let absent = decode_record("IMAGE a.png", "").unwrap();
        let empty = decode_record("IMAGE a.png \"\"", "").unwrap();

        assert_eq!(absent.alt, DEFAULT_ALT);
        assert_eq!(empty.alt, "");
    }

    #[test]
    fn test_short_lines_are_dropped() {
        assert!(decode_record("", "").is_none());
        assert!(decode_record("IMAGE", "").is_none());
        // Encoded descriptor without a source or alt, after trailing whitespace is trimmed.
        assert!(decode_record("VIDEO ", "").is_none());
    }

    #[test]
    fn test_missing_source_with_alt() {
        let record = decode_record("IMAGE  \"no source\"", "http://x.test/").unwrap();
        assert_eq!(record.relative_url, "");
        assert_eq!(record.alt, "no source");
    }

    #[test]
    fn test_parse_report_resolves_against_header() {
        let doc = parse_report("PATH http://x.test/dir/\nIMAGE a.png \"Cat\"\n");

        assert_eq!(doc.base_url, "http://x.test/dir/");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.records[0].absolute_url, "http://x.test/dir/a.png");
        assert_eq!(doc.records[0].alt, "Cat");
    }

    #[test]
    fn test_parse_report_without_header() {
        let doc = parse_report("IMAGE a.png\nVIDEO https://cdn.test/v.mp4\n");

        assert_eq!(doc.base_url, "");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.records[0].absolute_url, "a.png");
        assert_eq!(doc.records[1].absolute_url, "https://cdn.test/v.mp4");
    }

    #[test]
    fn test_parse_report_blank_input() {
        assert!(parse_report("").is_empty());
        assert!(parse_report("\n\n").is_empty());
        assert_eq!(parse_report("PATH http://x.test/\n").base_url, "http://x.test/");
    }

    #[test]
    fn test_parse_report_keeps_order_and_skips_junk() {
        let input = "PATH http://x.test/\r\nIMAGE b.png\r\n\r\nbogus\r\nIMAGE a.png\r\nVIDEO c.mp4\r\n";
        let doc = parse_report(input);
        let urls: Vec<&str> = doc.records.iter().map(|r| r.relative_url.as_str()).collect();

        assert_eq!(urls, vec!["b.png", "a.png", "c.mp4"]);
    }

    #[test]
    fn test_read_report_from_reader() {
        let input = b"PATH http://x.test/p\nVIDEO v.mp4 \"intro clip\"\n";
        let doc = read_report(&input[..]).unwrap();

        assert_eq!(doc.records[0].absolute_url, "http://x.test/v.mp4");
        assert_eq!(doc.records[0].alt, "intro clip");
    }
}
