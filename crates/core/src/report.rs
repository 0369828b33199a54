//! HTML rendering of a decoded resource report.
//!
//! The page is a single table with one row per resource. Rows carry the
//! resource kind and absolute URL as `data-type` / `data-full-url` attributes
//! for the page script; the visible cells hold the URL as extracted and its
//! alt text.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::media::{ReportDocument, ResourceRecord};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Configuration for the generated page.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Page title and main heading.
    pub title: String,
    /// Subtitle shown under the heading.
    pub subtitle: String,
    /// Local stylesheet linked after Bootstrap.
    pub stylesheet: String,
    /// Local script loaded at the end of the body.
    pub script: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Media Viewer".to_string(),
            subtitle: "images and videos".to_string(),
            stylesheet: "styles.css".to_string(),
            script: "script.js".to_string(),
        }
    }
}

/// Render `report` as a standalone HTML document.
///
/// ```rust
/// use mediascan_core::{ReportConfig, parse_report, render_report};
///
/// let report = parse_report("PATH http://x.test/dir/\nIMAGE a.png \"Cat\"\n");
/// let html = render_report(&report, &ReportConfig::default());
///
/// assert!(html.contains(r#"data-full-url="http://x.test/dir/a.png""#));
/// assert!(html.contains("<td>Cat</td>"));
/// ```
pub fn render_report(report: &ReportDocument, config: &ReportConfig) -> String {
    let mut html = String::with_capacity(2048 + report.len() * 160);

    html.push_str(&render_head(config));
    html.push_str(&render_heading(report, config));

    html.push_str(
        r#"
    <div class="container content m-5">
        <table id="resource-table" class="table table-striped table-hover mx-auto">
            <colgroup>
                <col>
                <col>
            </colgroup>
            <thead>
                <tr>
                    <th scope="col">Resource</th>
                    <th scope="col">Alt</th>
                </tr>
            </thead>
            <tbody>"#,
    );

    for record in &report.records {
        html.push_str(&render_row(record));
    }

    html.push_str(
        r#"
            </tbody>
        </table>

        <div class="container">
            <div class="row">
                <div class="col text-center">
                    <button class="btn btn-primary" id="carrousel">Carousel</button>
                </div>
                <div class="col text-center">
                    <button class="btn btn-primary" id="galerie">Gallery</button>
                </div>
            </div>
        </div>
    </div>

    <div class="image-popup"></div>
"#,
    );

    html.push_str(&format!(
        r#"
    <script src="{}"></script>
    <script src="{}"></script>
</body>
</html>
"#,
        BOOTSTRAP_JS,
        encode_double_quoted_attribute(&config.script)
    ));

    html
}

fn render_head(config: &ReportConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{title}</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="{stylesheet}">
    <link href="{bootstrap}" rel="stylesheet">
</head>
<body>"#,
        title = encode_text(&config.title),
        stylesheet = encode_double_quoted_attribute(&config.stylesheet),
        bootstrap = BOOTSTRAP_CSS,
    )
}

fn render_heading(report: &ReportDocument, config: &ReportConfig) -> String {
    let mut heading = format!(
        r#"
    <h1 class="text-center m-4">{}</h1>
    <h2 class="text-center fs-5">{}</h2>"#,
        encode_text(&config.title),
        encode_text(&config.subtitle)
    );

    if !report.base_url.is_empty() {
        heading.push_str(&format!(
            r#"
    <p class="text-center text-muted"><a href="{}">{}</a></p>"#,
            encode_double_quoted_attribute(&report.base_url),
            encode_text(&report.base_url)
        ));
    }

    heading
}

fn render_row(record: &ResourceRecord) -> String {
    format!(
        r#"
                <tr class="resource-row" data-full-url="{full_url}" data-type="{kind}">
                    <td>{url}</td>
                    <td>{alt}</td>
                </tr>"#,
        full_url = encode_double_quoted_attribute(&record.absolute_url),
        kind = encode_double_quoted_attribute(&record.kind),
        url = encode_text(&record.relative_url),
        alt = encode_text(&record.alt),
    )
}
