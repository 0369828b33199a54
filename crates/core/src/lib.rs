pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod filter;
pub mod locate;
pub mod media;
pub mod parse;
pub mod protocol;
pub mod report;
pub mod resolve;

pub use error::{MediaError, Result};
pub use extract::{ExtractConfig, ExtractedMedia, extract_media, extract_media_with_filter};
#[cfg(feature = "fetch")]
pub use fetch::{Downloader, FetchConfig, download_filename, fetch_file, fetch_stdin, fetch_url};
pub use filter::ResourceFilter;
pub use locate::{locate, locate_images, locate_videos};
pub use media::{DEFAULT_ALT, MediaDescriptor, MediaKind, ReportDocument, ResourceRecord};
pub use parse::{Document, Element};
pub use protocol::{decode_record, encode_record, header_line, parse_report, read_report, write_report};
pub use report::{ReportConfig, render_report};
pub use resolve::{has_network_location, resolve_url};
