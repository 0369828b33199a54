use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use mediascan_core::{
    Document, Downloader, ExtractConfig, FetchConfig, MediaDescriptor, ResourceFilter, extract_media_with_filter,
    fetch_file, fetch_stdin, fetch_url, resolve_url, write_report,
};
use owo_colors::OwoColorize;

mod echo;
mod logging;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Extract media resources from a webpage";

/// List the images and videos referenced by a web page, including markup
/// hidden inside HTML comments
#[derive(Parser, Debug)]
#[command(name = "mediascan")]
#[command(version)]
#[command(about = ABOUT, long_about = None)]
struct Args {
    /// URL of the webpage to analyze (a local HTML file or "-" for stdin also works)
    #[arg(value_name = "URL", required_unless_present = "completions")]
    url: Option<String>,

    /// Only list resources matching this regex pattern
    #[arg(short = 'r', value_name = "PATTERN")]
    regex: Option<String>,

    /// Do not list images
    #[arg(short = 'i')]
    no_images: bool,

    /// Do not list videos
    #[arg(short = 'v')]
    no_videos: bool,

    /// Download resources to this path
    #[arg(short = 'p', value_name = "PATH")]
    path: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Show progress and debug logging on stderr
    #[arg(long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }

    fn extract_config(&self) -> ExtractConfig {
        ExtractConfig { include_images: !self.no_images, include_videos: !self.no_videos, pattern: self.regex.clone() }
    }
}

fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

async fn load_page(input: &str, config: &FetchConfig, verbose: bool) -> anyhow::Result<String> {
    if input == "-" {
        if verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if is_remote(input) {
        if verbose {
            echo::print_step(1, 4, &format!("Fetching from {}", input.bright_white().underline()));
        }
        fetch_url(input, config).await.context("Failed to fetch URL")
    } else {
        if verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Download every resource in order. Failures are reported and skipped.
async fn download_all(media: &[MediaDescriptor], page_url: &str, dir: &Path, config: &FetchConfig) -> usize {
    let downloader = match Downloader::new(config) {
        Ok(downloader) => downloader,
        Err(e) => {
            echo::print_warning(&format!("Downloads disabled: {}", e));
            return 0;
        }
    };

    let mut saved = 0;
    for item in media {
        let source = item.source_or_empty();
        if source.is_empty() {
            tracing::debug!(kind = item.kind.as_str(), "skipping download without url");
            continue;
        }

        let url = resolve_url(page_url, source);
        match downloader.download(&url, dir).await {
            Ok(path) => {
                saved += 1;
                tracing::debug!(url = %url, path = %path.display(), "downloaded");
            }
            Err(e) => echo::print_warning(&format!("Error downloading {}: {}", url, e)),
        }
    }

    saved
}

async fn run(args: &Args) -> anyhow::Result<()> {
    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "mediascan", &mut io::stdout());
        return Ok(());
    }

    let input = args.url.as_deref().context("A URL to analyze is required")?;

    if args.verbose {
        echo::print_banner(ABOUT);
    }

    // A bad pattern must fail before any fetch.
    let filter = ResourceFilter::new(args.regex.as_deref()).context("Invalid -r pattern")?;

    let fetch_config = args.fetch_config();
    let html = load_page(input, &fetch_config, args.verbose).await?;

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        echo::print_step(2, 4, "Locating media");
    }

    let doc = Document::parse(&html);
    let extracted = extract_media_with_filter(&doc, &args.extract_config(), &filter)
        .context("Failed to locate media")?;

    if args.verbose {
        if let Some(title) = doc.title() {
            echo::print_detail("Title", title.trim());
        }
        echo::print_detail("Images", &extracted.images.len().to_string());
        echo::print_detail("Videos", &extracted.videos.len().to_string());
    }

    let media = extracted.into_vec();

    if let Some(dir) = &args.path {
        if args.verbose {
            echo::print_step(3, 4, &format!("Downloading into {}", dir.display().bright_white()));
        }
        let saved = download_all(&media, input, dir, &fetch_config).await;
        if args.verbose {
            echo::print_success(&format!("Saved {} of {} resources", saved, media.len()));
        }
    } else if args.verbose {
        echo::print_info("No download path given, skipping downloads");
    }

    if args.verbose {
        echo::print_step(4, 4, "Writing report");
    }

    output::to_stdout(|out| write_report(out, input, &media).context("Failed to write report"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    run(&args).await
}
