use std::io::Write;

use anyhow::Context;
use clap::Parser;
use mediascan_core::{ReportConfig, parse_report, render_report};
use tokio::io::AsyncReadExt;

mod echo;
mod logging;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Render a mediascan listing as an HTML page";

/// Read `mediascan` output on stdin and write an HTML table of the resources
/// to stdout
#[derive(Parser, Debug)]
#[command(name = "mediascan-report")]
#[command(version)]
#[command(about = ABOUT, long_about = None)]
struct Args {
    /// Page title and heading
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Show progress and debug logging on stderr
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        match &self.title {
            Some(title) => ReportConfig { title: title.clone(), ..Default::default() },
            None => ReportConfig::default(),
        }
    }
}

async fn read_stdin() -> std::io::Result<String> {
    let mut buffer = String::new();
    tokio::io::stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    if args.verbose {
        echo::print_banner(ABOUT);
        echo::print_step(1, 2, "Reading listing from stdin");
    }

    let input = tokio::select! {
        read = read_stdin() => read.context("Failed to read from stdin")?,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted while reading stdin");
            // The blocking stdin reader cannot be cancelled, so leave without waiting on it.
            std::process::exit(0);
        }
    };

    let report = parse_report(&input);

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(input.len()));
        if report.base_url.is_empty() {
            echo::print_warning("No PATH header, URLs are left as written");
        } else {
            echo::print_detail("Base", &report.base_url);
        }
        echo::print_detail("Resources", &report.len().to_string());
        echo::print_step(2, 2, "Rendering HTML");
    }

    let html = render_report(&report, &args.report_config());

    if args.verbose {
        if report.is_empty() {
            echo::print_info("Listing has no resources, rendering an empty table");
        } else {
            echo::print_success(&format!("Rendered {} rows", report.len()));
        }
    }

    output::to_stdout(|out| out.write_all(html.as_bytes()).context("Failed to write HTML"))
}
