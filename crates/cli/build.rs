use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut extract = clap::Command::new("mediascan")
        .version("1.0.0")
        .about("Extract media resources from a webpage")
        .arg(clap::arg!([URL] "URL of the webpage to analyze (a local HTML file or '-' for stdin also works)"))
        .arg(clap::arg!(regex: -r <PATTERN> "Only list resources matching this regex pattern"))
        .arg(clap::arg!(no_images: -i "Do not list images"))
        .arg(clap::arg!(no_videos: -v "Do not list videos"))
        .arg(
            clap::arg!(path: -p <PATH> "Download resources to this path")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests"))
        .arg(clap::arg!(--verbose "Show progress and debug logging on stderr"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        );

    let mut report = clap::Command::new("mediascan-report")
        .version("1.0.0")
        .about("Render a mediascan listing as an HTML page")
        .arg(clap::arg!(--title <TEXT> "Page title and heading"))
        .arg(clap::arg!(--verbose "Show progress and debug logging on stderr"));

    for shell in [
        clap_complete::shells::Shell::Bash,
        clap_complete::shells::Shell::Zsh,
        clap_complete::shells::Shell::Fish,
        clap_complete::shells::Shell::PowerShell,
    ] {
        clap_complete::generate_to(shell, &mut extract, "mediascan", &completions_dir).unwrap();
        clap_complete::generate_to(shell, &mut report, "mediascan-report", &completions_dir).unwrap();
    }

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
