// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, so stdout carries just the sitemap)
// 3. Crawl the site, racing the crawl against Ctrl-C
// 4. Print or save the sitemap
// 5. Exit with proper code (0 = success or nothing to do, 1 = error,
//    130 = interrupted)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Format};
use sitemap_builder::{Crawler, Sitemap};

/// Exit status after Ctrl-C, following the 128 + SIGINT convention
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    // A missing domain is not an error: explain and do nothing
    let Some(domain) = cli.root_domain() else {
        println!("Please provide the website domain using the --domain flag");
        println!("Example: sitemap-builder --domain https://example.com --depth 3");
        return Ok(0);
    };

    let crawler = Crawler::http(cli.crawl_config()).context("Error building sitemap")?;

    // The crawl is the only thing running; if Ctrl-C wins the race the crawl
    // future is dropped along with any in-flight request
    let sitemap = tokio::select! {
        result = crawler.crawl(domain) => result.context("Error building sitemap")?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted, no sitemap written");
            return Ok(EXIT_INTERRUPTED);
        }
    };

    let rendered = render(&sitemap, cli.format).context("Error encoding sitemap")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Error writing sitemap to {}", path.display()))?;
            info!(path = %path.display(), pages = sitemap.len(), "sitemap written");
        }
        None => println!("{}", rendered),
    }

    Ok(0)
}

fn render(sitemap: &Sitemap, format: Format) -> Result<String> {
    match format {
        Format::Xml => sitemap.to_xml(),
        Format::Json => sitemap.to_json(),
    }
}

// -v / -vv pick the level; without them RUST_LOG is honoured, defaulting to warn
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("sitemap_builder=info"),
        _ => EnvFilter::new("sitemap_builder=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::select!?
//    - Waits on several futures and runs the branch of whichever finishes first
//    - The other futures are dropped (cancelled)
//    - Here it lets Ctrl-C stop a crawl that is stuck on a slow server
//
// 2. What is let-else?
//    - let Some(x) = expr else { ... };
//    - Binds x if the pattern matches, otherwise runs the else block,
//      which must leave the function (return, break, etc.)
//
// 3. Why write logs to stderr?
//    - stdout is the sitemap; people pipe it into files
//    - Progress messages on stdout would corrupt the XML
// -----------------------------------------------------------------------------
