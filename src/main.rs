use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use teddit::cli::Cli;
use teddit::config::Config;
use teddit::errors::TedditResult;
use teddit::services::{FrontPageService, Reporter};
use teddit::sources::{FileFeedClient, HttpFeedClient};

fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> TedditResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let limit = cli.limit.or(config.limit);

    let page = match &cli.file {
        Some(path) => {
            let service = FrontPageService::new(FileFeedClient::new(path));
            service.collect(&[path.display().to_string()])?
        }
        None => {
            let service = FrontPageService::new(HttpFeedClient::from_config(&config)?)
                .with_limit(limit)
                .with_comments(cli.comments, &config.comments_url);
            service.collect(&cli.feed_urls(&config.feed_url))?
        }
    };

    let reporter = Reporter::new(cli.sort)
        .with_format(cli.format)
        .with_comments(page.comments);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reporter.render(&page.stories) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    if page.skipped > 0 {
        eprintln!("Skipped {} item(s) without a title", page.skipped);
    }

    Ok(())
}
