use std::path::PathBuf;

use clap::Parser;

use crate::services::{OutputFormat, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "teddit")]
#[command(about = "Print the front page of a Reddit-style JSON feed")]
#[command(version)]
pub struct Cli {
    /// Feed URLs to merge, in order (defaults to TEDDIT_FEED_URL)
    pub urls: Vec<String>,

    /// Number of stories to request from each feed
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Order of the printed stories
    #[arg(short, long, value_enum, default_value_t = SortOrder::Source)]
    pub sort: SortOrder,

    /// Also print up to N top-level comments under each story
    #[arg(short, long, value_name = "N", conflicts_with = "file")]
    pub comments: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read a saved feed payload instead of fetching one
    #[arg(short, long, value_name = "PATH", conflicts_with = "urls")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Feed URLs to fetch, falling back to the configured default
    pub fn feed_urls(&self, default_url: &str) -> Vec<String> {
        if self.urls.is_empty() {
            vec![default_url.to_string()]
        } else {
            self.urls.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["teddit"]).unwrap();

        assert!(cli.urls.is_empty());
        assert_eq!(cli.limit, None);
        assert_eq!(cli.sort, SortOrder::Source);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.feed_urls("https://www.reddit.com/hot.json"), vec![
            "https://www.reddit.com/hot.json".to_string()
        ]);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "teddit",
            "https://www.reddit.com/r/rust/hot.json",
            "https://www.reddit.com/r/aww/hot.json",
            "--limit",
            "2",
            "--sort",
            "score",
            "--comments",
            "3",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.urls.len(), 2);
        assert_eq!(cli.limit, Some(2));
        assert_eq!(cli.sort, SortOrder::Score);
        assert_eq!(cli.comments, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.feed_urls("unused"), cli.urls);
    }

    #[test]
    fn test_file_conflicts_with_urls_and_comments() {
        assert!(Cli::try_parse_from(["teddit", "--file", "hot.json", "https://x/hot.json"]).is_err());
        assert!(Cli::try_parse_from(["teddit", "--file", "hot.json", "--comments", "2"]).is_err());
        assert!(Cli::try_parse_from(["teddit", "--file", "hot.json"]).is_ok());
    }

    #[test]
    fn test_rejects_negative_limit() {
        assert!(Cli::try_parse_from(["teddit", "--limit", "-1"]).is_err());
    }
}
