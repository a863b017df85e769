//! Command-line interface definitions for Headline Digest.
//!
//! Secrets can be provided through environment variables instead of flags.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Headline Digest application.
///
/// # Examples
///
/// ```sh
/// # Scrape, then mail every subscriber in the config
/// SMTP_PASSWORD=... headline_digest -c subscribers.yaml
///
/// # Write digests to ./digests instead of sending mail
/// headline_digest -c subscribers.yaml -o ./digests
///
/// # Keep a JSON snapshot of what was scraped
/// headline_digest -c subscribers.yaml -o ./digests -j ./runs/today.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the YAML file with mail settings and subscribers
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write each digest to <DIR>/<recipient>.html instead of sending mail
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write a JSON snapshot of all scraped headlines to this file
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,

    /// SMTP login (defaults to the configured sender address)
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Number of candidate elements inspected per site (overrides config)
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Number of headlines kept per site (overrides config)
    #[arg(long)]
    pub max_headlines: Option<usize>,

    /// Front pages fetched concurrently
    #[arg(long, default_value_t = 4)]
    pub fetch_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 20)]
    pub timeout_secs: u64,

    /// Do not print the scraped headlines to stdout
    #[arg(long)]
    pub no_preview: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_digest", "--config", "subscribers.yaml"]);

        assert_eq!(cli.config, PathBuf::from("subscribers.yaml"));
        assert!(cli.output_dir.is_none());
        assert!(cli.json_output.is_none());
        assert_eq!(cli.fetch_concurrency, 4);
        assert_eq!(cli.timeout_secs, 20);
        assert!(!cli.no_preview);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "headline_digest",
            "-c",
            "/etc/news.yaml",
            "-o",
            "/tmp/digests",
            "-j",
            "/tmp/run.json",
        ]);

        assert_eq!(cli.config, PathBuf::from("/etc/news.yaml"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/digests")));
        assert_eq!(cli.json_output, Some(PathBuf::from("/tmp/run.json")));
    }

    #[test]
    fn test_cli_limit_overrides() {
        let cli = Cli::parse_from([
            "headline_digest",
            "-c",
            "x.yaml",
            "--max-candidates",
            "20",
            "--max-headlines",
            "3",
            "--no-preview",
        ]);

        assert_eq!(cli.max_candidates, Some(20));
        assert_eq!(cli.max_headlines, Some(3));
        assert!(cli.no_preview);
    }

    #[test]
    fn test_cli_requires_config() {
        assert!(Cli::try_parse_from(["headline_digest"]).is_err());
    }
}
