//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// html-grader - check an HTML document against a checklist of CSS selectors
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the checklist JSON file [default: checks.json]
    #[arg(short, long, value_name = "CHECK_FILE", env = "GRADER_CHECKS")]
    pub checks: Option<PathBuf>,

    /// Path to a local HTML file
    #[arg(short, long, value_name = "HTML_FILE")]
    pub file: Option<PathBuf>,

    /// URL of a remote HTML document (http, https or ftp)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Give up on the remote request after this many seconds [default: no limit]
    #[arg(short, long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Report selectors that cannot be compiled as absent instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Path to a config file [default: <config dir>/html-grader/config.toml]
    #[arg(long, value_name = "PATH", env = "GRADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::parse_from(["html-grader", "-c", "rubric.json", "-f", "index.html"]);
        assert_eq!(args.checks, Some(PathBuf::from("rubric.json")));
        assert_eq!(args.file, Some(PathBuf::from("index.html")));
        assert_eq!(args.url, None);
        assert!(!args.lenient);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Args::parse_from([
            "html-grader",
            "--url",
            "https://example.com/",
            "--timeout",
            "30",
            "--lenient",
        ]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/"));
        assert_eq!(args.timeout, Some(30));
        assert!(args.lenient);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Args::try_parse_from(["html-grader", "-u", "http://a.b", "-t", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::default();
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
        args.verbose = 1;
        assert_eq!(args.log_level(), log::LevelFilter::Info);
        args.verbose = 4;
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
