//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout the grader,
//! including default file names, accepted URL schemes and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Checklist consulted when neither `--checks` nor the config file name one.
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
/// Scratch file in the working directory that holds a fetched document.
pub const DOWNLOAD_FILE_NAME: &str = ".index.html";
/// Name of the configuration file inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Remote Documents ===

/// URL prefixes accepted by `--url`.
pub const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

// === Report Formatting ===

/// Indentation used when pretty-printing the report.
pub const REPORT_INDENT: &[u8] = b"    ";

// === Messages: Logs ===

pub const MSG_READING_URL: &str = "Reading URL";
pub const MSG_GOT_RESPONSE: &str = "Got response from url";
pub const MSG_WROTE_FILE: &str = "Wrote ";
pub const MSG_READING_FILE: &str = "Reading file ";
pub const MSG_LOADED_CHECKS: &str = "Loaded checks: ";

// === Error Messages ===

pub const ERR_NO_SOURCE: &str = "Both file and URL unspecified";
pub const ERR_BOTH_SOURCES: &str = "Cannot specify URL and file at the same time";
pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_READ_CONTENT_FAILED: &str = "Failed to read content";
pub const ERR_SERVER_STATUS: &str = "Server returned status ";
pub const ERR_CLEANUP_FAILED: &str = "Failed to remove ";
