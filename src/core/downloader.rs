//! URL downloader for remote documents.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use url::Url;

use crate::constants;
use crate::error::{GraderError, Result};

/// Request settings for a remote fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Overall request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("{}/{}", constants::APP_NAME, constants::APP_VERSION),
        }
    }
}

/// Downloads `url` with a single GET and writes the full body to `dest`.
///
/// Non-success statuses are logged but the body is still saved, so an error
/// page gets graded like any other document.
///
/// # Errors
///
/// Returns [`GraderError::Transport`] if the request fails or times out, and
/// [`GraderError::Io`] if `dest` cannot be written.
pub async fn download_document(url: &Url, dest: &Path, options: &FetchOptions) -> Result<PathBuf> {
    let transport = |message: String| GraderError::Transport {
        url: url.to_string(),
        message,
    };

    let mut builder = reqwest::Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder
        .build()
        .map_err(|e| transport(format!("{}: {e}", constants::ERR_HTTP_CLIENT_BUILD_FAILED)))?;

    info!("{} {url}", constants::MSG_READING_URL);
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| transport(format!("{}: {e}", constants::ERR_NETWORK_REQUEST_FAILED)))?;
    info!("{} ({})", constants::MSG_GOT_RESPONSE, response.status());

    if !response.status().is_success() {
        warn!("{}{}", constants::ERR_SERVER_STATUS, response.status());
    }

    let content = response
        .bytes()
        .await
        .map_err(|e| transport(format!("{}: {e}", constants::ERR_READ_CONTENT_FAILED)))?;

    tokio::fs::write(dest, &content)
        .await
        .map_err(|e| GraderError::io(dest, e))?;
    info!("{}{}", constants::MSG_WROTE_FILE, dest.display());

    Ok(dest.to_path_buf())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    /// Serves one HTTP response on an ephemeral local port and returns its URL.
    pub(crate) fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok_and(|n| n > 0) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });

        Url::parse(&format!("http://{addr}/index.html")).unwrap()
    }

    /// Address on which nothing is listening.
    pub(crate) fn closed_port_url() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn test_download_document_writes_body() {
        let url = serve_once("200 OK", "<html><body><h1>Hi</h1></body></html>");
        let dest = std::env::temp_dir().join("html_grader_test_download_writes_body.html");

        let path = download_document(&url, &dest, &FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(path, dest);
        let saved = std::fs::read_to_string(&dest).unwrap();
        assert!(saved.contains("<h1>Hi</h1>"));

        let _ = std::fs::remove_file(&dest);
    }

    #[tokio::test]
    async fn test_download_document_keeps_error_pages() {
        let url = serve_once("404 Not Found", "<html><body><p>missing</p></body></html>");
        let dest = std::env::temp_dir().join("html_grader_test_download_error_page.html");

        download_document(&url, &dest, &FetchOptions::default())
            .await
            .unwrap();
        assert!(std::fs::read_to_string(&dest).unwrap().contains("missing"));

        let _ = std::fs::remove_file(&dest);
    }

    #[tokio::test]
    async fn test_download_document_connection_refused() {
        let url = closed_port_url();
        let dest = std::env::temp_dir().join("html_grader_test_download_refused.html");

        let result = download_document(&url, &dest, &FetchOptions::default()).await;
        assert!(matches!(result, Err(GraderError::Transport { .. })));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_download_document_ftp_unsupported() {
        let url = Url::parse("ftp://files.example.org/index.html").unwrap();
        let dest = std::env::temp_dir().join("html_grader_test_download_ftp.html");

        let result = download_document(&url, &dest, &FetchOptions::default()).await;
        assert!(matches!(result, Err(GraderError::Transport { .. })));
    }
}
