//! Source Loader: raw TEI text from a local file or an HTTP(S) URL.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{DictError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(trimmed.to_string())
        } else {
            Source::Local(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Apply [`strip_leading_garbage`] to local files too. Remote content is always cleaned.
    pub clean_local_prefix: bool,
    /// `None` blocks until the server answers.
    pub http_timeout: Option<Duration>,
}

/// Drops everything before the first `<`.
///
/// Some hosts prepend banners or stray bytes to the TEI payload. This is a
/// heuristic only; the result is not guaranteed to be well-formed.
pub fn strip_leading_garbage(raw: &str) -> &str {
    match raw.find('<') {
        Some(idx) if idx > 0 => &raw[idx..],
        _ => raw,
    }
}

pub fn load_source(source: &Source, options: &SourceOptions) -> Result<String> {
    match source {
        Source::Local(path) => {
            let content = fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
            debug!(path = %path.display(), bytes = content.len(), "read local TEI file");
            if options.clean_local_prefix {
                Ok(strip_leading_garbage(&content).to_string())
            } else {
                Ok(content)
            }
        }
        Source::Remote(url) => {
            info!("Fetching TEI from {}...", url);
            let content = fetch(url, options.http_timeout)?;
            let cleaned = strip_leading_garbage(&content);
            if cleaned.len() != content.len() {
                debug!(dropped = content.len() - cleaned.len(), "discarded bytes before first tag");
            }
            Ok(cleaned.to_string())
        }
    }
}

fn fetch(url: &str, timeout: Option<Duration>) -> Result<String> {
    let network = |source| DictError::Network {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(network)?;
    let response = client.get(url).send().map_err(network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DictError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn classifies_locations() {
        assert_eq!(
            Source::parse("https://example.org/en-ara.tei"),
            Source::Remote("https://example.org/en-ara.tei".to_string())
        );
        assert_eq!(Source::parse("HTTP://x/y").to_string(), "HTTP://x/y");
        assert_eq!(Source::parse("en-ara.tei"), Source::Local(PathBuf::from("en-ara.tei")));
    }

    #[test]
    fn strips_prefix_before_first_tag() {
        assert_eq!(strip_leading_garbage("\u{feff}junk\n<TEI/>"), "<TEI/>");
        assert_eq!(strip_leading_garbage("<TEI/>"), "<TEI/>");
        assert_eq!(strip_leading_garbage("no markup"), "no markup");
    }

    #[test]
    fn missing_local_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = Source::Local(dir.path().join("absent.tei"));
        let err = load_source(&source, &SourceOptions::default()).unwrap_err();
        assert!(matches!(err, DictError::Io { .. }));
    }

    #[test]
    fn local_cleanup_is_opt_in() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noisy.tei");
        fs::write(&path, "banner<TEI/>").unwrap();
        let source = Source::Local(path);

        let raw = load_source(&source, &SourceOptions::default()).unwrap();
        assert_eq!(raw, "banner<TEI/>");

        let options = SourceOptions {
            clean_local_prefix: true,
            ..Default::default()
        };
        assert_eq!(load_source(&source, &options).unwrap(), "<TEI/>");
    }
}
