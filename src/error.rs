use std::path::PathBuf;

/// Everything that can abort a pipeline stage.
///
/// Structurally incomplete `<entry>` elements are not errors; the extractor
/// drops them silently.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("XML parse error at byte {position}: {message}")]
    Parse { position: u64, message: String },

    #[error("{} is not a valid JSON dictionary: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} not found. Please ensure it's in the correct directory.", path.display())]
    InputMissing { path: PathBuf },

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DictError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the two variants that describe a failed fetch.
    pub fn is_network(&self) -> bool {
        matches!(self, DictError::Network { .. } | DictError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
