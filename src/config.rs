use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DictError, Result};
use crate::parsing::TranslationPolicy;
use crate::source::{Source, SourceOptions};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Local path or http(s) URL of the TEI document.
    pub source: String,
    pub translation_policy: TranslationPolicy,
    pub clean_local_prefix: bool,
    pub http_timeout_secs: Option<u64>,
    pub tei_output: PathBuf,
    pub supplementary: PathBuf,
    pub combined_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: "en-ara.tei".to_string(),
            translation_policy: TranslationPolicy::default(),
            clean_local_prefix: false,
            http_timeout_secs: None,
            tei_output: PathBuf::from("en-ara.json"),
            supplementary: PathBuf::from("medical_dictionary.json"),
            combined_output: PathBuf::from("public/combined_dictionary.json"),
        }
    }
}

impl Config {
    /// Reads `path`. When the file was not asked for explicitly and does not
    /// exist, the defaults are used instead.
    pub fn load_or_default(path: &Path, explicit: bool) -> Result<Config> {
        if !explicit && !path.exists() {
            return Ok(Config::default());
        }
        load_config_from_file(path)
    }

    pub fn source(&self) -> Source {
        Source::parse(&self.source)
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            clean_local_prefix: self.clean_local_prefix,
            http_timeout: self.http_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn validate(&self, file_path: &Path) -> Result<()> {
        let invalid = |message: &str| DictError::Config {
            path: file_path.to_path_buf(),
            message: message.to_string(),
        };
        if self.source.trim().is_empty() {
            return Err(invalid("source must not be empty"));
        }
        if self.tei_output.as_os_str().is_empty() || self.combined_output.as_os_str().is_empty() {
            return Err(invalid("output paths must not be empty"));
        }
        if self.supplementary.as_os_str().is_empty() {
            return Err(invalid("supplementary must not be empty"));
        }
        if self.http_timeout_secs == Some(0) {
            return Err(invalid("http_timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DictError::Config {
            path: file_path.to_path_buf(),
            message: "file not found. Please ensure it exists.".to_string(),
        },
        _ => DictError::io(file_path, e),
    })?;
    let loaded_config = toml::from_str::<Config>(&contents).map_err(|e| DictError::Config {
        path: file_path.to_path_buf(),
        message: e.to_string(),
    })?;
    loaded_config.validate(file_path)?;
    Ok(loaded_config)
}
