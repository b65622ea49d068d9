//*** START FILE: src/pipeline.rs ***//
use crate::config::Config;
use crate::dict_io::save_dictionary;
use crate::dictionary::{build_dictionary, load_supplementary, merge, Dictionary};
use crate::error::{DictError, Result};
use crate::parsing::{extract_entries, TranslationPolicy};
use crate::source::{load_source, Source, SourceOptions};
use crate::types::dict_data::Entry;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

// Everything one TEI → JSON conversion needs, after config and CLI flags
// have been resolved.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub source: Source,
    pub source_options: SourceOptions,
    pub policy: TranslationPolicy,
    pub tei_output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CombineArgs {
    pub supplementary: PathBuf,
    pub combined_output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub convert: ConvertArgs,
    pub combine: Option<CombineArgs>,
}

impl RunArgs {
    pub fn from_config(config: &Config, with_combine: bool) -> Self {
        RunArgs {
            convert: ConvertArgs {
                source: config.source(),
                source_options: config.source_options(),
                policy: config.translation_policy,
                tei_output: config.tei_output.clone(),
            },
            combine: with_combine.then(|| CombineArgs {
                supplementary: config.supplementary.clone(),
                combined_output: config.combined_output.clone(),
            }),
        }
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub tei_entries: usize,
    /// `None` when no merge was requested.
    pub combined: Option<Result<usize>>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.combined, Some(Err(_)))
    }
}

/// Loader → Extractor → Builder → Sink. Nothing is written when loading or
/// parsing fails.
pub fn convert(args: &ConvertArgs) -> Result<Dictionary> {
    let raw = load_source(&args.source, &args.source_options)?;
    let (entries, stats) = extract_entries(&raw, args.policy)?;
    let dictionary = build_dictionary(entries.into_iter().map(Entry::into_pair));

    info!(
        "Found {} entries in TEI file ({} entry elements, {} skipped)",
        dictionary.len(),
        stats.entries_seen,
        stats.skipped()
    );

    save_dictionary(&dictionary, &args.tei_output)?;
    info!("Converted TEI dictionary saved to {}", args.tei_output.display());
    Ok(dictionary)
}

/// Merges the supplementary file over `tei` and writes the result.
pub fn combine(tei: &Dictionary, supplementary: &Path, combined_output: &Path) -> Result<Dictionary> {
    let primary = load_supplementary(supplementary)?;
    let combined = merge(&primary, tei);
    save_dictionary(&combined, combined_output)?;
    info!(
        "Combined dictionary ({} entries) saved to {}",
        combined.len(),
        combined_output.display()
    );
    Ok(combined)
}

/// Runs the whole pipeline. A failed merge is reported, not raised: the
/// TEI-only output has already been written and stays on disk.
pub fn run(args: &RunArgs) -> Result<RunReport> {
    let tei = convert(&args.convert)?;

    let combined = args.combine.as_ref().map(|c| {
        combine(&tei, &c.supplementary, &c.combined_output)
            .map(|dictionary| dictionary.len())
            .map_err(|e| {
                warn!("Dictionary combination failed: {}", e);
                e
            })
    });

    Ok(RunReport {
        tei_entries: tei.len(),
        combined,
    })
}

pub fn describe_failure(err: &DictError) -> String {
    match err {
        DictError::Network { .. } | DictError::HttpStatus { .. } => format!("HTTP request error: {}", err),
        DictError::Parse { .. } => format!("XML parsing error: {}", err),
        DictError::InputMissing { .. } => format!("Error: {}", err),
        DictError::MalformedInput { .. } => format!("Error: could not decode JSON. {}", err),
        DictError::Io { .. } | DictError::Config { .. } => format!("Error: {}", err),
    }
}
//*** END FILE: src/pipeline.rs ***//
