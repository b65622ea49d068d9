use std::path::Path;

use tracing::info;

use super::builder::Dictionary;
use crate::dict_io::load_dictionary;
use crate::error::Result;

/// Union of both dictionaries. On a shared headword `primary` wins.
pub fn merge(primary: &Dictionary, secondary: &Dictionary) -> Dictionary {
    let mut combined = secondary.clone();
    combined.extend(primary.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    combined
}

/// Loads the hand-maintained supplementary dictionary (e.g. medical terms).
pub fn load_supplementary(path: &Path) -> Result<Dictionary> {
    let dictionary = load_dictionary(path)?;
    info!("Loaded {} entries from {}", dictionary.len(), path.display());
    Ok(dictionary)
}
