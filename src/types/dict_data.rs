//*** START FILE: src/types/dict_data.rs ***//
/// One TEI `<entry>` after normalization.
///
/// `headword` is trimmed and lower-cased, every translation is trimmed and
/// non-empty. An `Entry` with no translations is never constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub headword: String,
    pub translations: Vec<String>,
}

impl Entry {
    pub fn new(headword: &str, candidates: impl IntoIterator<Item = String>) -> Option<Self> {
        let headword = normalize_headword(headword);
        if headword.is_empty() {
            return None;
        }
        let translations: Vec<String> = candidates
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if translations.is_empty() {
            return None;
        }
        Some(Entry { headword, translations })
    }

    /// The first candidate is the canonical translation.
    pub fn primary_translation(&self) -> &str {
        &self.translations[0]
    }

    pub fn into_pair(self) -> TranslationPair {
        let translation = self.translations.into_iter().next().unwrap_or_default();
        TranslationPair { headword: self.headword, translation }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPair {
    pub headword: String,
    pub translation: String,
}

pub fn normalize_headword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

//*** END FILE: src/types/dict_data.rs ***//
