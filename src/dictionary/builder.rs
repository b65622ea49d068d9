//*** START FILE: src/dictionary/builder.rs ***//
use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::dict_data::TranslationPair;

/// Headword → translation. Keys are kept sorted so serialized output is stable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `headword` to `translation`, returning the value it replaced.
    pub fn insert(&mut self, headword: impl Into<String>, translation: impl Into<String>) -> Option<String> {
        self.entries.insert(headword.into(), translation.into())
    }

    pub fn get(&self, headword: &str) -> Option<&str> {
        self.entries.get(headword).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.entries.keys()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Folds pairs into a dictionary in input order. A repeated headword keeps
/// the translation of its last occurrence.
pub fn build_dictionary(pairs: impl IntoIterator<Item = TranslationPair>) -> Dictionary {
    pairs
        .into_iter()
        .fold(Dictionary::new(), |mut dictionary, pair| {
            dictionary.insert(pair.headword, pair.translation);
            dictionary
        })
}

//*** END FILE: src/dictionary/builder.rs ***//
