//*** START FILE: src/parsing/tei_parser.rs ***//
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::xml_tree::{parse_document, Element};
use crate::error::Result;
use crate::types::dict_data::{Entry, TranslationPair};

/// Which `<quote>` elements count as translation candidates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TranslationPolicy {
    /// Every `sense/cit/quote` under the entry, across all senses.
    #[default]
    AllSenses,
    /// Only the first `quote` of the first `cit` of the first `sense`.
    FirstSense,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub entries_seen: usize,
    pub entries_kept: usize,
}

impl ExtractionStats {
    pub fn skipped(&self) -> usize {
        self.entries_seen - self.entries_kept
    }
}

fn headword_of(entry: &Element) -> Option<&str> {
    entry.find(&["form", "orth"]).map(|orth| orth.text.as_str())
}

fn translation_candidates(entry: &Element, policy: TranslationPolicy) -> Vec<String> {
    match policy {
        TranslationPolicy::AllSenses => entry
            .find_all(&["sense", "cit", "quote"])
            .into_iter()
            .map(|quote| quote.text.clone())
            .collect(),
        TranslationPolicy::FirstSense => entry
            .first_child("sense")
            .and_then(|sense| sense.first_child("cit"))
            .and_then(|cit| cit.first_child("quote"))
            .map(|quote| vec![quote.text.clone()])
            .unwrap_or_default(),
    }
}

/// Normalizes one `<entry>` element. Stubs and cross-references without a
/// headword or translation come back as `None`.
pub fn entry_from_element(entry: &Element, policy: TranslationPolicy) -> Option<Entry> {
    let headword = headword_of(entry)?;
    Entry::new(headword, translation_candidates(entry, policy))
}

/// Why [`entry_from_element`] rejected an element; logged for each dropped entry.
pub fn skip_reason(entry: &Element, policy: TranslationPolicy) -> &'static str {
    match headword_of(entry) {
        None => "no form/orth",
        Some(h) if h.trim().is_empty() => "empty headword",
        Some(_) if translation_candidates(entry, policy).iter().all(|t| t.trim().is_empty()) => {
            "no translation"
        }
        Some(_) => "kept",
    }
}

/// Parses a TEI document and returns every usable entry in document order.
pub fn extract_entries(xml: &str, policy: TranslationPolicy) -> Result<(Vec<Entry>, ExtractionStats)> {
    let root = parse_document(xml)?;
    let mut elements = Vec::new();
    if root.is("entry") {
        elements.push(&root);
    }
    elements.extend(root.descendants_named("entry"));

    let mut stats = ExtractionStats {
        entries_seen: elements.len(),
        ..Default::default()
    };
    let entries: Vec<Entry> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, el)| {
            let entry = entry_from_element(el, policy);
            if entry.is_none() {
                debug!(
                    index,
                    headword = headword_of(el).map(str::trim).unwrap_or(""),
                    reason = skip_reason(el, policy),
                    "skipping TEI entry"
                );
            }
            entry
        })
        .collect();
    stats.entries_kept = entries.len();

    debug!(
        seen = stats.entries_seen,
        kept = stats.entries_kept,
        skipped = stats.skipped(),
        "extracted TEI entries"
    );
    Ok((entries, stats))
}

/// (headword, first translation) pairs, ready for the dictionary builder.
pub fn extract_pairs(xml: &str, policy: TranslationPolicy) -> Result<Vec<TranslationPair>> {
    let (entries, _) = extract_entries(xml, policy)?;
    Ok(entries.into_iter().map(Entry::into_pair).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;

    fn tei(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body>{}</body></text></TEI>"#,
            body
        )
    }

    fn pairs(xml: &str, policy: TranslationPolicy) -> Vec<(String, String)> {
        extract_pairs(xml, policy)
            .unwrap()
            .into_iter()
            .map(|p| (p.headword, p.translation))
            .collect()
    }

    #[test]
    fn extracts_simple_entry() {
        let xml = tei("<entry><form><orth>hello</orth></form><sense><cit><quote>مرحبا</quote></cit></sense></entry>");
        assert_eq!(
            pairs(&xml, TranslationPolicy::AllSenses),
            vec![("hello".to_string(), "مرحبا".to_string())]
        );
    }

    #[test]
    fn headword_is_normalized() {
        let xml = tei("<entry><form><orth>  Hello  </orth></form><sense><cit><quote> مرحبا </quote></cit></sense></entry>");
        assert_eq!(
            pairs(&xml, TranslationPolicy::FirstSense),
            vec![("hello".to_string(), "مرحبا".to_string())]
        );
    }

    #[test]
    fn incomplete_entries_are_skipped_silently() {
        let xml = tei(concat!(
            "<entry><sense><cit><quote>بلا</quote></cit></sense></entry>",
            "<entry><form><orth>stub</orth></form></entry>",
            "<entry><form><orth>   </orth></form><sense><cit><quote>فارغ</quote></cit></sense></entry>",
            "<entry><form><orth>blank</orth></form><sense><cit><quote>  </quote></cit></sense></entry>",
            "<entry><form><orth>ok</orth></form><sense><cit><quote>حسنا</quote></cit></sense></entry>",
        ));
        let (entries, stats) = extract_entries(&xml, TranslationPolicy::AllSenses).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].headword, "ok");
        assert_eq!(stats.entries_seen, 5);
        assert_eq!(stats.skipped(), 4);
    }

    #[test]
    fn entries_nested_in_an_entry_root_are_visited() {
        let xml = concat!(
            r#"<entry xmlns="http://www.tei-c.org/ns/1.0"><form><orth>Outer</orth></form>"#,
            "<sense><cit><quote>خارجي</quote></cit></sense>",
            "<entry><form><orth>inner</orth></form><sense><cit><quote>داخلي</quote></cit></sense></entry>",
            "</entry>",
        );
        let (entries, stats) = extract_entries(xml, TranslationPolicy::AllSenses).unwrap();
        let heads: Vec<&str> = entries.iter().map(|e| e.headword.as_str()).collect();
        assert_eq!(heads, vec!["outer", "inner"]);
        assert_eq!(stats.entries_seen, 2);
    }

    #[test]
    fn skip_reason_names_the_missing_part() {
        let root = parse_document(concat!(
            "<body>",
            "<entry><sense><cit><quote>x</quote></cit></sense></entry>",
            "<entry><form><orth> </orth></form></entry>",
            "<entry><form><orth>stub</orth></form><xr/></entry>",
            "<entry><form><orth>ok</orth></form><sense><cit><quote>y</quote></cit></sense></entry>",
            "</body>",
        ))
        .unwrap();
        let reasons: Vec<&str> = root
            .descendants_named("entry")
            .into_iter()
            .map(|el| skip_reason(el, TranslationPolicy::AllSenses))
            .collect();
        assert_eq!(reasons, vec!["no form/orth", "empty headword", "no translation", "kept"]);
    }

    #[test]
    fn policies_differ_on_later_senses() {
        let xml = tei(concat!(
            "<entry><form><orth>bank</orth></form>",
            "<sense><cit><quote> </quote></cit></sense>",
            "<sense><cit><quote>مصرف</quote></cit><cit><quote>بنك</quote></cit></sense>",
            "</entry>",
        ));
        let (entries, _) = extract_entries(&xml, TranslationPolicy::AllSenses).unwrap();
        assert_eq!(entries[0].translations, vec!["مصرف".to_string(), "بنك".to_string()]);
        assert_eq!(entries[0].primary_translation(), "مصرف");

        assert!(pairs(&xml, TranslationPolicy::FirstSense).is_empty());
    }

    #[test]
    fn ignores_entries_outside_tei_namespace() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0" xmlns:o="urn:other">
            <o:entry><o:form><o:orth>foreign</o:orth></o:form></o:entry>
            <entry><form><orth>native</orth></form><sense><cit><quote>أصلي</quote></cit></sense></entry>
        </TEI>"#;
        let found = pairs(xml, TranslationPolicy::AllSenses);
        assert_eq!(found, vec![("native".to_string(), "أصلي".to_string())]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let xml = tei(concat!(
            "<entry><form><orth>One</orth></form><sense><cit><quote>واحد</quote></cit></sense></entry>",
            "<entry><form><orth>two</orth></form><sense><cit><quote>اثنان</quote></cit></sense></entry>",
        ));
        assert_eq!(
            extract_pairs(&xml, TranslationPolicy::AllSenses).unwrap(),
            extract_pairs(&xml, TranslationPolicy::AllSenses).unwrap()
        );
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let result = extract_pairs("<TEI><entry></TEI>", TranslationPolicy::AllSenses);
        assert!(matches!(result, Err(DictError::Parse { .. })));
    }
}
//*** END FILE: src/parsing/tei_parser.rs ***//
