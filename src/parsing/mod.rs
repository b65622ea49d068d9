//*** START FILE: src/parsing/mod.rs ***//
pub mod tei_parser;
pub mod xml_tree;

// Re-export the main extraction entry points for convenience
pub use tei_parser::{extract_entries, extract_pairs, ExtractionStats, TranslationPolicy};
//*** END FILE: src/parsing/mod.rs ***//
