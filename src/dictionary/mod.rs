//*** START FILE: src/dictionary/mod.rs ***//
pub mod builder;
pub mod merge;

pub use builder::{build_dictionary, Dictionary};
pub use merge::{load_supplementary, merge};
//*** END FILE: src/dictionary/mod.rs ***//
