//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod dict_data;
}
pub mod parsing;
pub mod source;
pub mod dictionary;
pub mod dict_io;
pub mod pipeline;

pub use dictionary::Dictionary;
pub use error::{DictError, Result};
pub use parsing::TranslationPolicy;
//*** END FILE: src/lib.rs ***//
