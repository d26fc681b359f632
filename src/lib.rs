//! `pinyin-annotate` - pinyin above Chinese text, line for line
//!
//! Every line holding CJK Unified Ideographs gets a companion line placed
//! directly above it, with each character's tone-marked reading starting in
//! the same column as the character. Everything else is left exactly as it
//! was, and lines without Chinese characters pass through on their own.
//!
//! # Features
//!
//! - **Column alignment**: readings start at their character's column; the
//!   companion line never outgrows the original
//! - **Pluggable lookups**: the [`Lookup`] trait decouples alignment from the
//!   `pinyin` crate, so tables and overrides slot in
//! - **Safe output**: files are written atomically
//!
//! # Example
//!
//! ```rust
//! use pinyin_annotate::{annotate_document, LookupConfig, PinyinLookup};
//!
//! let lookup = PinyinLookup::new(LookupConfig::default());
//! let doc = annotate_document("中    文  \nplain", &lookup).unwrap();
//! assert_eq!(doc.render(), "zhōngwén\n中    文  \nplain");
//! ```

pub mod annotate;
pub mod config;
pub mod error;
pub mod lookup;
pub mod storage;

pub use annotate::{annotate_document, annotate_line, is_qualifying, AnnotatedDocument, LineAnnotation};
pub use config::Settings;
pub use error::{Error, MissingReading, Result};
pub use lookup::{Lookup, LookupConfig, PinyinLookup, TableLookup, ToneStyle};

/// Version of pinyin-annotate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
