//! # ZH-Check: Chinese Text Comprehension Analyzer
//!
//! Estimates how well a reader will comprehend Chinese text given a
//! personal vocabulary of known words.
//!
//! ## Pipeline
//!
//! 1. **Vocabulary Store** - known words and unknown-override compounds,
//!    expanded so every entry's characters are individually known
//! 2. **Segmenter** - DP tokenization that maximizes recognition of the
//!    reader's vocabulary, with jieba splicing in boundaries for
//!    anything unmatched
//! 3. **Proper-Noun Filter** - tokens inside recognized name, place, or
//!    organization spans are excluded from accounting
//! 4. **Classifier** - known / suppressed / unknown / ignored per token
//! 5. **Aggregator** - word counts, comprehension ratio, and a
//!    frequency-ranked unknown-word table
//! 6. **Enricher** - pinyin and dictionary glosses for unknown words
//!
//! ## Example Usage
//!
//! ```ignore
//! use zh_check::{Analyzer, VocabularyStore};
//!
//! let store = VocabularyStore::build(known_words, override_words);
//! let analyzer = Analyzer::new(store);
//!
//! let report = analyzer.analyze(text)?;
//! println!("Comprehension: {:.1}%", report.comprehension * 100.0);
//! for unknown in &report.unknown_words {
//!     println!("{} ({}) : {}", unknown.word, unknown.pinyin, unknown.count);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The fallback segmenter, entity recognizer, romanizer, and definition
//! provider are trait seams; the jieba and pinyin backed defaults live
//! in [`backends`] and [`enrich`].

pub mod analyzer;
pub mod backends;
pub mod classifier;
pub mod enrich;
pub mod entity;
pub mod report;
pub mod segmenter;
pub mod types;
pub mod vocab;
pub mod wordlist;

// Re-export main types and functions for convenience
pub use analyzer::Analyzer;
pub use backends::JiebaBackend;
pub use classifier::classify;
pub use enrich::{CedictGlossary, DefinitionProvider, PinyinRomanizer, Romanizer};
pub use entity::{mark_proper_nouns, EntityRecognizer};
pub use report::{aggregate, Summary};
pub use segmenter::{FallbackSegmenter, Segmenter};
pub use types::{
    AnalysisReport, AnalyzeError, ClassifiedToken, DifficultyBand, EntityCategory, EntitySpan,
    IgnoreReason, Token, TokenSource, TokenStatus, UnknownWord,
};
pub use vocab::{MatchKind, VocabularyStore, MAX_WORD_LEN};
pub use wordlist::{parse_line, parse_words};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
