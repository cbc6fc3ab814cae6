// ZH-Check Type Definitions
// Core types for tokens, classification, and analysis reports

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a token was produced during segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Matched against the vocabulary store by the DP pass
    Vocabulary,
    /// Produced by the external general-purpose segmenter
    Fallback,
}

/// Named-entity categories reported by the recognizer
///
/// The first five are excluded from comprehension accounting
/// (proper nouns); `Other` is recognized but still counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Person,
    Gpe,
    Org,
    Fac,
    Loc,
    Other,
}

impl EntityCategory {
    /// Whether tokens inside this entity are dropped from accounting
    pub fn is_excluded(self) -> bool {
        !matches!(self, EntityCategory::Other)
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Person => write!(f, "PERSON"),
            EntityCategory::Gpe => write!(f, "GPE"),
            EntityCategory::Org => write!(f, "ORG"),
            EntityCategory::Fac => write!(f, "FAC"),
            EntityCategory::Loc => write!(f, "LOC"),
            EntityCategory::Other => write!(f, "OTHER"),
        }
    }
}

/// A named-entity span over char offsets, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub category: EntityCategory,
}

/// A segmented word with its position in the cleaned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word text
    pub text: String,

    /// Char offset of the first character in the analyzed text
    pub start: usize,

    /// Whether the DP pass or the fallback segmenter produced it
    pub source: TokenSource,

    /// Entity category, set when the token lies inside a recognized span
    pub entity: Option<EntityCategory>,
}

impl Token {
    /// Create a token with no entity annotation
    pub fn new(text: impl Into<String>, start: usize, source: TokenSource) -> Self {
        Self {
            text: text.into(),
            start,
            source,
            entity: None,
        }
    }

    /// Char length of the token text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Char offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// Why a token is excluded from comprehension accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Punctuation, whitespace, digits, or Latin-script content
    NonChinese,
    /// Inside a recognized name/place/organization span
    ProperNoun,
}

/// Comprehension status assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// In the known set, or all of its characters are known
    Known,
    /// Explicitly listed in the unknown-override set; counted as unknown
    SuppressedUnknown,
    /// Not recognized
    Unknown,
    /// Excluded from word count and ratio
    Ignored(IgnoreReason),
}

impl TokenStatus {
    /// Whether the token participates in word count and ratio
    pub fn is_counted(self) -> bool {
        !matches!(self, TokenStatus::Ignored(_))
    }

    /// Whether the token counts against comprehension
    pub fn is_unknown(self) -> bool {
        matches!(self, TokenStatus::Unknown | TokenStatus::SuppressedUnknown)
    }
}

/// A token together with its comprehension status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub token: Token,
    pub status: TokenStatus,
}

/// An unknown word enriched with pronunciation and gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownWord {
    /// The word text
    pub word: String,

    /// Occurrence count in the analyzed document
    pub count: usize,

    /// Pinyin with tone marks; empty if romanization found nothing
    pub pinyin: String,

    /// Dictionary gloss; empty if the provider has no entry
    pub gloss: String,
}

/// Difficulty band derived from the comprehension ratio
///
/// Thresholds follow the extensive-reading guideline that ~89-92%
/// comprehension is the sweet spot for acquisition (i+1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyBand {
    TooDifficult,
    VeryChallenging,
    Challenging,
    Optimal,
    Comfortable,
    TooEasy,
}

impl DifficultyBand {
    /// Band for a comprehension ratio in `[0.0, 1.0]`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.82 {
            DifficultyBand::TooDifficult
        } else if ratio < 0.87 {
            DifficultyBand::VeryChallenging
        } else if ratio < 0.89 {
            DifficultyBand::Challenging
        } else if ratio < 0.92 {
            DifficultyBand::Optimal
        } else if ratio < 0.95 {
            DifficultyBand::Comfortable
        } else {
            DifficultyBand::TooEasy
        }
    }
}

impl std::fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyBand::TooDifficult => write!(f, "Too Difficult"),
            DifficultyBand::VeryChallenging => write!(f, "Very Challenging"),
            DifficultyBand::Challenging => write!(f, "Challenging"),
            DifficultyBand::Optimal => write!(f, "Optimal (i+1)"),
            DifficultyBand::Comfortable => write!(f, "Comfortable"),
            DifficultyBand::TooEasy => write!(f, "Too Easy"),
        }
    }
}

/// Final analysis result for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Count of non-ignored tokens
    pub word_count: usize,

    /// Distinct non-ignored token texts
    pub unique_words: usize,

    /// Non-ignored tokens classified Known
    pub known_count: usize,

    /// known_count / word_count; 1.0 when word_count is 0
    pub comprehension: f64,

    /// Unknown words, frequency-descending, enriched
    pub unknown_words: Vec<UnknownWord>,
}

impl AnalysisReport {
    /// Report for empty input: zero counts, full comprehension
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            unique_words: 0,
            known_count: 0,
            comprehension: 1.0,
            unknown_words: Vec::new(),
        }
    }

    /// Difficulty band for this report's ratio
    pub fn difficulty(&self) -> DifficultyBand {
        DifficultyBand::from_ratio(self.comprehension)
    }
}

/// Analysis pipeline errors
///
/// External collaborators (fallback segmenter, entity recognizer) can
/// fail per document; the error carries their message so a batch can
/// report the failed document and continue.
#[derive(Debug, Clone, Error)]
pub enum AnalyzeError {
    #[error("fallback segmentation failed: {0}")]
    Segmentation(String),

    #[error("entity recognition failed: {0}")]
    Recognition(String),
}
