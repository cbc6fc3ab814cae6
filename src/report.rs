// ZH-Check Aggregator
// Collapses classified tokens into counts and an unknown-word table

use crate::types::{ClassifiedToken, TokenStatus};
use rustc_hash::{FxHashMap, FxHashSet};

/// Aggregated counts for one document, before enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Non-ignored token count
    pub word_count: usize,

    /// Distinct non-ignored token texts
    pub unique_words: usize,

    /// Tokens classified Known
    pub known_count: usize,

    /// (word, occurrences) over unknown tokens, frequency-descending,
    /// ties broken by first occurrence in the text
    pub unknown_frequencies: Vec<(String, usize)>,
}

impl Summary {
    /// known_count / word_count; fully comprehended when empty
    pub fn comprehension(&self) -> f64 {
        if self.word_count == 0 {
            1.0
        } else {
            self.known_count as f64 / self.word_count as f64
        }
    }
}

/// Aggregate classified tokens into a [`Summary`]
///
/// Ignored tokens contribute nothing. Suppressed-override tokens count
/// as unknown in both the ratio and the frequency table. The output
/// ordering is deterministic for identical input.
pub fn aggregate(tokens: &[ClassifiedToken]) -> Summary {
    let mut word_count = 0;
    let mut known_count = 0;
    let mut unique: FxHashSet<&str> = FxHashSet::default();
    let mut unknown_counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut unknown_order: Vec<&str> = Vec::new();

    for classified in tokens {
        if !classified.status.is_counted() {
            continue;
        }
        let text = classified.token.text.as_str();
        word_count += 1;
        unique.insert(text);

        match classified.status {
            TokenStatus::Known => known_count += 1,
            status if status.is_unknown() => {
                let count = unknown_counts.entry(text).or_insert(0);
                if *count == 0 {
                    unknown_order.push(text);
                }
                *count += 1;
            }
            _ => {}
        }
    }

    // First-occurrence order, then a stable sort by count descending,
    // gives the deterministic tie-break
    let mut unknown_frequencies: Vec<(String, usize)> = unknown_order
        .into_iter()
        .map(|text| (text.to_string(), unknown_counts[text]))
        .collect();
    unknown_frequencies.sort_by(|a, b| b.1.cmp(&a.1));

    Summary {
        word_count,
        unique_words: unique.len(),
        known_count,
        unknown_frequencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IgnoreReason, Token, TokenSource};

    fn classified(text: &str, status: TokenStatus) -> ClassifiedToken {
        ClassifiedToken {
            token: Token::new(text, 0, TokenSource::Vocabulary),
            status,
        }
    }

    #[test]
    fn test_empty_input() {
        let summary = aggregate(&[]);
        assert_eq!(summary.word_count, 0);
        assert_eq!(summary.unique_words, 0);
        assert_eq!(summary.comprehension(), 1.0);
        assert!(summary.unknown_frequencies.is_empty());
    }

    #[test]
    fn test_basic_counts() {
        let tokens = vec![
            classified("你好", TokenStatus::Known),
            classified("吗", TokenStatus::Unknown),
        ];
        let summary = aggregate(&tokens);
        assert_eq!(summary.word_count, 2);
        assert_eq!(summary.unique_words, 2);
        assert_eq!(summary.known_count, 1);
        assert_eq!(summary.comprehension(), 0.5);
    }

    #[test]
    fn test_ignored_excluded_everywhere() {
        let tokens = vec![
            classified("你好", TokenStatus::Known),
            classified("123", TokenStatus::Ignored(IgnoreReason::NonChinese)),
            classified("北京", TokenStatus::Ignored(IgnoreReason::ProperNoun)),
        ];
        let summary = aggregate(&tokens);
        assert_eq!(summary.word_count, 1);
        assert_eq!(summary.unique_words, 1);
        assert_eq!(summary.comprehension(), 1.0);
    }

    #[test]
    fn test_suppressed_counts_as_unknown() {
        let tokens = vec![
            classified("你好", TokenStatus::Known),
            classified("好吃", TokenStatus::SuppressedUnknown),
        ];
        let summary = aggregate(&tokens);
        assert_eq!(summary.comprehension(), 0.5);
        assert_eq!(summary.unknown_frequencies, vec![("好吃".to_string(), 1)]);
    }

    #[test]
    fn test_frequency_ordering() {
        let tokens = vec![
            classified("甲", TokenStatus::Unknown),
            classified("乙", TokenStatus::Unknown),
            classified("乙", TokenStatus::Unknown),
            classified("丙", TokenStatus::Unknown),
        ];
        let summary = aggregate(&tokens);
        assert_eq!(
            summary.unknown_frequencies,
            vec![
                ("乙".to_string(), 2),
                // Equal counts keep first-occurrence order
                ("甲".to_string(), 1),
                ("丙".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_repeated_words_unique_count() {
        let tokens = vec![
            classified("你好", TokenStatus::Known),
            classified("你好", TokenStatus::Known),
            classified("吗", TokenStatus::Unknown),
        ];
        let summary = aggregate(&tokens);
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.unique_words, 2);
        assert_eq!(summary.known_count, 2);
    }
}
