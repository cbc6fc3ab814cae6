// ZH-Check Analyzer
// Full pipeline: clean, segment, filter, classify, aggregate, enrich

use crate::backends::JiebaBackend;
use crate::classifier::classify;
use crate::enrich::{enrich, DefinitionProvider, PinyinRomanizer, Romanizer};
use crate::entity::{mark_proper_nouns, EntityRecognizer};
use crate::report::aggregate;
use crate::segmenter::{FallbackSegmenter, Segmenter};
use crate::types::{AnalysisReport, AnalyzeError, ClassifiedToken};
use crate::vocab::VocabularyStore;

/// Strip all whitespace before analysis
///
/// Line breaks and spacing carry no comprehension signal and would
/// otherwise split vocabulary words across fallback runs.
fn clean_text(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Comprehension analyzer for one vocabulary
///
/// Owns an immutable vocabulary store plus the external collaborators:
/// fallback segmenter, entity recognizer, romanizer, and an optional
/// definition provider. Every document is analyzed independently
/// against the same read-only store.
///
/// # Example
/// ```no_run
/// use zh_check::{Analyzer, VocabularyStore};
///
/// let store = VocabularyStore::build(["你", "好", "你好"], Vec::<&str>::new());
/// let analyzer = Analyzer::new(store);
/// let report = analyzer.analyze("你好吗").unwrap();
/// assert_eq!(report.word_count, 2);
/// ```
pub struct Analyzer {
    vocab: VocabularyStore,
    fallback: Box<dyn FallbackSegmenter>,
    recognizer: Box<dyn EntityRecognizer>,
    romanizer: Box<dyn Romanizer>,
    glossary: Option<Box<dyn DefinitionProvider>>,
}

impl Analyzer {
    /// Create an analyzer with the jieba backends
    ///
    /// Loads jieba's default dictionary once; segmentation fallback and
    /// proper-noun recognition share it. Romanization uses tone marks.
    pub fn new(vocab: VocabularyStore) -> Self {
        let backend = JiebaBackend::new();
        Self::with_backends(
            vocab,
            Box::new(backend.clone()),
            Box::new(backend),
            Box::new(PinyinRomanizer),
        )
    }

    /// Create an analyzer with custom external collaborators
    pub fn with_backends(
        vocab: VocabularyStore,
        fallback: Box<dyn FallbackSegmenter>,
        recognizer: Box<dyn EntityRecognizer>,
        romanizer: Box<dyn Romanizer>,
    ) -> Self {
        Self {
            vocab,
            fallback,
            recognizer,
            romanizer,
            glossary: None,
        }
    }

    /// Attach a definition provider for unknown-word glosses
    pub fn with_glossary(mut self, glossary: impl DefinitionProvider + 'static) -> Self {
        self.glossary = Some(Box::new(glossary));
        self
    }

    /// The vocabulary store this analyzer runs against
    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocab
    }

    /// Segment and classify one document without aggregating
    ///
    /// Exposed for consumers that want per-token detail (highlighting,
    /// debugging) rather than the summary report.
    pub fn classify_text(&self, text: &str) -> Result<Vec<ClassifiedToken>, AnalyzeError> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let segmenter = Segmenter::new(&self.vocab, self.fallback.as_ref());
        let mut tokens = segmenter.segment(&cleaned)?;

        let spans = self
            .recognizer
            .recognize(&cleaned)
            .map_err(|e| AnalyzeError::Recognition(e.to_string()))?;
        mark_proper_nouns(&mut tokens, &spans);

        Ok(tokens
            .into_iter()
            .map(|token| classify(token, &self.vocab))
            .collect())
    }

    /// Analyze one document into a comprehension report
    ///
    /// Empty input (or input that cleans to nothing) yields the empty
    /// report: zero counts, comprehension 1.0.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalyzeError> {
        let classified = self.classify_text(text)?;
        let summary = aggregate(&classified);
        let unknown_words = enrich(
            &summary.unknown_frequencies,
            self.romanizer.as_ref(),
            self.glossary.as_deref(),
        );

        Ok(AnalysisReport {
            word_count: summary.word_count,
            unique_words: summary.unique_words,
            known_count: summary.known_count,
            comprehension: summary.comprehension(),
            unknown_words,
        })
    }

    /// Analyze a batch of documents independently
    ///
    /// A collaborator failure on one document marks that document
    /// failed and leaves the rest of the batch untouched.
    pub fn analyze_batch(&self, docs: &[&str]) -> Vec<Result<AnalysisReport, AnalyzeError>> {
        docs.iter().map(|doc| self.analyze(doc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityCategory, EntitySpan, IgnoreReason, TokenStatus};

    /// Splits per character, standing in for the external segmenter
    struct CharSplitter;

    impl FallbackSegmenter for CharSplitter {
        fn segment(&self, text: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
            Ok(text.chars().map(|c| c.to_string()).collect())
        }
    }

    struct NoEntities;

    impl EntityRecognizer for NoEntities {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, Box<dyn std::error::Error>> {
            Ok(Vec::new())
        }
    }

    struct FixedSpans(Vec<EntitySpan>);

    impl EntityRecognizer for FixedSpans {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, Box<dyn std::error::Error>> {
            Ok(self.0.clone())
        }
    }

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, Box<dyn std::error::Error>> {
            Err("model unavailable".into())
        }
    }

    struct SilentRomanizer;

    impl Romanizer for SilentRomanizer {
        fn to_pinyin(&self, _word: &str) -> String {
            String::new()
        }
    }

    fn analyzer(known: &[&str], unknown: &[&str]) -> Analyzer {
        Analyzer::with_backends(
            VocabularyStore::build(known.iter().copied(), unknown.iter().copied()),
            Box::new(CharSplitter),
            Box::new(NoEntities),
            Box::new(SilentRomanizer),
        )
    }

    #[test]
    fn test_empty_text_report() {
        let report = analyzer(&["你好"], &[]).analyze("").unwrap();
        assert_eq!(report.word_count, 0);
        assert_eq!(report.comprehension, 1.0);
        assert!(report.unknown_words.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let report = analyzer(&["你好"], &[]).analyze(" \n\t ").unwrap();
        assert_eq!(report.word_count, 0);
        assert_eq!(report.comprehension, 1.0);
    }

    #[test]
    fn test_half_known_scenario() {
        // 你好 known, 吗 falls back and is unknown
        let report = analyzer(&["你", "好", "你好"], &[]).analyze("你好吗").unwrap();
        assert_eq!(report.word_count, 2);
        assert_eq!(report.known_count, 1);
        assert_eq!(report.comprehension, 0.5);
        assert_eq!(report.unknown_words.len(), 1);
        assert_eq!(report.unknown_words[0].word, "吗");
    }

    #[test]
    fn test_override_scenario() {
        let report = analyzer(&["好", "吃"], &["好吃"]).analyze("好吃").unwrap();
        assert_eq!(report.word_count, 1);
        assert_eq!(report.known_count, 0);
        assert_eq!(report.comprehension, 0.0);
        assert_eq!(report.unknown_words[0].word, "好吃");
    }

    #[test]
    fn test_digits_and_latin_ignored() {
        let report = analyzer(&["你好"], &[]).analyze("你好123OK").unwrap();
        assert_eq!(report.word_count, 1);
        assert_eq!(report.comprehension, 1.0);
    }

    #[test]
    fn test_whitespace_does_not_split_words() {
        // Cleanup joins 你 and 好 back into one vocabulary match
        let report = analyzer(&["你好"], &[]).analyze("你 好").unwrap();
        assert_eq!(report.word_count, 1);
        assert_eq!(report.comprehension, 1.0);
    }

    #[test]
    fn test_proper_noun_excluded() {
        let store = VocabularyStore::build(["你好"], Vec::<&str>::new());
        let spans = vec![EntitySpan {
            start: 2,
            end: 4,
            category: EntityCategory::Person,
        }];
        let analyzer = Analyzer::with_backends(
            store,
            Box::new(CharSplitter),
            Box::new(FixedSpans(spans)),
            Box::new(SilentRomanizer),
        );

        // 你好 counted, the name 小明 excluded entirely
        let report = analyzer.analyze("你好小明").unwrap();
        assert_eq!(report.word_count, 1);
        assert_eq!(report.comprehension, 1.0);

        let classified = analyzer.classify_text("你好小明").unwrap();
        assert!(classified
            .iter()
            .any(|c| c.status == TokenStatus::Ignored(IgnoreReason::ProperNoun)));
    }

    #[test]
    fn test_recognizer_failure_is_per_document() {
        let analyzer = Analyzer::with_backends(
            VocabularyStore::build(["你好"], Vec::<&str>::new()),
            Box::new(CharSplitter),
            Box::new(FailingRecognizer),
            Box::new(SilentRomanizer),
        );

        let results = analyzer.analyze_batch(&["你好", ""]);
        assert!(matches!(results[0], Err(AnalyzeError::Recognition(_))));
        // Empty document never reaches the recognizer
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_idempotent_reports() {
        let analyzer = analyzer(&["你", "好", "你好"], &["好吃"]);
        let text = "你好吗好吃好吃";
        let first = analyzer.analyze(text).unwrap();
        let second = analyzer.analyze(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("你 好\n吗\t"), "你好吗");
        assert_eq!(clean_text(""), "");
    }
}
