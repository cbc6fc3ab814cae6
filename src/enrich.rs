// ZH-Check Enricher
// Attaches pronunciation and gloss to unknown words

use pinyin::ToPinyin;
use rustc_hash::FxHashMap;

use crate::types::UnknownWord;

/// External romanization function
pub trait Romanizer {
    /// Pinyin for `word`, space-separated syllables; empty when the
    /// word has no romanizable characters
    fn to_pinyin(&self, word: &str) -> String;
}

/// External dictionary lookup, treated as a black box
pub trait DefinitionProvider {
    /// Gloss for `word`, or `None` when the dictionary has no entry
    fn lookup(&self, word: &str) -> Option<String>;
}

/// Tone-marked romanizer backed by the `pinyin` crate
///
/// Non-Han characters contribute no syllable; a word with none at all
/// romanizes to the empty string. Missing pinyin is never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn to_pinyin(&self, word: &str) -> String {
        word.to_pinyin()
            .flatten()
            .map(|syllable| syllable.with_tone())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// In-memory glossary parsed from CC-CEDICT formatted text
///
/// Each line is `traditional simplified [pin1 yin1] /sense/sense/...`;
/// both written forms map to the senses joined with `"; "`. Malformed
/// lines are skipped, never fatal.
#[derive(Debug, Clone, Default)]
pub struct CedictGlossary {
    entries: FxHashMap<String, String>,
}

impl CedictGlossary {
    /// Parse a glossary from CC-CEDICT formatted content
    pub fn parse(content: &str) -> Self {
        let mut entries = FxHashMap::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((head, senses)) = line.split_once('/') else {
                continue;
            };
            let mut forms = head.split_whitespace();
            let (Some(trad), Some(simp)) = (forms.next(), forms.next()) else {
                continue;
            };
            let gloss: String = senses
                .split('/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; ");
            if gloss.is_empty() {
                continue;
            }
            // First entry wins for words listed more than once
            entries.entry(simp.to_string()).or_insert_with(|| gloss.clone());
            if trad != simp {
                entries.entry(trad.to_string()).or_insert(gloss);
            }
        }
        Self { entries }
    }

    /// Number of distinct written forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the glossary holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionProvider for CedictGlossary {
    fn lookup(&self, word: &str) -> Option<String> {
        self.entries.get(word).cloned()
    }
}

/// Enrich an unknown-word frequency table for reporting
///
/// Input order (frequency-descending) is preserved. A missing gloss or
/// missing pinyin degrades to an empty field.
pub fn enrich(
    frequencies: &[(String, usize)],
    romanizer: &dyn Romanizer,
    provider: Option<&dyn DefinitionProvider>,
) -> Vec<UnknownWord> {
    frequencies
        .iter()
        .map(|(word, count)| UnknownWord {
            word: word.clone(),
            count: *count,
            pinyin: romanizer.to_pinyin(word),
            gloss: provider
                .and_then(|p| p.lookup(word))
                .unwrap_or_default(),
        })
        .collect()
}
