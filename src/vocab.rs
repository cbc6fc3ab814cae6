// ZH-Check Vocabulary Store
// Known and unknown-override word sets with character expansion

use rustc_hash::FxHashSet;

/// Longest vocabulary entry considered during matching
///
/// Comprehension vocabulary entries beyond four characters are rare;
/// probing longer substrings buys almost nothing.
pub const MAX_WORD_LEN: usize = 4;

/// Which set a substring matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// In the known set
    Known,
    /// In the unknown-override set (and not in known)
    Override,
}

/// Immutable store of known words and unknown-override compounds
///
/// Both input lists are expanded so that every individual character of
/// every entry is itself a known entry: a learner who knows a word is
/// assumed to know its characters. Overrides exist to suppress exactly
/// that assumption for specific compounds, so an override entry keeps
/// its characters known while the compound itself stays unknown.
///
/// The store is never mutated after `build` and can be shared read-only
/// across threads.
///
/// # Example
/// ```
/// use zh_check::vocab::VocabularyStore;
///
/// let store = VocabularyStore::build(["你好"], ["好吃"]);
/// assert!(store.is_known("你好"));
/// assert!(store.is_known("好"));       // expanded character
/// assert!(store.is_override("好吃"));  // suppressed compound
/// ```
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    known: FxHashSet<String>,
    overrides: FxHashSet<String>,
}

impl VocabularyStore {
    /// Build a store from raw known and unknown-override entries
    ///
    /// Expansion and conflict rules:
    /// - every entry also contributes its individual characters to Known
    /// - a string present in both raw lists is stored only in Known
    ///
    /// # Arguments
    /// * `known` - raw known-word entries
    /// * `unknown` - raw unknown-override entries
    pub fn build<K, U>(known: K, unknown: U) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        let mut known_set: FxHashSet<String> = FxHashSet::default();
        let mut override_set: FxHashSet<String> = FxHashSet::default();

        for entry in known {
            let word = entry.as_ref();
            if word.is_empty() {
                continue;
            }
            known_set.insert(word.to_string());
            for ch in word.chars() {
                known_set.insert(ch.to_string());
            }
        }

        for entry in unknown {
            let word = entry.as_ref();
            if word.is_empty() {
                continue;
            }
            override_set.insert(word.to_string());
            // Characters of an override compound are still knowable
            for ch in word.chars() {
                known_set.insert(ch.to_string());
            }
        }

        // Known wins any conflict for the identical string
        override_set.retain(|word| !known_set.contains(word));

        Self {
            known: known_set,
            overrides: override_set,
        }
    }

    /// Probe for a vocabulary match of exactly `len` chars at `offset`
    ///
    /// Known is checked before the override set, so an entry in both
    /// resolves Known. Used by the segmenter's DP relaxation.
    pub fn match_at(&self, chars: &[char], offset: usize, len: usize) -> Option<MatchKind> {
        if offset + len > chars.len() {
            return None;
        }
        let word: String = chars[offset..offset + len].iter().collect();
        if self.known.contains(&word) {
            Some(MatchKind::Known)
        } else if self.overrides.contains(&word) {
            Some(MatchKind::Override)
        } else {
            None
        }
    }

    /// Longest vocabulary match starting at `offset`
    ///
    /// Scans lengths from `max_len` down to 1 and returns the first hit
    /// with its length. At a given length Known beats Override; a longer
    /// override still beats a shorter known word, which is what lets an
    /// override compound claim its characters.
    pub fn longest_match(
        &self,
        chars: &[char],
        offset: usize,
        max_len: usize,
    ) -> Option<(MatchKind, usize)> {
        let limit = max_len.min(chars.len().saturating_sub(offset));
        for len in (1..=limit).rev() {
            if let Some(kind) = self.match_at(chars, offset, len) {
                return Some((kind, len));
            }
        }
        None
    }

    /// Whether a word counts as known
    ///
    /// True for explicit entries and for unlisted compounds whose
    /// characters are all individually known.
    pub fn is_known(&self, word: &str) -> bool {
        if self.known.contains(word) {
            return true;
        }
        let mut chars = word.chars().peekable();
        if chars.peek().is_none() {
            return false;
        }
        chars.all(|ch| self.known.contains(ch.to_string().as_str()))
    }

    /// Whether a word is explicitly suppressed by the override list
    pub fn is_override(&self, word: &str) -> bool {
        self.overrides.contains(word)
    }

    /// Number of entries in the expanded known set
    pub fn known_len(&self) -> usize {
        self.known.len()
    }

    /// Number of surviving override entries
    pub fn override_len(&self) -> usize {
        self.overrides.len()
    }
}
