// ZH-Check Segmenter
// Two-pass tokenization: vocabulary-driven DP, then fallback splicing

use crate::types::{AnalyzeError, Token, TokenSource};
use crate::vocab::{VocabularyStore, MAX_WORD_LEN};

/// External general-purpose segmenter invoked on unmatched runs
///
/// Implementations are black boxes (a trained model, a service, a test
/// stub); the segmenter only relies on the returned words appearing in
/// source order.
pub trait FallbackSegmenter {
    /// Split `text` into an ordered sequence of words
    fn segment(&self, text: &str) -> Result<Vec<String>, Box<dyn std::error::Error>>;
}

/// One backtracked DP step
#[derive(Debug, Clone, Copy)]
struct Step {
    len: usize,
    matched: bool,
}

/// Vocabulary-maximizing tokenizer
///
/// A left-to-right DP minimizes the number of tokens covering the text,
/// which is equivalent to maximizing recognition of vocabulary words:
/// every vocabulary match of length L replaces L single-character steps.
/// Positions no vocabulary word covers remain single-character steps;
/// maximal runs of those are re-segmented by the fallback segmenter and
/// spliced into the output.
pub struct Segmenter<'a> {
    vocab: &'a VocabularyStore,
    fallback: &'a dyn FallbackSegmenter,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over an already-built store
    pub fn new(vocab: &'a VocabularyStore, fallback: &'a dyn FallbackSegmenter) -> Self {
        Self { vocab, fallback }
    }

    /// Segment `text` into an ordered sequence of tokens
    ///
    /// # Guarantees
    /// - no alternative segmentation covers the text in fewer tokens
    ///   while matching at least as many vocabulary words
    /// - among equal token counts, longer vocabulary matches win
    /// - text with no vocabulary match at all becomes one fallback call
    ///   on the whole string
    /// - empty text yields an empty sequence
    pub fn segment(&self, text: &str) -> Result<Vec<Token>, AnalyzeError> {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        // cost[i] = minimum token count covering chars [0, i)
        let mut cost = vec![usize::MAX; n + 1];
        let mut step = vec![Step { len: 0, matched: false }; n + 1];
        cost[0] = 0;

        for i in 0..n {
            if cost[i] == usize::MAX {
                continue;
            }
            let next = cost[i] + 1;
            let limit = MAX_WORD_LEN.min(n - i);

            // Longest-first so ties resolve toward longer vocabulary words
            for len in (1..=limit).rev() {
                if self.vocab.match_at(&chars, i, len).is_some() {
                    let end = i + len;
                    if next < cost[end] {
                        cost[end] = next;
                        step[end] = Step { len, matched: true };
                    }
                }
            }

            // Unmatched single-character step keeps the DP total; a
            // matched step of equal cost always takes precedence
            let end = i + 1;
            if next < cost[end] {
                cost[end] = next;
                step[end] = Step { len: 1, matched: false };
            }
        }

        // Backtrack into left-to-right (start, len, matched) entries
        let mut entries = Vec::new();
        let mut pos = n;
        while pos > 0 {
            let s = step[pos];
            pos -= s.len;
            entries.push((pos, s));
        }
        entries.reverse();

        // Emit tokens, collecting unmatched runs for the fallback pass
        let mut tokens = Vec::new();
        let mut run_start: Option<usize> = None;

        for &(start, s) in &entries {
            if s.matched {
                if let Some(rs) = run_start.take() {
                    self.splice_fallback(&chars, rs, start, &mut tokens)?;
                }
                let word: String = chars[start..start + s.len].iter().collect();
                tokens.push(Token::new(word, start, TokenSource::Vocabulary));
            } else if run_start.is_none() {
                run_start = Some(start);
            }
        }
        if let Some(rs) = run_start {
            self.splice_fallback(&chars, rs, n, &mut tokens)?;
        }

        Ok(tokens)
    }

    /// Re-segment an unmatched run and splice the result in
    fn splice_fallback(
        &self,
        chars: &[char],
        start: usize,
        end: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<(), AnalyzeError> {
        let run: String = chars[start..end].iter().collect();
        let words = self
            .fallback
            .segment(&run)
            .map_err(|e| AnalyzeError::Segmentation(e.to_string()))?;

        let mut offset = start;
        for word in words {
            if word.is_empty() {
                continue;
            }
            let len = word.chars().count();
            tokens.push(Token::new(word, offset, TokenSource::Fallback));
            offset += len;
        }
        Ok(())
    }
}
