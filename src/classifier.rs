// ZH-Check Classifier
// Assigns a comprehension status to each token

use crate::types::{ClassifiedToken, IgnoreReason, Token, TokenStatus};
use crate::vocab::VocabularyStore;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// CJK and ASCII punctuation excluded from comprehension accounting
const PUNCTUATION_CHARS: &str = concat!(
    ",.:()!@[]+/\\！?？｡。＂＃＄％＆＇（）＊＋，－／：；＜＝＞＠［＼］＾＿｀｛｜｝～",
    "｟｠｢｣､、〃《》「」『』【】〔〕〖〗〘〙〚〛〜〝〞〟〰〾〿–—‘’‛“”„‟…‧﹏.?;﹔|-·*─'\"",
);

static PUNCTUATION: Lazy<FxHashSet<char>> =
    Lazy::new(|| PUNCTUATION_CHARS.chars().collect());

/// Matches any ASCII letter or digit anywhere in the token
static ASCII_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z0-9]").unwrap());

/// Whether a token carries no comprehension signal
///
/// True for whitespace-only, digit-only, and punctuation-only tokens,
/// and for any token containing ASCII letters or digits (episode codes
/// like "S01E03" are noise, not vocabulary).
pub fn is_ignorable(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    if ASCII_ALNUM.is_match(text) {
        return true;
    }
    text.chars()
        .all(|c| c.is_whitespace() || PUNCTUATION.contains(&c))
}

/// Classify one token against the vocabulary store
///
/// Priority order:
/// 1. inside an excluded entity span → `Ignored(ProperNoun)`
/// 2. punctuation/whitespace/digit/Latin content → `Ignored(NonChinese)`
/// 3. unknown-override entry → `SuppressedUnknown`
/// 4. known, explicitly or through all-characters-known → `Known`
/// 5. anything else → `Unknown`
///
/// The override check precedes the known check on purpose: suppressing
/// the all-characters-known rule for listed compounds is the point of
/// the override list. Entries present in both raw lists never reach
/// step 3 because the store resolves them to Known at build time.
pub fn classify(token: Token, vocab: &VocabularyStore) -> ClassifiedToken {
    let status = if token.entity.map_or(false, |cat| cat.is_excluded()) {
        TokenStatus::Ignored(IgnoreReason::ProperNoun)
    } else if is_ignorable(&token.text) {
        TokenStatus::Ignored(IgnoreReason::NonChinese)
    } else if vocab.is_override(&token.text) {
        TokenStatus::SuppressedUnknown
    } else if vocab.is_known(&token.text) {
        TokenStatus::Known
    } else {
        TokenStatus::Unknown
    };

    ClassifiedToken { token, status }
}
