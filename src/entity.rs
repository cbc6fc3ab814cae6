// ZH-Check Proper-Noun Filter
// Marks tokens contained in excluded named-entity spans

use crate::types::{EntitySpan, Token};

/// External named-entity recognizer
///
/// Like the fallback segmenter this is a trained, versioned black box;
/// the core only depends on the spans it reports. Offsets are char
/// offsets into the analyzed text, end exclusive.
pub trait EntityRecognizer {
    /// Recognize entity spans in `text`
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, Box<dyn std::error::Error>>;
}

/// Annotate tokens that fall inside excluded entity spans
///
/// A token is marked only when its span is fully contained in a span
/// whose category is excluded (PERSON, GPE, ORG, FAC, LOC). Partial
/// overlap leaves the token unmarked: an ordinary word sharing
/// characters with a recognized name must not be filtered away.
pub fn mark_proper_nouns(tokens: &mut [Token], spans: &[EntitySpan]) {
    if spans.is_empty() {
        return;
    }
    for token in tokens.iter_mut() {
        let (start, end) = (token.start, token.end());
        for span in spans {
            if span.category.is_excluded() && span.start <= start && end <= span.end {
                token.entity = Some(span.category);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityCategory, TokenSource};

    fn token(text: &str, start: usize) -> Token {
        Token::new(text, start, TokenSource::Vocabulary)
    }

    fn span(start: usize, end: usize, category: EntityCategory) -> EntitySpan {
        EntitySpan {
            start,
            end,
            category,
        }
    }

    #[test]
    fn test_contained_token_marked() {
        // 李小明 at chars 0..3, tokenized as 李 + 小明
        let mut tokens = vec![token("李", 0), token("小明", 1), token("你好", 3)];
        let spans = vec![span(0, 3, EntityCategory::Person)];
        mark_proper_nouns(&mut tokens, &spans);

        assert_eq!(tokens[0].entity, Some(EntityCategory::Person));
        assert_eq!(tokens[1].entity, Some(EntityCategory::Person));
        assert_eq!(tokens[2].entity, None);
    }

    #[test]
    fn test_partial_overlap_not_marked() {
        // Token straddles the span boundary
        let mut tokens = vec![token("明天", 2)];
        let spans = vec![span(0, 3, EntityCategory::Person)];
        mark_proper_nouns(&mut tokens, &spans);
        assert_eq!(tokens[0].entity, None);
    }

    #[test]
    fn test_non_excluded_category_ignored() {
        let mut tokens = vec![token("东西", 0)];
        let spans = vec![span(0, 2, EntityCategory::Other)];
        mark_proper_nouns(&mut tokens, &spans);
        assert_eq!(tokens[0].entity, None);
    }

    #[test]
    fn test_exact_span_match() {
        let mut tokens = vec![token("北京", 0)];
        let spans = vec![span(0, 2, EntityCategory::Gpe)];
        mark_proper_nouns(&mut tokens, &spans);
        assert_eq!(tokens[0].entity, Some(EntityCategory::Gpe));
    }

    #[test]
    fn test_no_spans_no_marks() {
        let mut tokens = vec![token("你好", 0)];
        mark_proper_nouns(&mut tokens, &[]);
        assert_eq!(tokens[0].entity, None);
    }
}
