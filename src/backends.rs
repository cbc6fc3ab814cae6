// ZH-Check Jieba Backends
// jieba-rs implementations of the fallback segmenter and recognizer

use std::sync::Arc;

use jieba_rs::Jieba;

use crate::entity::EntityRecognizer;
use crate::segmenter::FallbackSegmenter;
use crate::types::{EntityCategory, EntitySpan};

/// Shared jieba instance serving both external roles
///
/// jieba's embedded default dictionary drives general-purpose
/// segmentation (`cut`) for unmatched runs and POS tagging (`tag`) for
/// proper-noun spans. Construction loads the dictionary once; clones
/// share it.
#[derive(Clone)]
pub struct JiebaBackend {
    jieba: Arc<Jieba>,
}

impl JiebaBackend {
    /// Load the default dictionary
    pub fn new() -> Self {
        Self {
            jieba: Arc::new(Jieba::new()),
        }
    }

    /// Map a jieba POS tag to an entity category
    ///
    /// nr = person name, ns = place name, nt = organization,
    /// nz = other proper noun (recognized but not excluded).
    fn category_for(tag: &str) -> Option<EntityCategory> {
        match tag {
            "nr" => Some(EntityCategory::Person),
            "ns" => Some(EntityCategory::Gpe),
            "nt" => Some(EntityCategory::Org),
            "nz" => Some(EntityCategory::Other),
            _ => None,
        }
    }
}

impl Default for JiebaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackSegmenter for JiebaBackend {
    fn segment(&self, text: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self
            .jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

impl EntityRecognizer for JiebaBackend {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, Box<dyn std::error::Error>> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for tagged in self.jieba.tag(text, true) {
            let len = tagged.word.chars().count();
            if let Some(category) = Self::category_for(tagged.tag) {
                spans.push(EntitySpan {
                    start: offset,
                    end: offset + len,
                    category,
                });
            }
            offset += len;
        }
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_covers_text() {
        let backend = JiebaBackend::new();
        let words = backend.segment("我们今天去学校").unwrap();
        assert!(!words.is_empty());
        assert_eq!(words.concat(), "我们今天去学校");
    }

    #[test]
    fn test_recognize_place_name() {
        let backend = JiebaBackend::new();
        let spans = backend.recognize("我住在北京").unwrap();
        assert!(spans
            .iter()
            .any(|span| span.category == EntityCategory::Gpe));
    }

    #[test]
    fn test_span_offsets_are_chars() {
        let backend = JiebaBackend::new();
        let text = "我住在北京";
        let n = text.chars().count();
        for span in backend.recognize(text).unwrap() {
            assert!(span.start < span.end);
            assert!(span.end <= n);
        }
    }

    #[test]
    fn test_clone_shares_dictionary() {
        let backend = JiebaBackend::new();
        let clone = backend.clone();
        assert_eq!(
            backend.segment("你好").unwrap(),
            clone.segment("你好").unwrap()
        );
    }
}
