use std::collections::HashSet;

use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Category, Token},
    tables::VocabularyTable,
};

/// Scans code text for every occurrence of every vocabulary entry.
///
/// Matchers are compiled once at construction. Alphanumeric entries are
/// anchored with word boundaries so `int` never matches inside `print`;
/// operators, `#`-prefixed directives, and structural symbols match as literal
/// substrings.
pub struct TokenExtractor {
    matchers: Vec<Matcher>,
}

struct Matcher {
    text: String,
    category: Category,
    pattern: Regex,
}

impl TokenExtractor {
    pub fn new(vocabulary: &VocabularyTable) -> AppResult<Self> {
        let mut matchers = Vec::new();

        for entry in vocabulary.categories() {
            for token in &entry.tokens {
                let pattern = Regex::new(&Self::pattern_for(token)).map_err(|e| {
                    AppError::InvalidTable(format!(
                        "cannot compile matcher for token '{}': {}",
                        token, e
                    ))
                })?;
                matchers.push(Matcher {
                    text: token.clone(),
                    category: entry.name,
                    pattern,
                });
            }
        }

        Ok(Self { matchers })
    }

    fn pattern_for(token: &str) -> String {
        let escaped = regex::escape(token);
        if token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            format!(r"\b{}\b", escaped)
        } else {
            escaped
        }
    }

    /// All matches in ascending position order, deduplicated by
    /// `(text, position)`. A token listed under two categories is reported
    /// once, under the category that appears first in the vocabulary.
    pub fn extract_all_tokens(&self, code: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut seen: HashSet<(&str, usize)> = HashSet::new();

        for matcher in &self.matchers {
            for m in matcher.pattern.find_iter(code) {
                if seen.insert((matcher.text.as_str(), m.start())) {
                    tokens.push(Token::new(&matcher.text, matcher.category, m.start(), code));
                }
            }
        }

        // Stable sort: ties keep vocabulary discovery order.
        tokens.sort_by_key(|t| t.position);
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TokenExtractor {
        TokenExtractor::new(&VocabularyTable::builtin()).unwrap()
    }

    #[test]
    fn extracts_keywords_with_word_boundaries() {
        let tokens = extractor().extract_all_tokens("int x = 0; print(x);");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"int"));
        // `int` inside `print` must not match.
        assert_eq!(texts.iter().filter(|t| **t == "int").count(), 1);
    }

    #[test]
    fn extracts_operators_as_literals() {
        let tokens = extractor().extract_all_tokens("i++; j--; a == b;");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"++"));
        assert!(texts.contains(&"--"));
        assert!(texts.contains(&"=="));
    }

    #[test]
    fn extracts_preprocessor_directives() {
        let tokens = extractor().extract_all_tokens("#include <iostream>");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"#include"));
        assert!(texts.contains(&"iostream"));
    }

    #[test]
    fn output_sorted_by_position_without_duplicates() {
        let tokens = extractor().extract_all_tokens("for(int i = 0; i < 5; i++){}");

        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        let mut keys: Vec<(String, usize)> = tokens
            .iter()
            .map(|t| (t.text.clone(), t.position))
            .collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn shared_token_claimed_by_earlier_category() {
        // `vector` is listed under container (priority 8) and include (4);
        // container appears first in the document.
        let tokens = extractor().extract_all_tokens("vector<int> v;");

        let vector_token = tokens.iter().find(|t| t.text == "vector").unwrap();
        assert_eq!(vector_token.category, Category::Container);
        assert_eq!(
            tokens.iter().filter(|t| t.text == "vector").count(),
            1
        );
    }

    #[test]
    fn empty_code_yields_no_tokens() {
        assert!(extractor().extract_all_tokens("").is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let code = "for(int i = 0; i < 5; i++){ cout << i << endl; }";
        let extractor = extractor();

        let first = extractor.extract_all_tokens(code);
        let second = extractor.extract_all_tokens(code);
        assert_eq!(first, second);
    }
}
