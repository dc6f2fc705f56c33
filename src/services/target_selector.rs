use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    models::domain::{Category, Token},
    tables::{DistractorTable, VocabularyTable},
};

/// Tunable scoring constants. These are empirically chosen policy; only the
/// relative ordering of category priorities is load-bearing.
#[derive(Clone, Copy, Debug)]
pub struct ScoringPolicy {
    pub length_weight: f64,
    pub distractor_bonus: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            length_weight: 0.1,
            distractor_bonus: 2.0,
        }
    }
}

/// Picks the most blank-worthy distinct token texts from an extraction run.
///
/// Scoring is fully deterministic: category priority, plus a small bonus per
/// character of token length, plus a bonus when the distractor table has a
/// hand-authored entry for the text.
pub struct TargetSelector {
    vocabulary: Arc<VocabularyTable>,
    distractors: Arc<DistractorTable>,
    policy: ScoringPolicy,
    symbol_fallback: bool,
}

impl TargetSelector {
    pub fn new(
        vocabulary: Arc<VocabularyTable>,
        distractors: Arc<DistractorTable>,
        policy: ScoringPolicy,
        symbol_fallback: bool,
    ) -> Self {
        Self {
            vocabulary,
            distractors,
            policy,
            symbol_fallback,
        }
    }

    fn score(&self, token: &Token) -> f64 {
        let mut score = self.vocabulary.priority(token.category) as f64;
        score += self.policy.length_weight * token.text.len() as f64;
        if self.distractors.contains(&token.text) {
            score += self.policy.distractor_bonus;
        }
        score
    }

    /// Up to `num_targets` distinct token texts, best-scored first. Punctuation
    /// makes poor blanks, so `symbol` tokens are never candidates unless the
    /// symbol fallback is enabled and no other candidate exists at all.
    pub fn select_targets(&self, tokens: &[Token], num_targets: usize) -> Vec<Token> {
        let mut scored: Vec<(f64, Token)> = Vec::new();
        let mut symbols: Vec<Token> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for token in tokens {
            // First occurrence of each distinct text is the one scored.
            if !seen.insert(token.text.as_str()) {
                continue;
            }
            if token.category == Category::Symbol {
                symbols.push(token.clone());
                continue;
            }
            scored.push((self.score(token), token.clone()));
        }

        if scored.is_empty() {
            if self.symbol_fallback && !symbols.is_empty() {
                log::warn!(
                    "only symbol tokens available, offering {} as low-value targets",
                    symbols.len().min(num_targets)
                );
                return symbols.into_iter().take(num_targets).collect();
            }
            return Vec::new();
        }

        // Stable sort keeps position order on equal scores.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(num_targets)
            .map(|(_, token)| token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token_extractor::TokenExtractor;

    fn selector(symbol_fallback: bool) -> TargetSelector {
        TargetSelector::new(
            Arc::new(VocabularyTable::builtin()),
            Arc::new(DistractorTable::builtin()),
            ScoringPolicy::default(),
            symbol_fallback,
        )
    }

    fn tokens_of(code: &str) -> Vec<Token> {
        TokenExtractor::new(&VocabularyTable::builtin())
            .unwrap()
            .extract_all_tokens(code)
    }

    #[test]
    fn selects_top_scored_targets() {
        let tokens = tokens_of("for(int i = 0; i < 5; i++){ cout << i << endl; }");
        let targets = selector(false).select_targets(&tokens, 3);

        let texts: HashSet<&str> = targets.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, HashSet::from(["for", "int", "cout"]));
    }

    #[test]
    fn deduplicates_by_token_text() {
        let tokens = tokens_of("int a; int b; int c;");
        let targets = selector(false).select_targets(&tokens, 5);

        assert_eq!(targets.iter().filter(|t| t.text == "int").count(), 1);
    }

    #[test]
    fn returns_fewer_when_candidates_run_out() {
        let tokens = tokens_of("int x;");
        let targets = selector(false).select_targets(&tokens, 5);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].text, "int");
    }

    #[test]
    fn symbols_excluded_by_default() {
        let tokens = tokens_of("{}();");
        let targets = selector(false).select_targets(&tokens, 3);

        assert!(targets.is_empty());
    }

    #[test]
    fn symbol_fallback_requires_no_other_candidates() {
        let with_fallback = selector(true);

        // Symbol-only input: fallback fires.
        let targets = with_fallback.select_targets(&tokens_of("{}();"), 2);
        assert!(!targets.is_empty());
        assert!(targets.iter().all(|t| t.category == Category::Symbol));

        // Better categories present: symbols still excluded.
        let targets = with_fallback.select_targets(&tokens_of("int x; {}"), 5);
        assert!(targets.iter().all(|t| t.category != Category::Symbol));
    }

    #[test]
    fn selection_is_deterministic_across_runs() {
        let code = "#include <iostream>\nint main(){ vector<int> v; v.push_back(1); return 0; }";
        let tokens = tokens_of(code);
        let selector = selector(false);

        let first: Vec<String> = selector
            .select_targets(&tokens, 4)
            .into_iter()
            .map(|t| t.text)
            .collect();
        let second: Vec<String> = selector
            .select_targets(&tokens, 4)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn distractor_table_entry_raises_score() {
        // `getline` (stream, no table entry) vs `cout` (stream, table entry):
        // the bonus must outweigh getline's length advantage.
        let tokens = tokens_of("getline(cin, line); cout << line;");
        let targets = selector(false).select_targets(&tokens, 1);

        assert_eq!(targets[0].text, "cout");
    }

    #[test]
    fn empty_token_list_yields_no_targets() {
        assert!(selector(false).select_targets(&[], 3).is_empty());
        assert!(selector(true).select_targets(&[], 3).is_empty());
    }
}
