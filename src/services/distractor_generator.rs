use std::sync::Arc;

use rand::Rng;

use crate::tables::{DistractorTable, VocabularyTable};

pub const DISTRACTOR_COUNT: usize = 3;
pub const GENERIC_PLACEHOLDERS: [&str; 3] = ["option1", "option2", "option3"];

/// Produces exactly three plausible-but-wrong alternatives for a target.
///
/// Lookup order: hand-authored table entry, then a random sample of
/// same-category siblings, then generic placeholders. A distractor shortfall
/// is never an error; the list is padded to three.
pub struct DistractorGenerator {
    vocabulary: Arc<VocabularyTable>,
    distractors: Arc<DistractorTable>,
}

impl DistractorGenerator {
    pub fn new(vocabulary: Arc<VocabularyTable>, distractors: Arc<DistractorTable>) -> Self {
        Self {
            vocabulary,
            distractors,
        }
    }

    pub fn distractors_for<R: Rng + ?Sized>(&self, target: &str, rng: &mut R) -> Vec<String> {
        if let Some(entries) = self.distractors.get(target) {
            let picked: Vec<String> = entries.iter().take(DISTRACTOR_COUNT).cloned().collect();
            return Self::sanitize(target, picked);
        }

        if let Some((category, others)) = self.vocabulary.siblings_of(target) {
            log::debug!(
                "no distractor entry for '{}', sampling {} siblings",
                target,
                category
            );
            let sampled: Vec<String> = if others.len() > DISTRACTOR_COUNT {
                rand::seq::index::sample(rng, others.len(), DISTRACTOR_COUNT)
                    .iter()
                    .map(|i| others[i].to_string())
                    .collect()
            } else {
                others.iter().map(|s| s.to_string()).collect()
            };
            return Self::sanitize(target, sampled);
        }

        GENERIC_PLACEHOLDERS.iter().map(|s| s.to_string()).collect()
    }

    /// Enforce the option invariants on a candidate list from any origin:
    /// exactly three entries, none equal to the target, no duplicates. Used
    /// both internally and to clean externally supplied distractors in the
    /// validated variant.
    pub fn sanitize(target: &str, candidates: Vec<String>) -> Vec<String> {
        let mut cleaned: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
        for candidate in candidates {
            if candidate != target && !cleaned.contains(&candidate) {
                cleaned.push(candidate);
            }
            if cleaned.len() == DISTRACTOR_COUNT {
                return cleaned;
            }
        }

        for generic in GENERIC_PLACEHOLDERS {
            if cleaned.len() == DISTRACTOR_COUNT {
                break;
            }
            if generic != target && !cleaned.iter().any(|c| c == generic) {
                cleaned.push(generic.to_string());
            }
        }
        cleaned
    }
}
