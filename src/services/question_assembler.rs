use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, SubQuestion},
};

/// Turns code plus selected targets into a `Question`: blanks each target's
/// first remaining occurrence with a numbered placeholder and builds the
/// shuffled option list per blank.
pub struct QuestionAssembler;

impl QuestionAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Targets originating from the extractor always resolve verbatim. Targets
    /// from an external generator get one case-insensitive retry (adopting the
    /// code's actual casing); a target still missing is dropped with a warning
    /// and the question proceeds with the remainder.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        code: &str,
        targets: &[String],
        distractor_sets: &[Vec<String>],
        rng: &mut R,
    ) -> AppResult<Question> {
        if targets.is_empty() {
            return Err(AppError::NoValidTargets);
        }
        if targets.len() != distractor_sets.len() {
            return Err(AppError::ValidationError(format!(
                "got {} targets but {} distractor sets",
                targets.len(),
                distractor_sets.len()
            )));
        }

        let mut question_code = code.to_string();
        let mut resolved: Vec<(String, Vec<String>)> = Vec::new();

        for (target, distractors) in targets.iter().zip(distractor_sets) {
            // Later targets search the already-partially-blanked string, so
            // each replacement consumes exactly one occurrence.
            let actual = match Self::resolve_target(&question_code, target) {
                Some(actual) => actual,
                None => {
                    log::warn!("target '{}' not found in code, dropping", target);
                    continue;
                }
            };

            let blank = format!("_____({})_____", resolved.len() + 1);
            question_code = question_code.replacen(&actual, &blank, 1);
            resolved.push((actual, distractors.clone()));
        }

        if resolved.is_empty() {
            return Err(AppError::TargetNotInCode(targets.join(", ")));
        }

        let mut sub_questions = Vec::with_capacity(resolved.len());
        for (i, (target, distractors)) in resolved.into_iter().enumerate() {
            sub_questions.push(Self::build_sub_question(
                i as i16 + 1,
                target,
                distractors,
                rng,
            ));
        }

        Ok(Question::new(code, &question_code, sub_questions))
    }

    /// The correct entry is tagged before the shuffle and found by its tag
    /// afterwards, so the answer index is exact even when a distractor happens
    /// to equal the target ignoring case.
    fn build_sub_question<R: Rng + ?Sized>(
        number: i16,
        target: String,
        distractors: Vec<String>,
        rng: &mut R,
    ) -> SubQuestion {
        let mut tagged: Vec<(bool, String)> = Vec::with_capacity(distractors.len() + 1);
        tagged.push((true, target.clone()));
        tagged.extend(distractors.into_iter().map(|d| (false, d)));
        tagged.shuffle(rng);

        let mut answer = 1;
        let mut options = Vec::with_capacity(tagged.len());
        for (index, (is_target, text)) in tagged.into_iter().enumerate() {
            if is_target {
                answer = index as i16 + 1;
            }
            options.push(text);
        }

        SubQuestion {
            number,
            target,
            options,
            answer,
        }
    }

    fn resolve_target(code: &str, target: &str) -> Option<String> {
        // `contains("")` is trivially true; an empty or whitespace target
        // would blank nothing and make the empty string the correct answer.
        if target.trim().is_empty() {
            return None;
        }
        if code.contains(target) {
            return Some(target.to_string());
        }

        // Case-insensitive retry, adopting the casing actually in the code.
        let pattern = Regex::new(&format!("(?i){}", regex::escape(target))).ok()?;
        let found = pattern.find(code).map(|m| m.as_str().to_string());
        if let Some(ref actual) = found {
            log::info!(
                "target '{}' matched case-insensitively as '{}'",
                target,
                actual
            );
        }
        found
    }
}

impl Default for QuestionAssembler {
    fn default() -> Self {
        Self::new()
    }
}
