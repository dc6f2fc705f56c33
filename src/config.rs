use std::env;

/// Runtime configuration for question generation.
///
/// Everything has a sensible default; env vars exist so the scoring policy and
/// table sources can be tuned without a rebuild. The scoring constants are
/// empirically tuned policy, not algorithmic invariants, which is why they live
/// here rather than in the selector.
#[derive(Clone, Debug)]
pub struct Config {
    pub default_num_blanks: i16,
    pub max_num_blanks: i16,
    pub length_weight: f64,
    pub distractor_bonus: f64,
    pub symbol_fallback: bool,
    pub rng_seed: Option<u64>,
    pub vocabulary_path: Option<String>,
    pub distractors_path: Option<String>,
    pub templates_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            default_num_blanks: env::var("CODEBLANKS_DEFAULT_BLANKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            max_num_blanks: env::var("CODEBLANKS_MAX_BLANKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            length_weight: env::var("CODEBLANKS_LENGTH_WEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.1),
            distractor_bonus: env::var("CODEBLANKS_DISTRACTOR_BONUS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2.0),
            symbol_fallback: env::var("CODEBLANKS_SYMBOL_FALLBACK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            rng_seed: env::var("CODEBLANKS_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
            vocabulary_path: env::var("CODEBLANKS_VOCABULARY_PATH").ok(),
            distractors_path: env::var("CODEBLANKS_DISTRACTORS_PATH").ok(),
            templates_path: env::var("CODEBLANKS_TEMPLATES_PATH").ok(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            default_num_blanks: 3,
            max_num_blanks: 10,
            length_weight: 0.1,
            distractor_bonus: 2.0,
            symbol_fallback: false,
            rng_seed: Some(42),
            vocabulary_path: None,
            distractors_path: None,
            templates_path: None,
        }
    }
}
