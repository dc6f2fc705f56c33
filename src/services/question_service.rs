use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::{GenerateQuestionRequest, TopicQuestionRequest, ValidatedQuestionRequest},
    },
    services::{
        code_source::CodeSource,
        distractor_generator::DistractorGenerator,
        question_assembler::QuestionAssembler,
        target_selector::{ScoringPolicy, TargetSelector},
        token_extractor::TokenExtractor,
    },
    tables::{DistractorTable, VocabularyTable},
};

/// Facade over the four-stage pipeline: extract tokens, select targets,
/// generate distractors, assemble the question. Stateless across calls; each
/// call gets its own RNG so parallel generation is safe.
pub struct QuestionService {
    extractor: TokenExtractor,
    selector: TargetSelector,
    distractor_generator: DistractorGenerator,
    assembler: QuestionAssembler,
    rng_seed: Option<u64>,
}

impl QuestionService {
    pub fn new(
        vocabulary: Arc<VocabularyTable>,
        distractors: Arc<DistractorTable>,
        policy: ScoringPolicy,
        symbol_fallback: bool,
        rng_seed: Option<u64>,
    ) -> AppResult<Self> {
        let extractor = TokenExtractor::new(&vocabulary)?;
        let selector = TargetSelector::new(
            Arc::clone(&vocabulary),
            Arc::clone(&distractors),
            policy,
            symbol_fallback,
        );
        let distractor_generator = DistractorGenerator::new(vocabulary, distractors);

        Ok(Self {
            extractor,
            selector,
            distractor_generator,
            assembler: QuestionAssembler::new(),
            rng_seed,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => VocabularyTable::from_path(path)?,
            None => VocabularyTable::builtin(),
        };
        let distractors = match &config.distractors_path {
            Some(path) => DistractorTable::from_path(path)?,
            None => DistractorTable::builtin(),
        };
        let policy = ScoringPolicy {
            length_weight: config.length_weight,
            distractor_bonus: config.distractor_bonus,
        };

        Self::new(
            Arc::new(vocabulary),
            Arc::new(distractors),
            policy,
            config.symbol_fallback,
            config.rng_seed,
        )
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The deterministic pipeline: targets come from the rule-based extractor,
    /// so every target is guaranteed to appear verbatim in the code.
    pub fn generate(&self, request: &GenerateQuestionRequest) -> AppResult<Question> {
        // Empty code means there is nothing to extract from, which is the
        // recoverable "no tokens" condition rather than a malformed request.
        if request.code.is_empty() {
            return Err(AppError::NoTokensFound);
        }
        request.validate()?;

        let tokens = self.extractor.extract_all_tokens(&request.code);
        if tokens.is_empty() {
            return Err(AppError::NoTokensFound);
        }
        log::debug!("extracted {} tokens", tokens.len());

        let targets = self
            .selector
            .select_targets(&tokens, request.num_blanks as usize);
        if targets.is_empty() {
            return Err(AppError::NoValidTargets);
        }
        if targets.len() < request.num_blanks as usize {
            log::info!(
                "only {} of {} requested targets available",
                targets.len(),
                request.num_blanks
            );
        }

        let mut rng = self.rng();
        let target_texts: Vec<String> = targets.into_iter().map(|t| t.text).collect();
        let distractor_sets: Vec<Vec<String>> = target_texts
            .iter()
            .map(|t| self.distractor_generator.distractors_for(t, &mut rng))
            .collect();

        self.assembler
            .assemble(&request.code, &target_texts, &distractor_sets, &mut rng)
    }

    /// The validated variant: code and candidate targets come from an external
    /// generator (typically a model), so each target is verified against the
    /// code and invalid ones are dropped rather than failing the question.
    pub fn generate_validated(&self, request: &ValidatedQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let mut rng = self.rng();
        let distractor_sets: Vec<Vec<String>> = request
            .targets
            .iter()
            .map(|t| self.distractor_generator.distractors_for(t, &mut rng))
            .collect();

        self.assembler
            .assemble(&request.code, &request.targets, &distractor_sets, &mut rng)
    }

    /// Fetch code from a collaborator, then run the deterministic pipeline.
    pub async fn generate_from_source(
        &self,
        source: &dyn CodeSource,
        request: &TopicQuestionRequest,
    ) -> AppResult<Question> {
        request.validate()?;

        let code = source.fetch_code(&request.topic).await?;
        log::info!(
            "topic '{}': fetched {} bytes of code",
            request.topic,
            code.len()
        );
        self.generate(&GenerateQuestionRequest::new(&code, request.num_blanks))
    }
}
