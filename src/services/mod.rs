pub mod code_source;
pub mod distractor_generator;
pub mod question_assembler;
pub mod question_service;
pub mod target_selector;
pub mod token_extractor;

pub use code_source::{CodeSource, TemplateCodeSource};
pub use distractor_generator::DistractorGenerator;
pub use question_assembler::QuestionAssembler;
pub use question_service::QuestionService;
pub use target_selector::{ScoringPolicy, TargetSelector};
pub use token_extractor::TokenExtractor;
