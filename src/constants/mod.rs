pub mod code_templates;
pub mod cpp_distractors;
pub mod cpp_vocabulary;

pub use code_templates::CODE_TEMPLATES_JSON;
pub use cpp_distractors::CPP_DISTRACTORS_JSON;
pub use cpp_vocabulary::CPP_VOCABULARY_JSON;
