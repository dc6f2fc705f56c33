pub mod distractors;
pub mod templates;
pub mod vocabulary;

pub use distractors::DistractorTable;
pub use templates::CodeTemplates;
pub use vocabulary::{CategoryEntry, VocabularyTable};
