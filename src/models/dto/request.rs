use serde::Deserialize;
use validator::Validate;

/// Request for the deterministic pipeline: caller supplies the code text.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionRequest {
    #[validate(length(min = 1, max = 10000))]
    pub code: String,

    #[validate(range(min = 1, max = 10))]
    pub num_blanks: i16,
}

impl GenerateQuestionRequest {
    pub fn new(code: &str, num_blanks: i16) -> Self {
        Self {
            code: code.to_string(),
            num_blanks,
        }
    }
}

/// Request for the validated variant: code and candidate targets come from an
/// external generator and must be verified before use.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidatedQuestionRequest {
    #[validate(length(min = 1, max = 10000))]
    pub code: String,

    #[validate(length(min = 1, max = 10))]
    pub targets: Vec<String>,
}

impl ValidatedQuestionRequest {
    pub fn new(code: &str, targets: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            targets,
        }
    }
}

/// Request routed through a `CodeSource` collaborator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopicQuestionRequest {
    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    #[validate(range(min = 1, max = 10))]
    pub num_blanks: i16,
}
