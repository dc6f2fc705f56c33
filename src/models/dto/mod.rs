pub mod request;
pub use request::{GenerateQuestionRequest, TopicQuestionRequest, ValidatedQuestionRequest};
