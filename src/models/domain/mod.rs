pub mod question;
pub mod token;
pub use question::{Question, SubQuestion};
pub use token::{Category, Token};
