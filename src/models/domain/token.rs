use serde::{Deserialize, Serialize};

/// Closed set of vocabulary categories. The serialized names match the keys
/// used in the vocabulary table document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Types,
    Control,
    Container,
    Method,
    Stream,
    Keyword,
    Operator,
    Include,
    Symbol,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Types => "types",
            Category::Control => "control",
            Category::Container => "container",
            Category::Method => "method",
            Category::Stream => "stream",
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Include => "include",
            Category::Symbol => "symbol",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One occurrence of a recognized vocabulary item in the source text.
/// Created fresh per extraction call, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Token {
    pub text: String,
    pub category: Category,
    /// Byte offset of the match within the code string.
    pub position: usize,
    /// 1-based line number of the match.
    pub line: usize,
}

impl Token {
    pub fn new(text: &str, category: Category, position: usize, code: &str) -> Self {
        let line = code[..position].matches('\n').count() + 1;
        Token {
            text: text.to_string(),
            category,
            position,
            line,
        }
    }
}
