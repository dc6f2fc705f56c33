use std::fs;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    constants::CPP_VOCABULARY_JSON,
    errors::{AppError, AppResult},
    models::domain::Category,
};

static BUILTIN: Lazy<VocabularyTable> = Lazy::new(|| {
    VocabularyTable::from_json_str(CPP_VOCABULARY_JSON)
        .expect("embedded vocabulary table is valid")
});

/// One vocabulary category: its selection priority and literal token strings.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryEntry {
    pub name: Category,
    pub priority: i32,
    pub tokens: Vec<String>,
}

/// The versioned vocabulary document: category token lists plus per-category
/// priorities in a single resource, so the two cannot drift apart.
#[derive(Clone, Debug, Deserialize)]
pub struct VocabularyTable {
    pub version: u32,
    #[serde(default)]
    pub language: Option<String>,
    categories: Vec<CategoryEntry>,
}

impl VocabularyTable {
    /// The C++ vocabulary compiled into the crate.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let table: VocabularyTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: &str) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::InvalidTable(format!("failed to read vocabulary table '{}': {}", path, e))
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> AppResult<()> {
        if self.categories.is_empty() {
            return Err(AppError::InvalidTable(
                "vocabulary table has no categories".to_string(),
            ));
        }
        for entry in &self.categories {
            if entry.tokens.is_empty() {
                return Err(AppError::InvalidTable(format!(
                    "vocabulary category '{}' has no tokens",
                    entry.name
                )));
            }
            if entry.tokens.iter().any(|t| t.is_empty()) {
                return Err(AppError::InvalidTable(format!(
                    "vocabulary category '{}' contains an empty token",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Categories in document order. Order matters: when a token appears in
    /// two categories (`vector` is both container and include), the earlier
    /// category claims the occurrence.
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Selection priority for a category, defaulting to 1 for anything the
    /// document does not list.
    pub fn priority(&self, category: Category) -> i32 {
        self.categories
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.priority)
            .unwrap_or(1)
    }

    /// The first category (document order) containing `token`, along with the
    /// other members of that category. Used for sibling-based distractors.
    pub fn siblings_of(&self, token: &str) -> Option<(Category, Vec<&str>)> {
        let entry = self
            .categories
            .iter()
            .find(|e| e.tokens.iter().any(|t| t == token))?;
        let others: Vec<&str> = entry
            .tokens
            .iter()
            .filter(|t| *t != token)
            .map(|t| t.as_str())
            .collect();
        Some((entry.name, others))
    }
}
