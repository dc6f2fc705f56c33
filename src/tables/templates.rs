use std::collections::HashMap;
use std::fs;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    constants::CODE_TEMPLATES_JSON,
    errors::{AppError, AppResult},
};

static BUILTIN: Lazy<CodeTemplates> = Lazy::new(|| {
    CodeTemplates::from_json_str(CODE_TEMPLATES_JSON)
        .expect("embedded code templates are valid")
});

/// Pre-written code snippets keyed by curriculum topic id (e.g. `L2_03`).
#[derive(Clone, Debug, Deserialize)]
pub struct CodeTemplates {
    pub version: u32,
    topics: HashMap<String, Vec<String>>,
}

impl CodeTemplates {
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let templates: CodeTemplates = serde_json::from_str(json)?;
        templates.validate()?;
        Ok(templates)
    }

    pub fn from_path(path: &str) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::InvalidTable(format!("failed to read code templates '{}': {}", path, e))
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> AppResult<()> {
        for (topic, snippets) in &self.topics {
            if snippets.is_empty() || snippets.iter().any(|s| s.is_empty()) {
                return Err(AppError::InvalidTable(format!(
                    "topic '{}' has an empty template list or template",
                    topic
                )));
            }
        }
        Ok(())
    }

    /// Templates for a topic id, falling back to the base `Lx_yy` id when the
    /// requested id carries a sub-variation suffix (`L2_03_b` -> `L2_03`).
    pub fn templates_for(&self, topic_id: &str) -> Option<&[String]> {
        if let Some(snippets) = self.topics.get(topic_id) {
            return Some(snippets.as_slice());
        }

        let parts: Vec<&str> = topic_id.split('_').collect();
        if parts.len() > 2 {
            let base_id = format!("{}_{}", parts[0], parts[1]);
            return self.topics.get(&base_id).map(|v| v.as_slice());
        }

        None
    }

    pub fn topic_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.topics.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}
