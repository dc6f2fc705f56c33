use std::collections::HashMap;
use std::fs;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    constants::CPP_DISTRACTORS_JSON,
    errors::{AppError, AppResult},
};

static BUILTIN: Lazy<DistractorTable> = Lazy::new(|| {
    DistractorTable::from_json_str(CPP_DISTRACTORS_JSON)
        .expect("embedded distractor table is valid")
});

/// Hand-authored wrong-answer alternatives keyed by exact target text.
#[derive(Clone, Debug, Deserialize)]
pub struct DistractorTable {
    pub version: u32,
    entries: HashMap<String, Vec<String>>,
}

impl DistractorTable {
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let table: DistractorTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: &str) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::InvalidTable(format!("failed to read distractor table '{}': {}", path, e))
        })?;
        Self::from_json_str(&json)
    }

    // An entry equal to its own key would violate the options invariant.
    fn validate(&self) -> AppResult<()> {
        for (target, alternatives) in &self.entries {
            if alternatives.iter().any(|a| a == target) {
                return Err(AppError::InvalidTable(format!(
                    "distractor entry '{}' lists itself as an alternative",
                    target
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, target: &str) -> Option<&[String]> {
        self.entries.get(target).map(|v| v.as_slice())
    }

    pub fn contains(&self, target: &str) -> bool {
        self.entries.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let table = DistractorTable::builtin();
        assert_eq!(table.version, 1);
        assert!(table.len() > 30);
    }

    #[test]
    fn builtin_lookup_for_control_keywords() {
        let table = DistractorTable::builtin();
        assert_eq!(
            table.get("for").unwrap(),
            &["while".to_string(), "do".to_string(), "if".to_string()]
        );
        assert!(table.contains("cout"));
        assert!(!table.contains("getline"));
    }

    #[test]
    fn no_builtin_entry_contains_its_own_key() {
        let table = DistractorTable::builtin();
        for target in ["for", "int", "vector", "cout", "#include", "=="] {
            let alternatives = table.get(target).unwrap();
            assert!(alternatives.iter().all(|a| a != target));
        }
    }

    #[test]
    fn rejects_self_referential_entry() {
        let json = r#"{"version": 1, "entries": {"for": ["for", "do", "if"]}}"#;
        let result = DistractorTable::from_json_str(json);
        assert!(matches!(result, Err(AppError::InvalidTable(_))));
    }
}
