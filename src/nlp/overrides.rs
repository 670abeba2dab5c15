// File: src/nlp/overrides.rs
use crate::error::{LemmaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Surface form -> lemma pairs that take precedence over the tagger's lemma.
///
/// Keys are matched against the lowercased surface text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LemmaOverrides {
    #[serde(default)]
    pub lemmas: HashMap<String, String>,
}

impl LemmaOverrides {
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let overrides: LemmaOverrides = serde_json::from_str(json).map_err(|source| LemmaError::Overrides {
            name: name.to_string(),
            source,
        })?;
        Ok(overrides.normalized())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| LemmaError::read(path, e))?;
        Self::from_json(&path.display().to_string(), &json)
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        if self.lemmas.is_empty() {
            return None;
        }
        self.lemmas.get(&surface.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    fn normalized(self) -> Self {
        let lemmas = self
            .lemmas
            .into_iter()
            .map(|(surface, lemma)| (surface.to_lowercase(), lemma))
            .collect();
        Self { lemmas }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        let overrides = LemmaOverrides::from_json("spelling", r#"{ "lemmas": { "Colour": "color" } }"#).unwrap();
        assert_eq!(overrides.get("colour"), Some("color"));
        assert_eq!(overrides.get("COLOUR"), Some("color"));
        assert_eq!(overrides.get("color"), None);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn missing_table_means_no_overrides() {
        let overrides = LemmaOverrides::from_json("empty", "{}").unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LemmaOverrides::from_json("broken", "{ not json").unwrap_err();
        assert!(matches!(err, LemmaError::Overrides { ref name, .. } if name == "broken"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = LemmaOverrides::from_path(Path::new("/nonexistent/overrides.json")).unwrap_err();
        assert!(matches!(err, LemmaError::Read { .. }));
    }
}
