use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Synonym table used to broaden offline ingredient searches.
///
/// ```yaml
/// synonyms:
///   potato: [aloo, aloo matter]
///   rice: [chawal, basmati, pulao]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMap {
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for KeywordMap {
    fn default() -> Self {
        let mut synonyms = BTreeMap::new();
        synonyms.insert(
            "potato".to_string(),
            vec!["potato".into(), "aloo".into(), "aloo matter".into()],
        );
        synonyms.insert(
            "rice".to_string(),
            vec![
                "rice".into(),
                "chawal".into(),
                "basmati".into(),
                "pulao".into(),
            ],
        );
        Self { synonyms }
    }
}

impl KeywordMap {
    /// Load a keyword map from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read keyword map from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a keyword map, lower-casing keys and synonyms
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: KeywordMap = serde_yaml::from_str(content)?;

        let mut synonyms = BTreeMap::new();
        for (key, terms) in raw.synonyms {
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return Err(Error::Config("Keyword map contains an empty key".to_string()));
            }

            let terms: Vec<String> = terms
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();

            synonyms.entry(key).or_insert_with(Vec::new).extend(terms);
        }

        Ok(Self { synonyms })
    }

    /// Load from an optional path, falling back to the built-in map
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    "Failed to load keyword map from {}: {}; using built-in synonyms",
                    path.display(),
                    e.log_safe()
                );
                Self::default()
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.synonyms.get(token).map(Vec::as_slice)
    }
}
