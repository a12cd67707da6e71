use super::Operator;
use crate::error::KilowiseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Attribute names a profile source may define. Rules are tokenized against this table,
/// so multi-word names such as `Pool Heater` are never split.
pub const DEFAULT_ATTRIBUTES: &[&str] = &[
    "user_type",
    "Area Type",
    "Freezer",
    "Dishwasher",
    "Dryer",
    "Washer",
    "Pool",
    "Hot Tub",
    "Pool Heater",
    "Rate Plan",
    "Insulation Pre 1992",
    "Programmable Thermostat",
    "CFLs",
    "Cool",
    "Water Heater Electric",
    "Ducts",
];

/// Operator spellings found in catalog rules.
pub const DEFAULT_OPERATORS: &[(&str, Operator)] = &[
    ("=", Operator::Eq),
    ("Not Equal", Operator::NotEq),
    ("Not Equal to", Operator::NotEq),
    ("Greater than", Operator::GreaterThan),
];

/// An operator spelling and the comparison it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorPhrase {
    pub phrase: String,
    pub operator: Operator,
}

/// The immutable key and operator vocabulary the rule grammar is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    attributes: BTreeSet<String>,
    operators: Vec<OperatorPhrase>,
}

/// On-disk shape of a vocabulary file.
#[derive(Debug, Deserialize)]
struct VocabularyDef {
    attributes: Vec<String>,
    #[serde(default)]
    operators: Option<Vec<OperatorPhrase>>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            attributes: DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            operators: default_operator_phrases(),
        }
    }
}

fn default_operator_phrases() -> Vec<OperatorPhrase> {
    DEFAULT_OPERATORS
        .iter()
        .map(|(phrase, operator)| OperatorPhrase {
            phrase: phrase.to_string(),
            operator: *operator,
        })
        .collect()
}

impl Vocabulary {
    /// Build a validated vocabulary from explicit attribute names and operator phrases.
    pub fn new(
        attributes: impl IntoIterator<Item = impl Into<String>>,
        operators: Vec<OperatorPhrase>,
    ) -> Result<Self, KilowiseError> {
        let mut names = BTreeSet::new();
        for attribute in attributes {
            let attribute: String = attribute.into();
            if attribute.trim().is_empty() {
                return Err(KilowiseError::VocabularyInvalid(
                    "attribute names must not be empty".into(),
                ));
            }
            if attribute != attribute.split_whitespace().collect::<Vec<_>>().join(" ") {
                return Err(KilowiseError::VocabularyInvalid(format!(
                    "attribute '{attribute}' must use single spaces between words"
                )));
            }
            if !names.insert(attribute.clone()) {
                return Err(KilowiseError::VocabularyInvalid(format!(
                    "duplicate attribute '{attribute}'"
                )));
            }
        }

        if operators.is_empty() {
            return Err(KilowiseError::VocabularyInvalid(
                "at least one operator phrase is required".into(),
            ));
        }
        let mut phrases = BTreeSet::new();
        for op in &operators {
            if op.phrase.split_whitespace().next().is_none() {
                return Err(KilowiseError::VocabularyInvalid(
                    "operator phrases must not be empty".into(),
                ));
            }
            if op.phrase != op.phrase.split_whitespace().collect::<Vec<_>>().join(" ") {
                return Err(KilowiseError::VocabularyInvalid(format!(
                    "operator phrase '{}' must use single spaces between words",
                    op.phrase
                )));
            }
            if !phrases.insert(op.phrase.as_str()) {
                return Err(KilowiseError::VocabularyInvalid(format!(
                    "duplicate operator phrase '{}'",
                    op.phrase
                )));
            }
        }

        Ok(Vocabulary {
            attributes: names,
            operators,
        })
    }

    /// Parse a vocabulary from JSON. Omitted `operators` fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, KilowiseError> {
        let def: VocabularyDef = serde_json::from_str(json)?;
        Vocabulary::new(
            def.attributes,
            def.operators.unwrap_or_else(default_operator_phrases),
        )
    }

    /// Load a vocabulary from a JSON file.
    pub fn load(path: &Path) -> Result<Self, KilowiseError> {
        let content = std::fs::read_to_string(path).map_err(|e| KilowiseError::VocabularyLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let vocabulary = Vocabulary::from_json_str(&content).map_err(|e| match e {
            KilowiseError::Json(e) => KilowiseError::VocabularyLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            attributes = vocabulary.attributes.len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    pub fn is_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn operators(&self) -> &[OperatorPhrase] {
        &self.operators
    }

    pub fn operator(&self, phrase: &str) -> Option<Operator> {
        self.operators
            .iter()
            .find(|op| op.phrase == phrase)
            .map(|op| op.operator)
    }

    /// Word count of the longest attribute name.
    pub fn max_attribute_words(&self) -> usize {
        self.attributes
            .iter()
            .map(|a| a.split(' ').count())
            .max()
            .unwrap_or(0)
    }

    /// Word count of the longest operator phrase.
    pub fn max_operator_words(&self) -> usize {
        self.operators
            .iter()
            .map(|op| op.phrase.split_whitespace().count())
            .max()
            .unwrap_or(0)
    }
}
