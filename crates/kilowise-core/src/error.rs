use std::path::PathBuf;

/// Failures of the collaborators around the rule core (catalog, profile, vocabulary).
///
/// Parsing, categorizing and evaluating rules never produce this type: they degrade
/// to a non-match instead.
#[derive(Debug, thiserror::Error)]
pub enum KilowiseError {
    #[error("failed to load tip catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid tip catalog: {0}")]
    CatalogInvalid(String),

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("failed to load vocabulary from {path}: {reason}")]
    VocabularyLoad { path: PathBuf, reason: String },

    #[error("invalid vocabulary: {0}")]
    VocabularyInvalid(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
