pub mod builtin;

use crate::error::KilowiseError;
use crate::model::Tip;
use std::collections::HashSet;
use std::path::Path;

/// Load a tip catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<Tip>, KilowiseError> {
    let content = std::fs::read_to_string(path).map_err(|e| KilowiseError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let tips: Vec<Tip> = serde_json::from_str(&content).map_err(|e| KilowiseError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&tips)?;
    tracing::debug!(path = %path.display(), tips = tips.len(), "loaded tip catalog");
    Ok(tips)
}

/// Parse a tip catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Vec<Tip>, KilowiseError> {
    let tips: Vec<Tip> = serde_json::from_str(json)?;
    validate_catalog(&tips)?;
    Ok(tips)
}

/// Validate that every tip has a distinct rowid.
pub fn validate_catalog(tips: &[Tip]) -> Result<(), KilowiseError> {
    let mut seen = HashSet::new();
    for tip in tips {
        if !seen.insert(&tip.rowid) {
            return Err(KilowiseError::CatalogInvalid(format!(
                "duplicate rowid '{}'",
                tip.rowid
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowId;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"[
            { "rowid": 1, "headline": "A", "description": "a", "rule": "Always" },
            { "rowid": 2, "headline": "B", "description": "b", "rule": "If Freezer = \"Yes\"",
              "category": "Appliances", "fuel": "Electric" }
        ]"#;
        let tips = parse_catalog_str(json).unwrap();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[1].rule, "If Freezer = \"Yes\"");
        assert_eq!(tips[1].fuel.as_deref(), Some("Electric"));
    }

    #[test]
    fn test_missing_rule_rejected() {
        assert!(parse_catalog_str(r#"[{ "rowid": 1, "headline": "A" }]"#).is_err());
    }

    #[test]
    fn test_non_array_rejected() {
        assert!(parse_catalog_str(r#"{ "rowid": 1, "rule": "Always" }"#).is_err());
    }

    #[test]
    fn test_duplicate_rowid_rejected() {
        let json = r#"[
            { "rowid": 7, "rule": "Always" },
            { "rowid": 7, "rule": "If Pool = Yes" }
        ]"#;
        assert!(matches!(
            parse_catalog_str(json),
            Err(KilowiseError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tips.json");
        std::fs::write(&path, r#"[{ "rowid": "x1", "rule": "Always" }]"#).unwrap();
        let tips = load_catalog(&path).unwrap();
        assert_eq!(tips[0].rowid, RowId::Text("x1".into()));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(KilowiseError::CatalogLoad { .. })
        ));
    }
}
