//! Loading widget options and custom catalogs from JSON files.

use std::{fs, path::Path};

use catsearch::{Catalog, CategoryRecord, ConfigError, WidgetConfig};

use crate::error::TuiError;

fn read(path: &Path) -> Result<String, TuiError> {
    fs::read_to_string(path).map_err(|err| TuiError::Io(format!("{}: {err}", path.display())))
}

/// Reads a JSON options object, or returns the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid options object.
pub fn load_config(path: Option<&Path>) -> Result<WidgetConfig, TuiError> {
    match path {
        Some(path) => Ok(WidgetConfig::from_json(&read(path)?)?),
        None => Ok(WidgetConfig::default()),
    }
}

/// Parses a JSON array of category records into a catalog.
///
/// # Errors
///
/// Returns an error if `json` is not an array of records or the keys are empty or repeated.
pub fn parse_catalog(json: &str) -> Result<Catalog, TuiError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json).map_err(ConfigError::from)?;
    Ok(Catalog::new(records)?)
}

/// Reads a custom catalog, or returns the built-in one when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, TuiError> {
    match path {
        Some(path) => parse_catalog(&read(path)?),
        None => Ok(Catalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_paths() {
        assert_eq!(load_config(None).unwrap(), WidgetConfig::default());
        assert_eq!(load_catalog(None).unwrap(), Catalog::builtin());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_config(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(error, TuiError::Io(ref msg) if msg.starts_with("/definitely/not/here.json: ")));
    }

    #[test]
    fn catalog_from_json() {
        let catalog = parse_catalog(
            r#"[
                {"key":"a","displayName":"Apples","searchUrl":"/apples","singularName":"Apple"},
                {"name":"b","formatted":"Bananas","searchUrl":"/bananas","singular":"Banana"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn catalog_with_duplicate_keys_is_rejected() {
        let error = parse_catalog(
            r#"[
                {"key":"a","displayName":"A","searchUrl":"/a","singularName":"A"},
                {"key":"a","displayName":"B","searchUrl":"/b","singularName":"B"}
            ]"#,
        )
        .unwrap_err();
        assert_eq!(error.to_string(), "duplicate category key `a`");
    }

    #[test]
    fn malformed_catalog_is_a_config_error() {
        let error = parse_catalog("{}").unwrap_err();
        assert!(matches!(error, TuiError::Config(_)));
    }
}
