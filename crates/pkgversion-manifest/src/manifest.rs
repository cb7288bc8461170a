use serde::Deserialize;
use serde_json::error::Category;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest anchor '{}' has no parent directory", .0.display())]
    NoParent(PathBuf),
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("manifest {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("manifest {} has no '{key}' field", path.display())]
    MissingField { path: PathBuf, key: String },
    #[error("manifest {} field '{key}' holds {kind}, expected a string", path.display())]
    UnsupportedValue {
        path: PathBuf,
        key: String,
        kind: &'static str,
    },
}

impl ManifestError {
    /// True when the manifest file could not be located at all.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NoParent(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Top-level object of a `package.json`. Only read, never written back.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub fn parse_manifest_str(input: &str) -> Result<Manifest, serde_json::Error> {
    serde_json::from_str(input)
}

/// Invalid UTF-8 is left to serde_json so it surfaces as a parse error.
pub fn parse_manifest_slice(input: &[u8]) -> Result<Manifest, serde_json::Error> {
    serde_json::from_slice(input)
}

pub fn parse_manifest_file(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest_slice(&content).map_err(|source| match source.classify() {
        // Well-formed JSON whose top level is an array, string, number, ...
        Category::Data => ManifestError::NotAnObject {
            path: path.to_path_buf(),
        },
        Category::Io | Category::Syntax | Category::Eof => ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// String form of a scalar field. Strings pass through untouched, numbers keep
/// the digits written in the file. Everything else has no string form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_package_json() {
        let input = r#"{
  "name": "superset",
  "version": "4.1.0",
  "private": true,
  "scripts": {"build": "webpack"},
  "engines": {"node": "^20.16.0"}
}"#;
        let manifest = parse_manifest_str(input).expect("should parse");
        assert_eq!(manifest.len(), 5);
        assert_eq!(
            manifest.field("version"),
            Some(&Value::String("4.1.0".to_owned()))
        );
        assert!(manifest.field("missing").is_none());
    }

    #[test]
    fn parses_empty_object() {
        let manifest = parse_manifest_str("{}").expect("should parse");
        assert!(manifest.is_empty());
    }

    #[test]
    fn rejects_truncated_json() {
        let err = parse_manifest_str(r#"{"version": "4.1"#).unwrap_err();
        assert_eq!(err.classify(), Category::Eof);
    }

    #[test]
    fn rejects_top_level_array() {
        let err = parse_manifest_str(r#"["version", "4.1.0"]"#).unwrap_err();
        assert_eq!(err.classify(), Category::Data);
    }

    #[test]
    fn file_not_found_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_manifest_file(dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("failed to read manifest"));
    }

    #[test]
    fn file_with_bad_syntax_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ version: 4.1.0 }").unwrap();
        let err = parse_manifest_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("package.json"));
    }

    #[test]
    fn file_with_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, b"{\"version\": \"4.1.0\xff\"}").unwrap();
        let err = parse_manifest_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }), "{err}");
        assert!(err.to_string().starts_with("failed to parse manifest"));
    }

    #[test]
    fn file_with_scalar_top_level_is_not_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "\"4.1.0\"").unwrap();
        let err = parse_manifest_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject { .. }));
    }

    #[test]
    fn scalar_text_keeps_strings_verbatim() {
        let value = Value::String(" 1.0.0-alpha+build.7 ".to_owned());
        assert_eq!(scalar_text(&value).as_deref(), Some(" 1.0.0-alpha+build.7 "));
    }

    #[test]
    fn scalar_text_renders_numbers() {
        let value: Value = serde_json::from_str("4.1").unwrap();
        assert_eq!(scalar_text(&value).as_deref(), Some("4.1"));
        assert_eq!(scalar_text(&Value::from(3)).as_deref(), Some("3"));
    }

    #[test]
    fn scalar_text_keeps_large_integers_exact() {
        let value: Value = serde_json::from_str("100000000000000000000000").unwrap();
        assert_eq!(
            scalar_text(&value).as_deref(),
            Some("100000000000000000000000")
        );
        let value: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(scalar_text(&value).as_deref(), Some("1.0"));
    }

    #[test]
    fn scalar_text_rejects_structured_values() {
        assert!(scalar_text(&Value::Null).is_none());
        assert!(scalar_text(&Value::Bool(true)).is_none());
        assert!(scalar_text(&serde_json::json!(["4", "1"])).is_none());
        assert!(scalar_text(&serde_json::json!({"major": 4})).is_none());
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&serde_json::json!([])), "an array");
        assert_eq!(value_kind(&serde_json::json!({})), "an object");
    }
}
