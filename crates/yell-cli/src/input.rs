//! Reading documents from files or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use yell::Value;

/// Source name used for documents read from stdin.
pub const STDIN_SOURCE: &str = "stdin";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Path as given on the command line, or `stdin`.
    pub source: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Text,
}

impl Format {
    /// Format implied by the file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "txt" | "log" => Some(Format::Text),
            _ => None,
        }
    }
}

/// Parse `content` as `format`, or guess when the format is unknown:
/// JSON first, then a non-empty TOML table, then plain text.
pub fn parse(content: &str, format: Option<Format>) -> Result<Value> {
    match format {
        Some(Format::Json) => {
            let json: serde_json::Value = serde_json::from_str(content).context("Invalid JSON")?;
            Ok(Value::from(json))
        }
        Some(Format::Toml) => {
            let table: toml::Table = toml::from_str(content).context("Invalid TOML")?;
            Ok(Value::from(serde_json::to_value(table)?))
        }
        Some(Format::Text) => Ok(text(content)),
        None => Ok(sniff(content)),
    }
}

fn sniff(content: &str) -> Value {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(content) {
        return Value::from(json);
    }
    if let Ok(table) = toml::from_str::<toml::Table>(content)
        && !table.is_empty()
        && let Ok(json) = serde_json::to_value(table)
    {
        return Value::from(json);
    }
    text(content)
}

fn text(content: &str) -> Value {
    Value::from(content.trim_end_matches(['\r', '\n']))
}

pub fn load_file(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = parse(&content, Format::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Document {
        source: path.display().to_string(),
        value,
    })
}

/// Every file in order, or a single document from stdin when no files are given.
pub fn load_documents(files: &[PathBuf]) -> Result<Vec<Document>> {
    if files.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(vec![Document {
            source: STDIN_SOURCE.to_string(),
            value: parse(&content, None)?,
        }]);
    }

    files.iter().map(|path| load_file(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("dir/b.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("notes.txt")), Some(Format::Text));
        assert_eq!(Format::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_sniff_json_then_toml_then_text() {
        assert_eq!(
            parse(r#"{"a": 1}"#, None).unwrap(),
            Value::map([("a", Value::from(1))])
        );
        assert_eq!(
            parse("name = \"x\"\n", None).unwrap(),
            Value::map([("name", Value::from("x"))])
        );
        assert_eq!(parse("just words\n", None).unwrap(), Value::from("just words"));
    }

    fn keys(value: &Value) -> Vec<&str> {
        match value {
            Value::Map(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_documents_keep_key_order() {
        let json = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, Some(Format::Json)).unwrap();
        assert_eq!(keys(&json), vec!["zeta", "alpha", "mid"]);

        let toml = parse("zeta = 1\nalpha = 2\nmid = 3\n", Some(Format::Toml)).unwrap();
        assert_eq!(keys(&toml), vec!["zeta", "alpha", "mid"]);

        let sniffed = parse("zeta = 1\nalpha = 2\n", None).unwrap();
        assert_eq!(keys(&sniffed), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_explicit_format_errors() {
        assert!(parse("{not json", Some(Format::Json)).is_err());
        assert!(parse("= broken", Some(Format::Toml)).is_err());
    }

    #[test]
    fn test_load_file_keeps_source() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "[server]\nport = 8080\n")?;

        let doc = load_file(&path)?;
        assert_eq!(doc.source, path.display().to_string());
        assert_eq!(
            doc.value,
            Value::map([("server", Value::map([("port", Value::from(8080))]))])
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }
}
