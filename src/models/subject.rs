use serde::Deserialize;
use serde_json::Value;

/// A topic with its own notes file and documentation site.
///
/// Only `name` and `base_url` are read from the manifest; any other fields
/// in a record are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    /// Root of the documentation, e.g. `https://react.dev/reference`.
    pub base_url: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    /// File name of this subject's notes, e.g. `react_notes.md`.
    pub fn notes_file_name(&self) -> String {
        format!("{}_notes.md", self.name)
    }

    /// Join the documentation root with a resume sub-path.
    pub fn doc_url(&self, resume_path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resume_path)
    }
}

/// Check that a parsed manifest has the shape of a subject list.
///
/// Returns a human-readable reason on the first problem found.
pub fn validate_manifest(value: &Value) -> Result<(), String> {
    let records = value
        .as_array()
        .ok_or_else(|| "expected a list of subjects".to_string())?;

    if records.is_empty() {
        return Err("subject list is empty".to_string());
    }

    for (i, record) in records.iter().enumerate() {
        let fields = record
            .as_object()
            .ok_or_else(|| format!("subject {} is not an object", i))?;

        let name = required_str(fields, "name").map_err(|e| format!("subject {}: {}", i, e))?;
        if name.contains('/') || name.contains('\\') {
            return Err(format!(
                "subject {}: name '{}' must not contain a path separator",
                i, name
            ));
        }

        required_str(fields, "base_url").map_err(|e| format!("subject {}: {}", i, e))?;
    }

    Ok(())
}

fn required_str<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &str,
) -> Result<&'a str, String> {
    match fields.get(key) {
        None => Err(format!("missing field '{}'", key)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(format!("field '{}' is empty", key))
        }
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(format!("field '{}' must be a string", key)),
    }
}
